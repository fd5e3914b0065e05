#![forbid(unsafe_code)]
//! Escala — génération locale d'escalas de revezamento (sans BD).
//!
//! - Rotation par blocs (jours travaillés / folgas) ou hebdomadaire ancrée.
//! - Fonctions pures : mêmes entrées, même escala.
//! - Stockage fichier JSON ; fériés fournis par une source externe.
//! - Dates calendaires sans fuseau, échangées au format `YYYY-MM-DD`.

pub mod dates;
pub mod holidays;
pub mod io;
pub mod lookup;
pub mod model;
pub mod scheduler;
pub mod settings;
pub mod storage;

pub use holidays::{holidays_or_empty, CsvFileHolidays, HolidaySource, JsonFileHolidays};
pub use lookup::{lookup, month_view, DayInfo};
pub use model::{Assignment, Holiday, Schedule, ScheduleEntry, ShiftName};
pub use scheduler::{
    assign_day, count_by_shift, cycle_anchor, generate, generate_from_str, generate_with,
    ConfigError, RotationConfig, RotationPolicy, ScheduleSummary,
};
pub use settings::{PolicyKind, Settings};
pub use storage::{JsonStorage, PersistedSchedule, State, Storage};
