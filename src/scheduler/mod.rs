mod block;
mod types;
mod week_anchor;

pub use types::{ConfigError, RotationConfig, RotationPolicy};

use crate::dates;
use crate::model::{Assignment, Schedule, ShiftName};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Rotation par blocs de `work_days` jours + `rest_days` folgas, postes en round-robin.
///
/// Entrée invalide (aucun poste, `work_days == 0`) : escala vide, jamais d'erreur.
pub fn generate(
    shifts: &[ShiftName],
    work_days: u32,
    rest_days: u32,
    start_date: NaiveDate,
) -> Schedule {
    block::generate(shifts, work_days, rest_days, start_date)
}

/// Variante de [`generate`] dont la date de départ arrive sous forme texte
/// (`YYYY-MM-DD`) ; une date illisible donne une escala vide.
pub fn generate_from_str(
    shifts: &[ShiftName],
    work_days: u32,
    rest_days: u32,
    start_date: &str,
) -> Schedule {
    match dates::parse_date(start_date) {
        Some(start) => generate(shifts, work_days, rest_days, start),
        None => {
            tracing::debug!(start_date, "unparseable start date, empty schedule");
            Vec::new()
        }
    }
}

/// Génère l'escala selon la politique choisie.
///
/// - `BlockRotation` couvre `start_date..=31/12`.
/// - `WeekAnchorRotation` couvre toute l'année de `start_date`.
pub fn generate_with(policy: RotationPolicy, shifts: &[ShiftName], start_date: NaiveDate) -> Schedule {
    match policy {
        RotationPolicy::BlockRotation {
            work_days,
            rest_days,
        } => block::generate(shifts, work_days, rest_days, start_date),
        RotationPolicy::WeekAnchorRotation { base_date } => {
            week_anchor::generate(shifts, base_date, start_date)
        }
    }
}

/// Affectation d'un jour selon la rotation hebdomadaire ancrée sur `base_date`.
pub fn assign_day(date: NaiveDate, shifts: &[ShiftName], base_date: NaiveDate) -> Assignment {
    week_anchor::assign_day(date, shifts, base_date)
}

/// Début du cycle hebdomadaire : lundi suivant le premier dimanche à partir de `base_date`.
pub fn cycle_anchor(base_date: NaiveDate) -> Option<NaiveDate> {
    week_anchor::cycle_anchor(base_date)
}

impl RotationConfig {
    pub fn generate(&self) -> Schedule {
        generate(&self.shifts, self.work_days, self.rest_days, self.start_date)
    }
}

/// Totaux d'une escala.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleSummary {
    /// Jours travaillés par poste, clé = nom tel qu'il apparaît en premier.
    pub per_shift: BTreeMap<String, u32>,
    pub rest: u32,
    pub unassigned: u32,
}

/// Compte les jours par poste ; les noms sont regroupés sans tenir compte de la casse.
pub fn count_by_shift(schedule: &Schedule) -> ScheduleSummary {
    let mut summary = ScheduleSummary::default();
    for entry in schedule {
        match &entry.assignment {
            Assignment::Shift(name) => {
                let key = summary
                    .per_shift
                    .keys()
                    .find(|k| name.matches(k))
                    .cloned()
                    .unwrap_or_else(|| name.as_str().to_owned());
                *summary.per_shift.entry(key).or_default() += 1;
            }
            Assignment::Rest => summary.rest += 1,
            Assignment::Unassigned => summary.unassigned += 1,
        }
    }
    summary
}
