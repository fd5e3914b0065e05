#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use escala::{
    dates, holidays, io,
    lookup::{lookup, month_view},
    model::Schedule,
    scheduler::{assign_day, count_by_shift, cycle_anchor},
    settings::PolicyKind,
    storage::{JsonStorage, State, Storage},
    ConfigError, ShiftName,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste d'escala de revezamento (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON des réglages et de la dernière escala
    #[arg(long, global = true, env = "ESCALA_SETTINGS", default_value = "escala.json")]
    settings: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    Block,
    WeekAnchor,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ajouter un poste en fin de liste
    AddShift {
        #[arg(long)]
        name: String,
    },

    /// Retirer un poste
    RemoveShift {
        #[arg(long)]
        name: String,
    },

    /// Déplacer un poste (positions à partir de 0)
    MoveShift {
        #[arg(long)]
        from: usize,
        #[arg(long)]
        to: usize,
    },

    /// Définir la cadence jours travaillés / folgas
    Cadence {
        #[arg(long)]
        work: u32,
        #[arg(long)]
        rest: u32,
    },

    /// Définir la date de départ (YYYY-MM-DD)
    Start {
        #[arg(long)]
        date: String,
    },

    /// Choisir la politique de rotation
    Policy {
        #[arg(value_enum)]
        kind: PolicyArg,
        /// Date de base de la rotation hebdomadaire (YYYY-MM-DD)
        #[arg(long)]
        base: Option<String>,
    },

    /// Regénérer l'escala et la sauvegarder
    Generate {
        /// Affiche chaque jour
        #[arg(long)]
        print: bool,
    },

    /// Afficher un jour ou un mois (escala + fériés)
    Show {
        /// Jour précis (YYYY-MM-DD)
        #[arg(long, conflicts_with = "month")]
        date: Option<String>,
        /// Mois (YYYY-MM)
        #[arg(long)]
        month: Option<String>,
        /// Fichier de fériés (JSON ou CSV)
        #[arg(long)]
        holidays: Option<String>,
    },

    /// Poste d'un jour selon la rotation hebdomadaire ancrée
    Day {
        #[arg(long)]
        date: String,
        /// Date de base (défaut : réglages)
        #[arg(long)]
        base: Option<String>,
    },

    /// Totaux par poste
    Summary,

    /// Exporter l'escala
    Export {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.settings)?;
    let mut state = storage.load_or_default()?;

    let code = match cli.cmd {
        Commands::AddShift { name } => {
            let added = state.settings.add_shift(&name)?.clone();
            println!("Added shift {added} ({} total)", state.settings.shifts.len());
            refresh(&mut state, &storage)?
        }
        Commands::RemoveShift { name } => {
            let removed = state.settings.remove_shift(&name)?;
            println!("Removed shift {removed}");
            refresh(&mut state, &storage)?
        }
        Commands::MoveShift { from, to } => {
            state.settings.move_shift(from, to)?;
            print_shifts(&state.settings.shifts);
            refresh(&mut state, &storage)?
        }
        Commands::Cadence { work, rest } => {
            state.settings.set_cadence(work, rest)?;
            refresh(&mut state, &storage)?
        }
        Commands::Start { date } => {
            state.settings.set_start_date(&date)?;
            refresh(&mut state, &storage)?
        }
        Commands::Policy { kind, base } => {
            state.settings.policy = match kind {
                PolicyArg::Block => PolicyKind::Block,
                PolicyArg::WeekAnchor => PolicyKind::WeekAnchor,
            };
            if let Some(raw) = base {
                state.settings.anchor_base = Some(parse_arg_date(&raw)?);
            }
            refresh(&mut state, &storage)?
        }
        Commands::Generate { print } => {
            let code = refresh(&mut state, &storage)?;
            if print {
                for e in state.schedule()?.unwrap_or_default() {
                    println!("{} {}", dates::format_date(e.date), e.assignment);
                }
            }
            code
        }
        Commands::Show {
            date,
            month,
            holidays: holiday_path,
        } => {
            let schedule = current_schedule(&state)?;
            // (jour ou premier jour du mois, vue mensuelle ?)
            let (target, whole_month) = match (date, month) {
                (Some(raw), _) => (parse_arg_date(&raw)?, false),
                (None, Some(raw)) => (parse_arg_date(&format!("{raw}-01"))?, true),
                (None, None) => (state.settings.start_date, false),
            };
            let list = holiday_path
                .map(|p| {
                    holidays::holidays_or_empty(holidays::source_for_path(p).as_ref(), target.year())
                })
                .unwrap_or_default();
            let infos = if whole_month {
                month_view(&schedule, &list, target.year(), target.month())
            } else {
                vec![lookup(&schedule, &list, target)]
            };
            for info in infos {
                let assignment = info
                    .assignment
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "-".to_string());
                match info.holiday {
                    Some(h) => println!(
                        "{} | {} | {} ({})",
                        dates::format_date(info.date),
                        assignment,
                        h.name,
                        h.kind
                    ),
                    None => println!("{} | {}", dates::format_date(info.date), assignment),
                }
            }
            0
        }
        Commands::Day { date, base } => {
            let date = parse_arg_date(&date)?;
            let base = match base {
                Some(raw) => parse_arg_date(&raw)?,
                None => state.settings.anchor_base.unwrap_or(state.settings.start_date),
            };
            let anchor = cycle_anchor(base)
                .map(dates::format_date)
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{} {} (anchor {anchor})",
                dates::format_date(date),
                assign_day(date, &state.settings.shifts, base)
            );
            0
        }
        Commands::Summary => {
            let summary = count_by_shift(&current_schedule(&state)?);
            for (name, days) in &summary.per_shift {
                println!("{name}: {days}");
            }
            println!("Folga: {}", summary.rest);
            if summary.unassigned > 0 {
                println!("-: {}", summary.unassigned);
            }
            0
        }
        Commands::Export { out_json, out_csv } => {
            let schedule = current_schedule(&state)?;
            if let Some(path) = out_json {
                io::export_schedule_json(path, &schedule)?;
            }
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &schedule)?;
            }
            println!("Exported {} day(s)", schedule.len());
            0
        }
    };

    std::process::exit(code);
}

/// Regénère l'escala après un changement et sauvegarde l'état en une écriture.
fn refresh(state: &mut State, storage: &JsonStorage) -> Result<i32> {
    let code = match state.settings.generate() {
        Ok(schedule) => {
            state.replace_schedule(&schedule);
            match (schedule.first(), schedule.last()) {
                (Some(first), Some(last)) => println!(
                    "Generated {} day(s) from {} to {}",
                    schedule.len(),
                    dates::format_date(first.date),
                    dates::format_date(last.date)
                ),
                _ => println!("Generated 0 day(s)"),
            }
            0
        }
        Err(err @ (ConfigError::NoShifts | ConfigError::InvalidWorkDays(_))) => {
            state.schedule = None;
            eprintln!("Warning: {err}");
            // Code 2 = WARNING/INCOMPLETE
            2
        }
        Err(err) => return Err(err.into()),
    };
    storage.save(state)?;
    Ok(code)
}

/// Escala sauvegardée, ou générée à la volée si absente.
fn current_schedule(state: &State) -> Result<Schedule> {
    match state.schedule()? {
        Some(schedule) => Ok(schedule),
        None => Ok(state.settings.generate().unwrap_or_default()),
    }
}

fn parse_arg_date(raw: &str) -> Result<NaiveDate> {
    dates::parse_date(raw).with_context(|| format!("invalid date {raw} (expected YYYY-MM-DD)"))
}

fn print_shifts(shifts: &[ShiftName]) {
    for (idx, s) in shifts.iter().enumerate() {
        println!("{idx}: {s}");
    }
}
