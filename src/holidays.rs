use crate::model::{parse_calendar_date, Holiday};
use anyhow::{bail, Context, Result};
use chrono::Datelike;
use csv::ReaderBuilder;
use std::fs;
use std::path::{Path, PathBuf};

/// Fournisseur de jours fériés pour une année.
pub trait HolidaySource {
    fn holidays(&self, year: i32) -> Result<Vec<Holiday>>;
}

/// Tableau JSON `[{"date": "...", "name": "...", "type": "..."}]`.
#[derive(Debug, Clone)]
pub struct JsonFileHolidays {
    path: PathBuf,
}

impl JsonFileHolidays {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl HolidaySource for JsonFileHolidays {
    fn holidays(&self, year: i32) -> Result<Vec<Holiday>> {
        let data = fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let all: Vec<Holiday> = serde_json::from_slice(&data)
            .with_context(|| format!("parsing holidays {}", self.path.display()))?;
        Ok(all.into_iter().filter(|h| h.date.year() == year).collect())
    }
}

/// CSV avec en-tête `date,name[,type]`.
#[derive(Debug, Clone)]
pub struct CsvFileHolidays {
    path: PathBuf,
}

impl CsvFileHolidays {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl HolidaySource for CsvFileHolidays {
    fn holidays(&self, year: i32) -> Result<Vec<Holiday>> {
        let mut rdr = ReaderBuilder::new().has_headers(true).from_path(&self.path)?;
        let mut out = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            let raw = rec.get(0).context("missing date")?.trim();
            let name = rec.get(1).context("missing name")?.trim();
            let kind = rec.get(2).map(str::trim).unwrap_or("");
            if name.is_empty() {
                bail!("invalid holiday row (empty name) for {raw}");
            }
            let date = parse_calendar_date(raw).with_context(|| format!("invalid date: {raw}"))?;
            if date.year() == year {
                out.push(Holiday::new(date, name, kind));
            }
        }
        Ok(out)
    }
}

/// Choisit la source selon l'extension (`.csv`, sinon JSON).
pub fn source_for_path<P: AsRef<Path>>(path: P) -> Box<dyn HolidaySource> {
    let path = path.as_ref();
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => Box::new(CsvFileHolidays::new(path)),
        _ => Box::new(JsonFileHolidays::new(path)),
    }
}

/// Interroge la source ; toute erreur est journalisée et vaut « aucun férié ».
pub fn holidays_or_empty(source: &dyn HolidaySource, year: i32) -> Vec<Holiday> {
    match source.holidays(year) {
        Ok(list) => list,
        Err(err) => {
            tracing::warn!(year, error = %err, "holidays unavailable");
            Vec::new()
        }
    }
}
