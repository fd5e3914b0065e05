use crate::dates;
use crate::model::ScheduleEntry;
use crate::storage::PersistedSchedule;
use csv::WriterBuilder;
use std::fs;
use std::path::Path;

/// Export CSV de l'escala : header `date,kind,shift`
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, schedule: &[ScheduleEntry]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["date", "kind", "shift"])?;
    for e in schedule {
        let date = dates::format_date(e.date);
        let shift = e.assignment.shift().map(|s| s.as_str()).unwrap_or("");
        w.write_record([date.as_str(), e.assignment.kind(), shift])?;
    }
    w.flush()?;
    Ok(())
}

/// Export JSON (jolie mise en forme) sous la forme persistée `YYYY-MM-DD` → affectation
pub fn export_schedule_json<P: AsRef<Path>>(path: P, schedule: &[ScheduleEntry]) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(&PersistedSchedule::from_schedule(schedule))?;
    fs::write(path, s)?;
    Ok(())
}
