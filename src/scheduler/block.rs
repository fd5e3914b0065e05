use crate::dates;
use crate::model::{Assignment, Schedule, ScheduleEntry, ShiftName};
use chrono::NaiveDate;

/// Escala par blocs, de `start_date` au 31 décembre de la même année.
///
/// Le jour `n` (compté depuis `start_date`) appartient au bloc
/// `n / (work_days + rest_days)` ; ses `work_days` premiers jours vont au
/// poste `shifts[bloc % shifts.len()]`, les suivants sont des folgas. Un bloc
/// coupé par la fin d'année est tronqué, jamais sauté.
pub(super) fn generate(
    shifts: &[ShiftName],
    work_days: u32,
    rest_days: u32,
    start_date: NaiveDate,
) -> Schedule {
    if shifts.is_empty() || work_days < 1 {
        tracing::debug!(
            shifts = shifts.len(),
            work_days,
            "invalid rotation config, empty schedule"
        );
        return Vec::new();
    }
    let Some(end) = dates::end_of_year(start_date) else {
        return Vec::new();
    };

    let work = u64::from(work_days);
    let cycle = work + u64::from(rest_days);
    let total = shifts.len() as u64;

    let schedule: Schedule = dates::days_inclusive(start_date, end)
        .zip(0u64..)
        .map(|(date, offset)| {
            let block = offset / cycle;
            let assignment = if offset % cycle < work {
                Assignment::Shift(shifts[(block % total) as usize].clone())
            } else {
                Assignment::Rest
            };
            ScheduleEntry::new(date, assignment)
        })
        .collect();

    tracing::debug!(
        start = %start_date,
        days = schedule.len(),
        work_days,
        rest_days,
        "block rotation generated"
    );
    schedule
}
