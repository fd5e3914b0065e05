use crate::dates;
use crate::model::{Assignment, Schedule, ScheduleEntry, ShiftName};
use chrono::NaiveDate;

/// Lundi qui suit le premier dimanche à partir de `base_date`.
pub(super) fn cycle_anchor(base_date: NaiveDate) -> Option<NaiveDate> {
    dates::first_sunday_on_or_after(base_date).and_then(dates::next_monday_after)
}

pub(super) fn assign_day(date: NaiveDate, shifts: &[ShiftName], base_date: NaiveDate) -> Assignment {
    if dates::is_sunday(date) {
        return Assignment::Rest;
    }
    let Some(anchor) = cycle_anchor(base_date) else {
        return Assignment::Unassigned;
    };
    if date < anchor || shifts.is_empty() {
        return Assignment::Unassigned;
    }
    // semaines complètes écoulées depuis le lundi d'ancrage
    let weeks = (date - anchor).num_days() / 7;
    let index = weeks.rem_euclid(shifts.len() as i64) as usize;
    Assignment::Shift(shifts[index].clone())
}

/// Tous les jours de l'année de `date`, jours hors rotation compris.
pub(super) fn generate(shifts: &[ShiftName], base_date: NaiveDate, date: NaiveDate) -> Schedule {
    let (Some(start), Some(end)) = (dates::start_of_year(date), dates::end_of_year(date)) else {
        return Vec::new();
    };
    let schedule: Schedule = dates::days_inclusive(start, end)
        .map(|day| ScheduleEntry::new(day, assign_day(day, shifts, base_date)))
        .collect();
    tracing::debug!(
        year = %start.format("%Y"),
        base = %base_date,
        shifts = shifts.len(),
        "week-anchor rotation generated"
    );
    schedule
}
