use crate::model::{Assignment, Holiday, ScheduleEntry};
use chrono::{Datelike, NaiveDate};

/// Informations fusionnées pour un jour.
///
/// Le férié prime à l'affichage, l'affectation reste disponible en dessous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayInfo<'a> {
    pub date: NaiveDate,
    pub assignment: Option<Assignment>,
    pub holiday: Option<&'a Holiday>,
}

impl DayInfo<'_> {
    /// Libellé à afficher : nom du férié s'il existe, sinon l'affectation.
    pub fn label(&self) -> String {
        match (self.holiday, &self.assignment) {
            (Some(h), _) => h.name.clone(),
            (None, Some(a)) => a.to_string(),
            (None, None) => String::new(),
        }
    }
}

/// Cherche `date` dans l'escala (triée) et dans la liste de fériés.
pub fn lookup<'a>(schedule: &[ScheduleEntry], holidays: &'a [Holiday], date: NaiveDate) -> DayInfo<'a> {
    let assignment = schedule
        .binary_search_by_key(&date, |e| e.date)
        .ok()
        .map(|idx| schedule[idx].assignment.clone());
    let holiday = holidays.iter().find(|h| h.date == date);
    DayInfo {
        date,
        assignment,
        holiday,
    }
}

/// Tous les jours d'un mois avec leurs informations fusionnées ; vide si le mois est invalide.
pub fn month_view<'a>(
    schedule: &[ScheduleEntry],
    holidays: &'a [Holiday],
    year: i32,
    month: u32,
) -> Vec<DayInfo<'a>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    first
        .iter_days()
        .take_while(|d| d.month0() == first.month0())
        .map(|d| lookup(schedule, holidays, d))
        .collect()
}
