use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Nombre maximal de jours qu'une escala peut couvrir (année bissextile).
pub const MAX_SPAN_DAYS: usize = 366;

/// Format d'échange des dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Ajoute `n` jours et renvoie une nouvelle valeur ; `None` en cas de dépassement.
pub fn add_days(date: NaiveDate, n: u64) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(n))
}

/// 31 décembre de l'année de `date`.
pub fn end_of_year(date: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), 12, 31)
}

pub fn start_of_year(date: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), 1, 1)
}

pub fn is_sunday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}

/// Premier dimanche à partir de `date` (inclus).
pub fn first_sunday_on_or_after(date: NaiveDate) -> Option<NaiveDate> {
    let ahead = 6 - date.weekday().num_days_from_monday();
    add_days(date, u64::from(ahead))
}

/// Premier lundi strictement après `date`.
pub fn next_monday_after(date: NaiveDate) -> Option<NaiveDate> {
    let ahead = 7 - date.weekday().num_days_from_monday();
    add_days(date, u64::from(ahead))
}

/// Jours de `start` à `end` inclus, jamais plus de [`MAX_SPAN_DAYS`].
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start
        .iter_days()
        .take_while(move |d| *d <= end)
        .take(MAX_SPAN_DAYS)
}

/// Parse strict `YYYY-MM-DD` : seule la forme canonique est acceptée.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .filter(|date| format_date(*date) == raw)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn sunday_and_monday_helpers() {
        // 2025-01-01 est un mercredi
        assert_eq!(first_sunday_on_or_after(d(2025, 1, 1)), Some(d(2025, 1, 5)));
        assert_eq!(first_sunday_on_or_after(d(2025, 1, 5)), Some(d(2025, 1, 5)));
        assert_eq!(next_monday_after(d(2025, 1, 5)), Some(d(2025, 1, 6)));
        assert_eq!(next_monday_after(d(2025, 1, 6)), Some(d(2025, 1, 13)));
        assert!(is_sunday(d(2025, 1, 12)));
        assert!(!is_sunday(d(2025, 1, 13)));
    }

    #[test]
    fn year_bounds_and_span() {
        assert_eq!(end_of_year(d(2024, 2, 29)), Some(d(2024, 12, 31)));
        assert_eq!(start_of_year(d(2024, 2, 29)), Some(d(2024, 1, 1)));
        assert_eq!(days_inclusive(d(2024, 1, 1), d(2024, 12, 31)).count(), 366);
        assert_eq!(days_inclusive(d(2025, 1, 1), d(2025, 12, 31)).count(), 365);
        assert_eq!(days_inclusive(d(2025, 1, 1), d(2030, 12, 31)).count(), MAX_SPAN_DAYS);
        assert_eq!(days_inclusive(d(2025, 2, 1), d(2025, 1, 1)).count(), 0);
    }

    #[test]
    fn add_days_returns_new_value() {
        let start = d(2025, 12, 31);
        let next = add_days(start, 1).unwrap();
        assert_eq!(next, d(2026, 1, 1));
        assert_eq!(start, d(2025, 12, 31));
        assert_eq!(add_days(NaiveDate::MAX, 1), None);
    }

    #[test]
    fn strict_interchange_format() {
        assert_eq!(parse_date("2025-01-06"), Some(d(2025, 1, 6)));
        assert_eq!(parse_date("06/01/2025"), None);
        assert_eq!(parse_date("2025-02-30"), None);
        assert_eq!(format_date(d(2025, 1, 6)), "2025-01-06");
    }

    #[test]
    fn non_canonical_dates_are_rejected() {
        assert_eq!(parse_date("2025-1-6"), None);
        assert_eq!(parse_date("+2025-01-06"), None);
        assert_eq!(parse_date("25-01-06"), None);
        assert_eq!(parse_date(" 2025-01-06 "), Some(d(2025, 1, 6)));
    }
}
