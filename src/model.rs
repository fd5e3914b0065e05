use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Nom de poste (turno), jamais vide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShiftName(String);

impl ShiftName {
    /// Crée un nom en retirant les espaces de bord ; `None` si le résultat est vide.
    pub fn new<S: AsRef<str>>(s: S) -> Option<Self> {
        let trimmed = s.as_ref().trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Comparaison insensible à la casse, utilisée pour l'affichage.
    pub fn matches(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.trim().to_lowercase()
    }
}

impl TryFrom<String> for ShiftName {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value).ok_or("shift name cannot be empty")
    }
}

impl From<ShiftName> for String {
    fn from(value: ShiftName) -> Self {
        value.0
    }
}

impl fmt::Display for ShiftName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Affectation d'un jour.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Assignment {
    Shift(ShiftName),
    /// Jour de repos (folga) prévu par la cadence.
    Rest,
    /// Hors de la rotation définie (avant l'ancre de la politique hebdomadaire).
    Unassigned,
}

impl Assignment {
    pub fn shift(&self) -> Option<&ShiftName> {
        match self {
            Assignment::Shift(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, Assignment::Rest)
    }

    /// Libellé court : `rest`, `unassigned` ou `shift`.
    pub fn kind(&self) -> &'static str {
        match self {
            Assignment::Shift(_) => "shift",
            Assignment::Rest => "rest",
            Assignment::Unassigned => "unassigned",
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assignment::Shift(name) => write!(f, "{name}"),
            Assignment::Rest => f.write_str("Folga"),
            Assignment::Unassigned => f.write_str("-"),
        }
    }
}

/// Un jour de l'escala.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub date: NaiveDate,
    pub assignment: Assignment,
}

impl ScheduleEntry {
    pub fn new(date: NaiveDate, assignment: Assignment) -> Self {
        Self { date, assignment }
    }
}

/// Escala complète, triée par date croissante, un jour par entrée.
pub type Schedule = Vec<ScheduleEntry>;

/// Jour férié fourni par une source externe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub date: NaiveDate,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl Holiday {
    pub fn new<N: Into<String>, K: Into<String>>(date: NaiveDate, name: N, kind: K) -> Self {
        Self {
            date,
            name: name.into(),
            kind: kind.into(),
        }
    }
}

/// Accepte `YYYY-MM-DD` ou une date-heure (RFC 3339 ou naïve) dont on garde la date.
pub(crate) fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

fn deserialize_calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid calendar date: {raw}")))
}
