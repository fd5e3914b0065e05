use crate::model::ShiftName;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Politique de rotation, choisie explicitement par l'appelant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum RotationPolicy {
    /// `work_days` jours sur un poste, `rest_days` jours de folga, puis poste suivant.
    BlockRotation { work_days: u32, rest_days: u32 },
    /// Un poste par semaine à partir du lundi d'ancrage ; dimanche toujours en folga.
    WeekAnchorRotation { base_date: NaiveDate },
}

/// Paramètres d'une génération par blocs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationConfig {
    pub shifts: Vec<ShiftName>,
    pub work_days: u32,
    pub rest_days: u32,
    pub start_date: NaiveDate,
}

impl RotationConfig {
    /// Vérifie les préconditions ; le générateur, lui, renvoie simplement une escala vide.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shifts.is_empty() {
            return Err(ConfigError::NoShifts);
        }
        if self.work_days < 1 {
            return Err(ConfigError::InvalidWorkDays(self.work_days));
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("add at least one shift to generate a schedule")]
    NoShifts,
    #[error("work days must be at least 1 (got {0})")]
    InvalidWorkDays(u32),
    #[error("invalid start date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("shift name cannot be empty")]
    EmptyShift,
    #[error("shift already exists: {0}")]
    DuplicateShift(String),
    #[error("unknown shift: {0}")]
    UnknownShift(String),
    #[error("invalid position {0} (list has {1} shift(s))")]
    InvalidPosition(usize, usize),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
