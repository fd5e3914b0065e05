use crate::dates;
use crate::model::{Schedule, ShiftName};
use crate::scheduler::{self, ConfigError, RotationConfig, RotationPolicy};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Politique retenue dans les réglages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    #[default]
    Block,
    WeekAnchor,
}

/// Réglages de l'utilisateur : liste de postes, cadence, date de départ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub shifts: Vec<ShiftName>,
    pub work_days: u32,
    pub rest_days: u32,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub policy: PolicyKind,
    /// Date de base de la rotation hebdomadaire ; `start_date` si absente.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_base: Option<NaiveDate>,
}

impl Default for Settings {
    fn default() -> Self {
        let shifts = ["Noite", "Tarde", "Manhã"]
            .iter()
            .filter_map(ShiftName::new)
            .collect();
        Self {
            shifts,
            work_days: 6,
            rest_days: 1,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap_or_default(),
            policy: PolicyKind::Block,
            anchor_base: None,
        }
    }
}

impl Settings {
    /// Contrôle des réglages venus de l'extérieur (fichier) : postes uniques, cadence valide.
    ///
    /// Une liste vide reste acceptée ; la génération la signale.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (idx, shift) in self.shifts.iter().enumerate() {
            if self.shifts[..idx].contains(shift) {
                return Err(ConfigError::DuplicateShift(shift.as_str().to_string()));
            }
        }
        if self.work_days < 1 {
            return Err(ConfigError::InvalidWorkDays(self.work_days));
        }
        Ok(())
    }

    /// Ajoute un poste en fin de liste. Doublon exact ou nom vide refusés.
    pub fn add_shift(&mut self, name: &str) -> Result<&ShiftName, ConfigError> {
        let shift = ShiftName::new(name).ok_or(ConfigError::EmptyShift)?;
        if self.shifts.iter().any(|s| s == &shift) {
            return Err(ConfigError::DuplicateShift(shift.as_str().to_string()));
        }
        self.shifts.push(shift);
        let last = self.shifts.len() - 1;
        Ok(&self.shifts[last])
    }

    pub fn remove_shift(&mut self, name: &str) -> Result<ShiftName, ConfigError> {
        let pos = self
            .shifts
            .iter()
            .position(|s| s.as_str() == name.trim())
            .ok_or_else(|| ConfigError::UnknownShift(name.to_string()))?;
        Ok(self.shifts.remove(pos))
    }

    /// Déplace le poste en position `from` vers `to` (indices 0-based).
    pub fn move_shift(&mut self, from: usize, to: usize) -> Result<(), ConfigError> {
        let len = self.shifts.len();
        if from >= len {
            return Err(ConfigError::InvalidPosition(from, len));
        }
        if to >= len {
            return Err(ConfigError::InvalidPosition(to, len));
        }
        let shift = self.shifts.remove(from);
        self.shifts.insert(to, shift);
        Ok(())
    }

    pub fn set_cadence(&mut self, work_days: u32, rest_days: u32) -> Result<(), ConfigError> {
        if work_days < 1 {
            return Err(ConfigError::InvalidWorkDays(work_days));
        }
        self.work_days = work_days;
        self.rest_days = rest_days;
        Ok(())
    }

    pub fn set_start_date(&mut self, raw: &str) -> Result<NaiveDate, ConfigError> {
        let date = dates::parse_date(raw).ok_or_else(|| ConfigError::InvalidDate(raw.to_string()))?;
        self.start_date = date;
        Ok(date)
    }

    pub fn rotation_config(&self) -> RotationConfig {
        RotationConfig {
            shifts: self.shifts.clone(),
            work_days: self.work_days,
            rest_days: self.rest_days,
            start_date: self.start_date,
        }
    }

    pub fn policy(&self) -> RotationPolicy {
        match self.policy {
            PolicyKind::Block => RotationPolicy::BlockRotation {
                work_days: self.work_days,
                rest_days: self.rest_days,
            },
            PolicyKind::WeekAnchor => RotationPolicy::WeekAnchorRotation {
                base_date: self.anchor_base.unwrap_or(self.start_date),
            },
        }
    }

    /// Valide puis génère l'escala complète selon la politique retenue.
    pub fn generate(&self) -> Result<Schedule, ConfigError> {
        match self.policy {
            PolicyKind::Block => self.rotation_config().validate()?,
            PolicyKind::WeekAnchor if self.shifts.is_empty() => return Err(ConfigError::NoShifts),
            PolicyKind::WeekAnchor => {}
        }
        Ok(scheduler::generate_with(self.policy(), &self.shifts, self.start_date))
    }
}
