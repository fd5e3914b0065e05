use crate::dates;
use crate::model::{Assignment, Schedule, ScheduleEntry};
use crate::settings::Settings;
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Escala sous forme persistée : `YYYY-MM-DD` → affectation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersistedSchedule(BTreeMap<String, Assignment>);

impl PersistedSchedule {
    pub fn from_schedule(schedule: &[ScheduleEntry]) -> Self {
        Self(
            schedule
                .iter()
                .map(|e| (dates::format_date(e.date), e.assignment.clone()))
                .collect(),
        )
    }

    /// Reconstruit l'escala ; les clés `YYYY-MM-DD` se trient comme les dates.
    pub fn to_schedule(&self) -> anyhow::Result<Schedule> {
        self.0
            .iter()
            .map(|(raw, assignment)| {
                let date = dates::parse_date(raw)
                    .with_context(|| format!("invalid schedule date: {raw}"))?;
                Ok(ScheduleEntry::new(date, assignment.clone()))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// État complet sauvegardé entre deux lancements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub settings: Settings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<PersistedSchedule>,
}

impl State {
    /// Remplace l'escala persistée d'un seul coup.
    pub fn replace_schedule(&mut self, schedule: &[ScheduleEntry]) {
        self.schedule = Some(PersistedSchedule::from_schedule(schedule));
    }

    pub fn schedule(&self) -> anyhow::Result<Option<Schedule>> {
        self.schedule.as_ref().map(PersistedSchedule::to_schedule).transpose()
    }
}

pub trait Storage {
    /// Charge l'état depuis un support.
    fn load(&self) -> anyhow::Result<State>;
    /// Sauvegarde de manière atomique.
    fn save(&self, state: &State) -> anyhow::Result<()>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if path.is_dir() {
            bail!("{} is a directory", path.display());
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fichier absent : réglages par défaut. Fichier illisible : erreur.
    pub fn load_or_default(&self) -> anyhow::Result<State> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no saved state, using defaults");
            return Ok(State::default());
        }
        self.load()
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<State> {
        let data = fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let state: State = serde_json::from_slice(&data)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        state
            .settings
            .validate()
            .with_context(|| format!("invalid settings in {}", self.path.display()))?;
        Ok(state)
    }

    fn save(&self, state: &State) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(state)?;
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        tracing::debug!(path = %self.path.display(), "state saved");
        Ok(())
    }
}
