//! Saved plan persistence with file locking.
//!
//! Saved workouts, splits and calorie results live in a single JSON file,
//! together with the last calorie calculator settings.

use crate::{CalorieRequest, Error, MetabolicResult, Result, WeeklySplit, Workout};
use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use uuid::Uuid;

/// File name of the plan store inside the data directory
pub const PLANS_FILE: &str = "plans.json";

/// A result the user chose to keep
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SavedPlan {
    Workout(Workout),
    Split(WeeklySplit),
    Calories {
        request: CalorieRequest,
        result: MetabolicResult,
    },
}

impl SavedPlan {
    pub fn kind(&self) -> &'static str {
        match self {
            SavedPlan::Workout(_) => "workout",
            SavedPlan::Split(_) => "split",
            SavedPlan::Calories { .. } => "calories",
        }
    }

    /// One-line description for listings
    pub fn title(&self) -> String {
        match self {
            SavedPlan::Workout(w) => format!(
                "{} - {} ({}, {})",
                w.muscle.key(),
                w.goal,
                w.level.key(),
                w.equipment.key()
            ),
            SavedPlan::Split(s) => format!(
                "{} x{} - {} ({})",
                s.split_type, s.days_per_week, s.goal, s.level
            ),
            SavedPlan::Calories { request, result } => format!(
                "{} cal/day - {}",
                result.target_calories, request.goal
            ),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SavedEntry {
    pub id: Uuid,
    pub saved_at: DateTime<Utc>,
    pub plan: SavedPlan,
}

/// Everything the user has saved
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct SavedPlans {
    #[serde(default)]
    pub entries: Vec<SavedEntry>,
    #[serde(default)]
    pub calorie_settings: Option<CalorieRequest>,
}

impl SavedPlans {
    /// Append a plan and return its new id
    pub fn add(&mut self, plan: SavedPlan, saved_at: DateTime<Utc>) -> Uuid {
        let id = Uuid::new_v4();
        tracing::debug!("Saving {} plan {}", plan.kind(), id);
        self.entries.push(SavedEntry { id, saved_at, plan });
        id
    }

    pub fn get(&self, id: Uuid) -> Option<&SavedEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Remove a plan by id
    pub fn remove(&mut self, id: Uuid) -> Result<SavedEntry> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(Error::EntryNotFound(id))?;
        Ok(self.entries.remove(idx))
    }

    /// Saved plans, oldest first
    pub fn list(&self) -> &[SavedEntry] {
        &self.entries
    }

    /// Load saved plans from a file with shared locking
    ///
    /// Returns an empty store if the file doesn't exist.
    /// If the file is corrupted, logs a warning and returns an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No plans file at {:?}, starting empty", path);
            return Ok(Self::default());
        }

        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!("Unable to open plans file {:?}: {}. Starting empty.", path, e);
                return Ok(Self::default());
            }
        };

        if let Err(e) = file.lock_shared() {
            tracing::warn!("Unable to lock plans file {:?}: {}. Starting empty.", path, e);
            return Ok(Self::default());
        }

        let mut contents = String::new();
        let mut reader = std::io::BufReader::new(&file);
        if let Err(e) = reader.read_to_string(&mut contents) {
            let _ = file.unlock();
            tracing::warn!("Failed to read plans file {:?}: {}. Starting empty.", path, e);
            return Ok(Self::default());
        }

        file.unlock()?;

        match serde_json::from_str::<SavedPlans>(&contents) {
            Ok(plans) => {
                tracing::debug!("Loaded {} saved plans from {:?}", plans.entries.len(), path);
                Ok(plans)
            }
            Err(e) => {
                tracing::warn!("Failed to parse plans file {:?}: {}. Starting empty.", path, e);
                Ok(Self::default())
            }
        }
    }

    /// Save plans to a file with exclusive locking
    ///
    /// Writes to a temp file in the same directory, syncs it, then renames
    /// it over the original.
    pub fn save(&self, path: &Path) -> Result<()> {
        let parent = path
            .parent()
            .ok_or_else(|| Error::InvalidInput(format!("plans path {:?} has no parent", path)))?;
        std::fs::create_dir_all(parent)?;

        let temp = NamedTempFile::new_in(parent)?;
        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            let contents = serde_json::to_string_pretty(self)?;
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        temp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved {} plans to {:?}", self.entries.len(), path);
        Ok(())
    }

    /// Load, modify and save back
    pub fn update<F, T>(path: &Path, f: F) -> Result<T>
    where
        F: FnOnce(&mut SavedPlans) -> Result<T>,
    {
        let mut plans = Self::load(path)?;
        let out = f(&mut plans)?;
        plans.save(path)?;
        Ok(out)
    }
}
