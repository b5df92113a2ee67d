use crate::store::HistoryStore;
use anyhow::{Context, Result};
use scorecast_models::RecentHistory;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// History persisted as one JSON file holding the bare entry array.
///
/// A missing file reads as empty history. A file that no longer parses also
/// reads as empty, with a warning; the next save overwrites it wholesale.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonFileStore {
    fn load(&self) -> Result<RecentHistory> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(RecentHistory::new()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("reading history file {}", self.path.display()))
            }
        };

        match serde_json::from_str(&raw) {
            Ok(history) => Ok(history),
            Err(e) => {
                tracing::warn!(
                    "⚠️ Discarding unreadable history file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(RecentHistory::new())
            }
        }
    }

    fn save(&self, history: &RecentHistory) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating history directory {}", parent.display()))?;
            }
        }

        let raw = serde_json::to_string(history).context("encoding prediction history")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("writing history file {}", self.path.display()))
    }
}
