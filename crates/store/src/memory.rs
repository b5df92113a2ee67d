use crate::store::HistoryStore;
use anyhow::Result;
use scorecast_models::RecentHistory;
use std::sync::{Arc, Mutex};

/// In-process store. Clones share the same backing history, which lets tests
/// hand one clone to a controller and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<RecentHistory>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> RecentHistory {
        self.entries.lock().unwrap().clone()
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self) -> Result<RecentHistory> {
        Ok(self.entries.lock().unwrap().clone())
    }

    fn save(&self, history: &RecentHistory) -> Result<()> {
        *self.entries.lock().unwrap() = history.clone();
        Ok(())
    }
}
