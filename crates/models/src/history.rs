use crate::prediction::PredictionResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One captured prediction: the service result plus the moment the client
/// recorded it. The result fields are flattened so the stored JSON keeps the
/// historical `{...result, timestamp}` shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentPredictionEntry {
    #[serde(flatten)]
    pub result: PredictionResult,
    pub timestamp: DateTime<Utc>,
}

impl RecentPredictionEntry {
    pub fn new(result: PredictionResult, timestamp: DateTime<Utc>) -> Self {
        Self { result, timestamp }
    }
}

/// Newest-first list of captured predictions, capped at [`Self::MAX_STORED`].
/// Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct RecentHistory {
    entries: Vec<RecentPredictionEntry>,
}

impl RecentHistory {
    pub const MAX_STORED: usize = 10;

    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends the entry and drops anything beyond the cap.
    pub fn record(&mut self, entry: RecentPredictionEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(Self::MAX_STORED);
    }

    pub fn entries(&self) -> &[RecentPredictionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
