use anyhow::Result;
use scorecast_models::RecentHistory;

/// Port for loading and saving the ordered, capped prediction history.
/// Implementations are synchronous; the client only suspends on the network.
pub trait HistoryStore {
    fn load(&self) -> Result<RecentHistory>;
    fn save(&self, history: &RecentHistory) -> Result<()>;
}
