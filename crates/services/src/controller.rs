use crate::form::MatchForm;
use anyhow::{Context, Result};
use chrono::Utc;
use scorecast_client::PredictionApi;
use scorecast_models::{RecentHistory, RecentPredictionEntry};
use scorecast_store::HistoryStore;
use scorecast_ui::{RecentRow, RecentTable, ResultView};
use tracing::{error, info};

/// The one notice users see for any failed request. Which of the failure
/// kinds actually occurred is logged, never rendered.
pub const GENERIC_FAILURE_NOTICE: &str = "Failed to get prediction. Please try again.";

/// Drives the prediction form lifecycle over three injected ports: the
/// prediction API, the history store, and the view.
pub struct PredictorController<A, S, V> {
    api: A,
    store: S,
    view: V,
    form: MatchForm,
    history: RecentHistory,
    submitting: bool,
}

impl<A, S, V> PredictorController<A, S, V>
where
    A: PredictionApi,
    S: HistoryStore,
    V: ResultView,
{
    pub fn new(api: A, store: S, view: V, form: MatchForm) -> Self {
        Self {
            api,
            store,
            view,
            form,
            history: RecentHistory::new(),
            submitting: false,
        }
    }

    pub fn form(&self) -> &MatchForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut MatchForm {
        &mut self.form
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Restores persisted predictions into the recent table and defaults the
    /// match date. An unreadable store is a setup fault and aborts startup.
    pub fn init(&mut self) -> Result<()> {
        self.history = self.store.load().context("loading stored predictions")?;

        let rows = self
            .history
            .entries()
            .iter()
            .take(RecentTable::MAX_ROWS)
            .map(RecentRow::from_entry)
            .collect();
        self.view.render_recent(rows);
        if !self.history.is_empty() {
            info!("📋 Restored {} stored predictions", self.history.len());
        }

        self.form.set_default_date();
        Ok(())
    }

    /// Submits the current form. Exactly one request goes out per call; while
    /// it is in flight further submits are ignored. Every failure renders the
    /// same generic notice, and the loading state is restored on both paths.
    pub async fn submit(&mut self) {
        if self.submitting {
            return;
        }
        self.submitting = true;
        self.view.set_loading(true);

        if let Err(e) = self.run_prediction().await {
            error!("❌ Prediction request failed: {:#}", e);
            self.view.render_error(GENERIC_FAILURE_NOTICE);
        }

        self.view.set_loading(false);
        self.submitting = false;
    }

    async fn run_prediction(&mut self) -> Result<()> {
        let request = self.form.to_request();
        info!(
            "🎯 Requesting prediction for {} vs {}",
            request.home_team, request.away_team
        );

        let result = self.api.predict(&request).await?;
        info!(
            "✅ Predicted {} {:.1} - {:.1} {}",
            result.home_team,
            result.predicted_score_home,
            result.predicted_score_away,
            result.away_team
        );

        self.view.render_result(&result);

        let recorded_at = Utc::now();
        self.view
            .prepend_recent(RecentRow::from_result(&result, recorded_at));
        self.history
            .record(RecentPredictionEntry::new(result, recorded_at));
        self.store
            .save(&self.history)
            .context("persisting prediction history")?;
        Ok(())
    }

    /// Redisplays the recent table as it currently stands.
    pub fn show_recent(&self) {
        self.view.redraw_recent();
    }
}
