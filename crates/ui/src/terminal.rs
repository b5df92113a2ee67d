use crate::format::{self, BAR_WIDTH};
use crate::table::{RecentRow, RecentTable};
use crate::view::ResultView;
use scorecast_models::{PredictedOutcome, PredictionResult};

/// Prints to stdout: result card, probability bars, loading and error
/// notices, and the recent-predictions table.
#[derive(Debug, Default)]
pub struct TerminalView {
    recent: RecentTable,
    loading: bool,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn recent_rows(&self) -> &[RecentRow] {
        self.recent.rows()
    }

    fn probability_line(label: &str, probability: f64) {
        println!(
            "   {:<24} {} {:>3}%",
            label,
            format::probability_bar(probability, BAR_WIDTH),
            format::whole_percent(probability)
        );
    }
}

impl ResultView for TerminalView {
    fn set_loading(&mut self, active: bool) {
        self.loading = active;
        if active {
            println!();
            println!("⏳ Getting prediction...");
        }
    }

    fn render_result(&mut self, result: &PredictionResult) {
        let most_likely = match result.most_likely_outcome() {
            PredictedOutcome::HomeWin => format!("{} win", result.home_team),
            PredictedOutcome::Draw => "Draw".to_string(),
            PredictedOutcome::AwayWin => format!("{} win", result.away_team),
        };

        println!();
        println!("🏆 {} vs {}", result.home_team, result.away_team);
        println!(
            "   Predicted score: {}",
            format::score_line(result.predicted_score_home, result.predicted_score_away)
        );
        println!(
            "   Confidence: {}%",
            format::whole_percent(result.confidence)
        );
        Self::probability_line(
            &format!("{} win", result.home_team),
            result.win_probability_home,
        );
        Self::probability_line("Draw", result.draw_probability);
        Self::probability_line(
            &format!("{} win", result.away_team),
            result.win_probability_away,
        );
        println!("   Most likely: {}", most_likely);
        println!(
            "   Model {} at {}",
            result.model_version,
            format::local_datetime(&result.prediction_timestamp)
        );
    }

    fn render_error(&mut self, message: &str) {
        println!();
        println!("❌ {}", message);
    }

    fn render_recent(&mut self, rows: Vec<RecentRow>) {
        self.recent = RecentTable::from_rows(rows);
        self.redraw_recent();
    }

    fn prepend_recent(&mut self, row: RecentRow) {
        self.recent.prepend(row);
        self.redraw_recent();
    }

    fn redraw_recent(&self) {
        println!();
        println!("📋 Recent predictions");
        println!("{}", self.recent.to_table());
    }
}
