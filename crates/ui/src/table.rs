use crate::format;
use chrono::{DateTime, Utc};
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use scorecast_models::{PredictionResult, RecentPredictionEntry};

/// One display row of the recent-predictions table, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentRow {
    pub matchup: String,
    pub score: String,
    pub confidence: String,
    pub date: String,
}

impl RecentRow {
    pub fn from_result(result: &PredictionResult, recorded_at: DateTime<Utc>) -> Self {
        Self {
            matchup: format!("{} vs {}", result.home_team, result.away_team),
            score: format::score_line(result.predicted_score_home, result.predicted_score_away),
            confidence: format!("{}%", format::whole_percent(result.confidence)),
            date: format::local_date(recorded_at),
        }
    }

    /// Row for a restored entry, dated by its stored capture timestamp.
    pub fn from_entry(entry: &RecentPredictionEntry) -> Self {
        Self::from_result(&entry.result, entry.timestamp)
    }
}

/// Newest-first table capped at [`Self::MAX_ROWS`] rows. Shows a placeholder
/// row until the first prediction lands.
#[derive(Debug, Default)]
pub struct RecentTable {
    rows: Vec<RecentRow>,
}

impl RecentTable {
    pub const MAX_ROWS: usize = 5;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<RecentRow>) -> Self {
        let mut table = Self { rows };
        table.rows.truncate(Self::MAX_ROWS);
        table
    }

    pub fn prepend(&mut self, row: RecentRow) {
        self.rows.insert(0, row);
        self.rows.truncate(Self::MAX_ROWS);
    }

    pub fn rows(&self) -> &[RecentRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Match", "Score", "Confidence", "Date"]);

        if self.rows.is_empty() {
            table.add_row(vec!["No predictions yet", "", "", ""]);
            return table;
        }

        for row in &self.rows {
            table.add_row(vec![&row.matchup, &row.score, &row.confidence, &row.date]);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_row(matchup: &str) -> RecentRow {
        RecentRow {
            matchup: matchup.to_string(),
            score: "2.3 - 1.1".to_string(),
            confidence: "78%".to_string(),
            date: "2026-08-25".to_string(),
        }
    }

    fn sample_result() -> PredictionResult {
        PredictionResult::new(
            "A".to_string(),
            "B".to_string(),
            2.3,
            1.1,
            "v1.0".to_string(),
        )
        .with_probabilities(0.60, 0.25, 0.15)
        .unwrap()
        .with_confidence(0.78)
        .unwrap()
    }

    #[test]
    fn test_row_formats_result_summary() {
        let row = RecentRow::from_result(&sample_result(), Utc::now());
        assert_eq!(row.matchup, "A vs B");
        assert_eq!(row.score, "2.3 - 1.1");
        assert_eq!(row.confidence, "78%");
    }

    #[test]
    fn test_restored_row_is_dated_by_its_capture_timestamp() {
        let captured = Utc.with_ymd_and_hms(2020, 1, 5, 12, 0, 0).unwrap();
        let entry = RecentPredictionEntry::new(sample_result(), captured);

        let row = RecentRow::from_entry(&entry);
        assert_eq!(row.date, format::local_date(captured));
        assert!(row.date.starts_with("2020-01-0"));
    }

    #[test]
    fn test_prepend_keeps_newest_first_and_caps() {
        let mut table = RecentTable::new();
        for i in 0..7 {
            table.prepend(sample_row(&format!("Match{}", i)));
        }

        assert_eq!(table.rows().len(), RecentTable::MAX_ROWS);
        assert_eq!(table.rows()[0].matchup, "Match6");
        assert_eq!(table.rows()[4].matchup, "Match2");
    }

    #[test]
    fn test_from_rows_truncates() {
        let rows = (0..9).map(|i| sample_row(&format!("Match{}", i))).collect();
        let table = RecentTable::from_rows(rows);
        assert_eq!(table.rows().len(), RecentTable::MAX_ROWS);
        assert_eq!(table.rows()[0].matchup, "Match0");
    }

    #[test]
    fn test_empty_table_shows_placeholder() {
        let table = RecentTable::new();
        let rendered = table.to_table().to_string();
        assert!(rendered.contains("No predictions yet"));
    }

    #[test]
    fn test_first_insert_clears_placeholder() {
        let mut table = RecentTable::new();
        table.prepend(sample_row("Arsenal vs Chelsea"));

        let rendered = table.to_table().to_string();
        assert!(!rendered.contains("No predictions yet"));
        assert!(rendered.contains("Arsenal vs Chelsea"));
        assert!(rendered.contains("78%"));
    }
}
