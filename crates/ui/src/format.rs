//! Display formatting rules: one-decimal scores, whole-percent probabilities,
//! proportional bars, and localized timestamps.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

pub const BAR_WIDTH: usize = 20;

pub fn score_line(home: f64, away: f64) -> String {
    format!("{:.1} - {:.1}", home, away)
}

/// Converts a [0, 1] probability to the whole percentage shown next to it.
pub fn whole_percent(probability: f64) -> i64 {
    (probability * 100.0).round() as i64
}

/// Fills `width` cells proportionally to the displayed percentage, so the bar
/// and its numeric label always agree.
pub fn probability_bar(probability: f64, width: usize) -> String {
    let percent = whole_percent(probability).clamp(0, 100) as usize;
    let filled = (percent * width + 50) / 100;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(width - filled));
    bar
}

pub fn local_date(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

/// Renders a service timestamp in local time. Strings without a zone offset
/// are UTC wall time; anything unparseable is shown verbatim.
pub fn local_datetime(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Utc
            .from_utc_datetime(&naive)
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
    }
    raw.to_string()
}
