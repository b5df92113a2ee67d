use crate::error::{Result, ScorecastError};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Request body sent to the prediction service.
///
/// `match_date` is carried as the raw ISO string the form accepted
/// (`YYYY-MM-DD` or `YYYY-MM-DDTHH:MM`); the service parses it on its side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionRequest {
    pub home_team: String,
    pub away_team: String,
    pub match_date: String,
    pub league: Option<String>,
}

/// Response body returned by the prediction service.
///
/// Probabilities conventionally sum to 1 but the decoder does not enforce
/// that; whatever the service sends is rendered as-is. The timestamp stays
/// a string because services report it with and without a zone offset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResult {
    pub home_team: String,
    pub away_team: String,
    pub predicted_score_home: f64,
    pub predicted_score_away: f64,
    pub confidence: f64,
    pub win_probability_home: f64,
    pub draw_probability: f64,
    pub win_probability_away: f64,
    pub model_version: String,
    pub prediction_timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictedOutcome {
    HomeWin,
    Draw,
    AwayWin,
}

impl PredictionRequest {
    pub fn new(home_team: String, away_team: String, match_date: String) -> Self {
        Self {
            home_team,
            away_team,
            match_date,
            league: None,
        }
    }

    pub fn with_league(mut self, league: String) -> Self {
        self.league = Some(league);
        self
    }
}

impl PredictionResult {
    pub fn new(
        home_team: String,
        away_team: String,
        predicted_score_home: f64,
        predicted_score_away: f64,
        model_version: String,
    ) -> Self {
        Self {
            home_team,
            away_team,
            predicted_score_home,
            predicted_score_away,
            confidence: 0.0,
            win_probability_home: 0.0,
            draw_probability: 0.0,
            win_probability_away: 0.0,
            model_version,
            prediction_timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn with_probabilities(mut self, home: f64, draw: f64, away: f64) -> Result<Self> {
        for prob in [home, draw, away] {
            if !(0.0..=1.0).contains(&prob) {
                return Err(ScorecastError::InvalidProbability { prob });
            }
        }

        self.win_probability_home = home;
        self.draw_probability = draw;
        self.win_probability_away = away;
        Ok(self)
    }

    pub fn with_confidence(mut self, confidence: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(ScorecastError::InvalidProbability { prob: confidence });
        }
        self.confidence = confidence;
        Ok(self)
    }

    pub fn with_timestamp(mut self, timestamp: String) -> Self {
        self.prediction_timestamp = timestamp;
        self
    }

    pub fn most_likely_outcome(&self) -> PredictedOutcome {
        let home_prob = self.win_probability_home;
        let away_prob = self.win_probability_away;
        let draw_prob = self.draw_probability;

        if home_prob >= away_prob && home_prob >= draw_prob {
            PredictedOutcome::HomeWin
        } else if away_prob >= draw_prob {
            PredictedOutcome::AwayWin
        } else {
            PredictedOutcome::Draw
        }
    }
}
