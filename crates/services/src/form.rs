use chrono::{Local, NaiveDate, NaiveDateTime};
use scorecast_models::PredictionRequest;
use std::collections::HashSet;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("No teams configured for the selectors")]
    EmptyCatalog,

    #[error("Duplicate team in catalog: {team}")]
    DuplicateTeam { team: String },

    #[error("No such option: {index}")]
    UnknownOption { index: usize },

    #[error("{team} is already picked on the other side")]
    OptionUnavailable { team: String },

    #[error("Invalid match date: {value}, expected YYYY-MM-DD or YYYY-MM-DDTHH:MM")]
    InvalidMatchDate { value: String },
}

/// State of the prediction form: two team selectors over a shared catalog, a
/// match date, and an optional league.
///
/// The selectors enforce one soft constraint: whatever one side has picked is
/// unavailable on the other. Each team change recomputes both availability
/// lists, so clearing a side frees its pick again. Nothing else is validated
/// here; empty selections submit as empty strings.
#[derive(Debug, Clone)]
pub struct MatchForm {
    teams: Vec<String>,
    leagues: Vec<String>,
    home: Option<String>,
    away: Option<String>,
    league: Option<String>,
    match_date: String,
    home_disabled: Vec<bool>,
    away_disabled: Vec<bool>,
}

impl MatchForm {
    pub fn new(teams: Vec<String>, leagues: Vec<String>) -> Result<Self, FormError> {
        if teams.is_empty() {
            return Err(FormError::EmptyCatalog);
        }
        let mut seen = HashSet::new();
        for team in &teams {
            if !seen.insert(team.as_str()) {
                return Err(FormError::DuplicateTeam { team: team.clone() });
            }
        }

        let count = teams.len();
        Ok(Self {
            teams,
            leagues,
            home: None,
            away: None,
            league: None,
            match_date: String::new(),
            home_disabled: vec![false; count],
            away_disabled: vec![false; count],
        })
    }

    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    pub fn leagues(&self) -> &[String] {
        &self.leagues
    }

    pub fn home(&self) -> Option<&str> {
        self.home.as_deref()
    }

    pub fn away(&self) -> Option<&str> {
        self.away.as_deref()
    }

    pub fn league(&self) -> Option<&str> {
        self.league.as_deref()
    }

    pub fn match_date(&self) -> &str {
        &self.match_date
    }

    /// Team options with their availability in the home selector.
    pub fn home_options(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.teams
            .iter()
            .zip(&self.home_disabled)
            .map(|(team, disabled)| (team.as_str(), *disabled))
    }

    /// Team options with their availability in the away selector.
    pub fn away_options(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.teams
            .iter()
            .zip(&self.away_disabled)
            .map(|(team, disabled)| (team.as_str(), *disabled))
    }

    /// Picks the home team by catalog index; `None` clears the selection.
    pub fn select_home(&mut self, choice: Option<usize>) -> Result<(), FormError> {
        match choice {
            None => self.home = None,
            Some(index) => {
                let team = self
                    .teams
                    .get(index)
                    .ok_or(FormError::UnknownOption { index })?;
                if self.home_disabled[index] {
                    return Err(FormError::OptionUnavailable { team: team.clone() });
                }
                self.home = Some(team.clone());
            }
        }
        self.refresh_conflicts();
        Ok(())
    }

    /// Picks the away team by catalog index; `None` clears the selection.
    pub fn select_away(&mut self, choice: Option<usize>) -> Result<(), FormError> {
        match choice {
            None => self.away = None,
            Some(index) => {
                let team = self
                    .teams
                    .get(index)
                    .ok_or(FormError::UnknownOption { index })?;
                if self.away_disabled[index] {
                    return Err(FormError::OptionUnavailable { team: team.clone() });
                }
                self.away = Some(team.clone());
            }
        }
        self.refresh_conflicts();
        Ok(())
    }

    pub fn select_league(&mut self, choice: Option<usize>) -> Result<(), FormError> {
        match choice {
            None => self.league = None,
            Some(index) => {
                let league = self
                    .leagues
                    .get(index)
                    .ok_or(FormError::UnknownOption { index })?;
                self.league = Some(league.clone());
            }
        }
        Ok(())
    }

    /// Accepts an ISO date or minute-granularity date-time and stores the raw
    /// string; that exact string is what gets submitted.
    pub fn set_date(&mut self, value: &str) -> Result<(), FormError> {
        let value = value.trim();
        let parses = NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok()
            || DATETIME_FORMATS
                .iter()
                .any(|fmt| NaiveDateTime::parse_from_str(value, fmt).is_ok());
        if !parses {
            return Err(FormError::InvalidMatchDate {
                value: value.to_string(),
            });
        }

        self.match_date = value.to_string();
        Ok(())
    }

    /// Resets the date to the current local time at minute granularity.
    pub fn set_default_date(&mut self) {
        self.match_date = Local::now().format("%Y-%m-%dT%H:%M").to_string();
    }

    pub fn to_request(&self) -> PredictionRequest {
        PredictionRequest {
            home_team: self.home.clone().unwrap_or_default(),
            away_team: self.away.clone().unwrap_or_default(),
            match_date: self.match_date.clone(),
            league: self.league.clone(),
        }
    }

    // A team picked on one side is disabled on the other; everything else is
    // enabled. Runs after every team change.
    fn refresh_conflicts(&mut self) {
        for (index, team) in self.teams.iter().enumerate() {
            self.home_disabled[index] = self.away.as_deref() == Some(team.as_str());
            self.away_disabled[index] = self.home.as_deref() == Some(team.as_str());
        }
    }
}
