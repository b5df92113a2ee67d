use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub history: HistoryConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    pub path: String,
}

/// Option lists offered by the form selectors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub teams: Vec<String>,
    pub leagues: Vec<String>,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default values
            .set_default("api.url", "http://127.0.0.1:8000")?
            .set_default("history.path", "data/recent_predictions.json")?
            .set_default(
                "catalog.teams",
                vec![
                    "Arsenal",
                    "Chelsea",
                    "Liverpool",
                    "Manchester City",
                    "Manchester United",
                    "Tottenham",
                ],
            )?
            .set_default(
                "catalog.leagues",
                vec!["Premier League", "La Liga", "Bundesliga"],
            )?
            // Add in settings from configuration file
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(File::with_name("config/local").required(false))
            // Add in settings from environment variables
            .add_source(Environment::new().separator("_"))
            .build()?;

        config.try_deserialize()
    }

    /// A blank endpoint or history path can only produce confusing failures
    /// later; refuse to start instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.url.trim().is_empty() {
            return Err(ConfigError::Message("api.url must not be empty".into()));
        }
        if self.history.path.trim().is_empty() {
            return Err(ConfigError::Message(
                "history.path must not be empty".into(),
            ));
        }
        Ok(())
    }

    pub fn api_url(&self) -> &str {
        &self.api.url
    }

    pub fn history_path(&self) -> PathBuf {
        PathBuf::from(&self.history.path)
    }
}
