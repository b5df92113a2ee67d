use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScorecastError {
    #[error("Invalid probability: {prob}, must be between 0.0 and 1.0")]
    InvalidProbability { prob: f64 },
}

pub type Result<T> = std::result::Result<T, ScorecastError>;
