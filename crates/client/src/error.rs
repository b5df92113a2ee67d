use thiserror::Error;

/// Why a prediction request failed. The three variants render identically to
/// the user; the split exists for the diagnostic log.
#[derive(Error, Debug)]
pub enum PredictionError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("prediction service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode prediction response: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}
