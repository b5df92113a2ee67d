use crate::error::PredictionError;
use scorecast_models::{PredictionRequest, PredictionResult};

const PREDICT_PATH: &str = "/api/v1/predict";

// Status bodies are for the log, not for storage; keep them short.
const BODY_EXCERPT_LEN: usize = 200;

/// Port for requesting a prediction. One call, one awaited response; no
/// retries and no client-side timeout.
pub trait PredictionApi {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, PredictionError>;
}

/// `reqwest`-backed client for the prediction service.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    client: reqwest::Client,
    base_url: String,
}

impl PredictionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), PREDICT_PATH)
    }
}

impl PredictionApi for PredictionClient {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, PredictionError> {
        let url = self.endpoint();
        tracing::debug!(
            "📤 POST {}: {} vs {}",
            url,
            request.home_team,
            request.away_team
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|source| PredictionError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PredictionError::Status {
                status: status.as_u16(),
                body: excerpt(&body),
            });
        }

        response
            .json::<PredictionResult>()
            .await
            .map_err(|source| PredictionError::Decode { source })
    }
}

fn excerpt(body: &str) -> String {
    if body.chars().count() <= BODY_EXCERPT_LEN {
        return body.to_string();
    }
    body.chars().take(BODY_EXCERPT_LEN).collect()
}
