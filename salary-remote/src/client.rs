use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use salary_core::{
    CalculationInput, CalculationResult, CalculatorResponse, Estimator, EstimatorError,
};

/// Shown when a failed response carries no usable `message`.
pub const GENERIC_FAILURE_MESSAGE: &str = "Calculation failed";

/// Lenient view of an error body; anything without a string `message` is
/// treated as having none.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Estimator backed by the calculator service.
pub struct HttpEstimator {
    base_url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpEstimator {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(
        mut self,
        timeout: Duration,
    ) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> String {
        format!("{}/calculator", self.base_url)
    }
}

fn failure_message(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())
}

#[async_trait]
impl Estimator for HttpEstimator {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn estimate(
        &self,
        input: &CalculationInput,
    ) -> Result<CalculationResult, EstimatorError> {
        let url = self.endpoint();
        debug!(%url, "posting calculation request");

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(input)
            .send()
            .await
            .map_err(|e| EstimatorError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| EstimatorError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = failure_message(&body);
            warn!(status = status.as_u16(), %message, "calculator service rejected request");
            return Err(EstimatorError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: CalculatorResponse = serde_json::from_slice(&body)
            .map_err(|e| EstimatorError::InvalidResponse(e.to_string()))?;

        envelope.data.ok_or_else(|| {
            EstimatorError::InvalidResponse(format!(
                "status {} response has no data: {}",
                envelope.status, envelope.message
            ))
        })
    }
}
