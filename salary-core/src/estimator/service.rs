use async_trait::async_trait;
use thiserror::Error;

use crate::models::{CalculationInput, CalculationResult};

/// Why an estimate could not be produced.
#[derive(Debug, Error)]
pub enum EstimatorError {
    /// The request never got a response (connection refused, timeout, ...).
    #[error("{0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("{message}")]
    Service { status: u16, message: String },

    /// The service answered but the body was not a usable result.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Something that turns a [`CalculationInput`] into a [`CalculationResult`].
///
/// The front end only sees this trait, so it does not know whether the
/// calculation ran in-process or behind an HTTP call.
#[async_trait]
pub trait Estimator: Send + Sync {
    /// Backend identifier, matching the factory that built it.
    fn name(&self) -> &'static str;

    async fn estimate(
        &self,
        input: &CalculationInput,
    ) -> Result<CalculationResult, EstimatorError>;
}
