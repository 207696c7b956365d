//! Error types for the calculator service.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use salary_core::{CalculatorResponse, EstimatorError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    /// The request body could not be read as a calculation input.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Calculation failed: {0}")]
    Estimator(#[from] EstimatorError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Estimator(_) | Self::Config(_) | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Failures use the same envelope as successes, minus `data`.
impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = CalculatorResponse::failure(status.as_u16(), self.to_string());
        (status, Json(body)).into_response()
    }
}
