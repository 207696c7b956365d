use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use salary_core::{CalculationInput, CalculatorResponse, Estimator};
use serde::Serialize;
use tracing::info;

use crate::AppState;
use crate::error::{Result, ServerError};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "salary-server",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now(),
    })
}

/// `POST /api/calculator`
pub async fn calculate(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CalculationInput>, JsonRejection>,
) -> Result<Json<CalculatorResponse>> {
    let Json(input) = payload.map_err(|rejection| ServerError::InvalidRequest(rejection.body_text()))?;

    info!(
        tax_year = input.tax_year,
        employees = input.employees.len(),
        "calculation requested"
    );

    let result = state.estimator.estimate(&input).await?;
    Ok(Json(CalculatorResponse::success(result)))
}
