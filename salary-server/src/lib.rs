//! Stand-in calculator service.
//!
//! Answers `POST /api/calculator` with the canonical estimate, after an
//! artificial delay, wrapped in the `{status, message, data}` envelope the
//! remote estimator expects.

pub mod error;
pub mod handlers;

pub use error::{Result, ServerError};

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::{get, post};
use salary_core::estimator::LocalEstimator;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Configuration for the calculator service.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Delay added to every calculation.
    pub latency: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            latency: Duration::from_secs(1),
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and set the bind address from a string.
    pub fn with_bind_addr_str(
        mut self,
        addr: &str,
    ) -> Result<Self> {
        self.bind_addr = addr
            .parse()
            .map_err(|e| ServerError::Config(format!("invalid bind address '{addr}': {e}")))?;
        Ok(self)
    }

    pub fn with_latency(
        mut self,
        latency: Duration,
    ) -> Self {
        self.latency = latency;
        self
    }
}

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub estimator: Arc<LocalEstimator>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            estimator: Arc::new(LocalEstimator::new().with_latency(config.latency)),
        }
    }
}

/// Routes of the service, ready to be served.
pub fn build_router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/calculator", post(handlers::calculate))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(config))
}

/// Serve on an already bound listener until the future completes or ctrl-c.
pub async fn serve_on(
    listener: TcpListener,
    config: &ServerConfig,
) -> Result<()> {
    info!(addr = %listener.local_addr()?, "calculator service listening");
    axum::serve(listener, build_router(config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Bind `config.bind_addr` and serve.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let listener = TcpListener::bind(config.bind_addr).await?;
    serve_on(listener, &config).await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use pretty_assertions::assert_eq;
    use salary_core::CalculatorResponse;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;

    fn test_config() -> ServerConfig {
        ServerConfig::new().with_latency(Duration::ZERO)
    }

    async fn post_json(body: String) -> (StatusCode, Value) {
        let response = build_router(&test_config())
            .oneshot(
                Request::post("/api/calculator")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn calculates_reference_scenario() {
        let body = json!({
            "companyMonthlyIncome": 50000,
            "nonTaxableBonus": 3000,
            "taxDate": 2025,
            "nonTaxableExpense": 12000,
            "employees": []
        });

        let (status, value) = post_json(body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        let response: CalculatorResponse = serde_json::from_value(value).unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.message, CalculatorResponse::SUCCESS_MESSAGE);
        let data = response.data.unwrap();
        assert_eq!(data.gross_salary, 35000.0);
        assert_eq!(data.net_profit, 351000.0);
    }

    #[tokio::test]
    async fn malformed_body_gets_error_envelope() {
        let (status, value) = post_json(r#"{"companyMonthlyIncome": "lots"}"#.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value["status"], 400);
        assert!(value["message"].as_str().unwrap().starts_with("Invalid request"));
        assert!(value.get("data").is_none());
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = build_router(&test_config())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn rejects_bad_bind_address() {
        assert!(matches!(
            ServerConfig::new().with_bind_addr_str("not-an-addr"),
            Err(ServerError::Config(_))
        ));
    }
}
