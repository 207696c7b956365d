use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::factory::{EstimatorConfig, EstimatorFactory};
use super::service::{Estimator, EstimatorError};
use crate::calculations::MonthlySimulation;
use crate::models::{CalculationInput, CalculationResult};

/// In-process estimator.
///
/// Runs the simulation directly. An optional latency imitates the delay of
/// a network round trip.
#[derive(Debug, Clone, Default)]
pub struct LocalEstimator {
    simulation: MonthlySimulation,
    latency: Duration,
}

impl LocalEstimator {
    /// Canonical simulation, no added latency.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(
        mut self,
        latency: Duration,
    ) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl Estimator for LocalEstimator {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn estimate(
        &self,
        input: &CalculationInput,
    ) -> Result<CalculationResult, EstimatorError> {
        if !self.latency.is_zero() {
            debug!(latency_ms = self.latency.as_millis() as u64, "simulating estimator latency");
            tokio::time::sleep(self.latency).await;
        }
        Ok(self.simulation.calculate(input))
    }
}

/// [`EstimatorFactory`] for the `"local"` backend.
pub struct LocalEstimatorFactory;

impl EstimatorFactory for LocalEstimatorFactory {
    fn backend_name(&self) -> &'static str {
        "local"
    }

    fn create(
        &self,
        config: &EstimatorConfig,
    ) -> Result<Box<dyn Estimator>, EstimatorError> {
        Ok(Box::new(LocalEstimator::new().with_latency(config.latency)))
    }
}
