use salary_core::{Estimator, EstimatorConfig, EstimatorError, estimator::EstimatorFactory};

use crate::client::HttpEstimator;

/// [`EstimatorFactory`] for the `"remote"` backend.
///
/// ```rust
/// use salary_core::EstimatorRegistry;
/// use salary_remote::HttpEstimatorFactory;
///
/// let mut registry = EstimatorRegistry::new();
/// registry.register(Box::new(HttpEstimatorFactory));
/// ```
pub struct HttpEstimatorFactory;

impl EstimatorFactory for HttpEstimatorFactory {
    fn backend_name(&self) -> &'static str {
        "remote"
    }

    fn create(
        &self,
        config: &EstimatorConfig,
    ) -> Result<Box<dyn Estimator>, EstimatorError> {
        let base_url = config.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(EstimatorError::Configuration(format!(
                "remote estimator needs an http(s) base url, got '{}'",
                config.base_url
            )));
        }
        Ok(Box::new(
            HttpEstimator::new(base_url).with_timeout(config.timeout),
        ))
    }
}
