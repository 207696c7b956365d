use std::collections::HashMap;
use std::time::Duration;

use super::service::{Estimator, EstimatorError};

/// Base address of the calculator service when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Backend-agnostic estimator configuration.
///
/// `backend` must match the [`EstimatorFactory::backend_name`] of a
/// registered factory. The other fields are read by the backends that
/// need them.
///
/// | backend  | uses                   |
/// |----------|------------------------|
/// | `local`  | `latency`              |
/// | `remote` | `base_url`, `timeout`  |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimatorConfig {
    /// Lowercase identifier matching a registered factory (e.g. `"local"`).
    pub backend: String,
    /// Service address, without the endpoint path.
    pub base_url: String,
    /// Artificial delay before an in-process estimate returns.
    pub latency: Duration,
    /// Upper bound on a remote round trip.
    pub timeout: Duration,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            backend: "local".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            latency: Duration::from_secs(1),
            timeout: Duration::from_secs(30),
        }
    }
}

/// One implementation per estimator backend, registered with an
/// [`EstimatorRegistry`] at startup.
pub trait EstimatorFactory: Send + Sync {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    fn create(
        &self,
        config: &EstimatorConfig,
    ) -> Result<Box<dyn Estimator>, EstimatorError>;
}

/// Registry of [`EstimatorFactory`] instances, keyed by backend name.
pub struct EstimatorRegistry {
    factories: HashMap<&'static str, Box<dyn EstimatorFactory>>,
}

impl EstimatorRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a backend factory, replacing any with the same name.
    pub fn register(
        &mut self,
        factory: Box<dyn EstimatorFactory>,
    ) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Names of every registered backend, sorted alphabetically.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Build the estimator selected by `config.backend`.
    ///
    /// # Errors
    /// * [`EstimatorError::Configuration`] when no factory is registered
    ///   under that name.
    /// * Any error the chosen factory returns.
    pub fn create(
        &self,
        config: &EstimatorConfig,
    ) -> Result<Box<dyn Estimator>, EstimatorError> {
        let factory = self
            .factories
            .get(config.backend.as_str())
            .ok_or_else(|| {
                EstimatorError::Configuration(format!(
                    "unknown estimator backend '{}'; available: {:?}",
                    config.backend,
                    self.available_backends()
                ))
            })?;

        factory.create(config)
    }
}

impl Default for EstimatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
