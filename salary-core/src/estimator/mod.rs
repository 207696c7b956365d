pub mod factory;
pub mod local;
pub mod service;

pub use factory::{EstimatorConfig, EstimatorFactory, EstimatorRegistry};
pub use local::{LocalEstimator, LocalEstimatorFactory};
pub use service::{Estimator, EstimatorError};
