pub mod calculations;
pub mod estimator;
pub mod models;

pub use calculations::estimate;
pub use estimator::{Estimator, EstimatorConfig, EstimatorError, EstimatorRegistry};
pub use models::*;
