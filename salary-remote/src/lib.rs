//! `remote` estimator backend.
//!
//! Sends the calculation input to the calculator service as JSON and reads
//! the result out of the response envelope. Register
//! [`HttpEstimatorFactory`] with an
//! [`EstimatorRegistry`](salary_core::EstimatorRegistry) to make the
//! backend selectable by configuration.

mod client;
mod factory;

pub use client::{GENERIC_FAILURE_MESSAGE, HttpEstimator};
pub use factory::HttpEstimatorFactory;
