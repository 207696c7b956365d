//! Salary and profit calculations for a solo company.
//!
//! The estimate is a fixed sequence of arithmetic steps on monthly figures,
//! annualized where needed. See [`monthly_simulation`] for the formula.

pub mod common;
pub mod monthly_simulation;

pub use monthly_simulation::{MonthlySimulation, SimulationRates, estimate};
