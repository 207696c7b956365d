mod calculation_input;
mod calculation_result;
mod calculator_response;
pub mod lossy_float;

pub use calculation_input::{CalculationInput, EmployeeInput};
pub use calculation_result::CalculationResult;
pub use calculator_response::CalculatorResponse;
