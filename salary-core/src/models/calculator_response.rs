use serde::{Deserialize, Serialize};

use super::CalculationResult;

/// Envelope returned by the calculator endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorResponse {
    pub status: u16,

    #[serde(default)]
    pub message: String,

    /// Absent on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<CalculationResult>,
}

impl CalculatorResponse {
    pub const SUCCESS_MESSAGE: &'static str = "Calculation completed successfully";

    pub fn success(data: CalculationResult) -> Self {
        Self {
            status: 200,
            message: Self::SUCCESS_MESSAGE.to_string(),
            data: Some(data),
        }
    }

    pub fn failure(
        status: u16,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            message: message.into(),
            data: None,
        }
    }
}
