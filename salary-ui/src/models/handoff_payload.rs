use salary_core::CalculationResult;

use super::RawInput;

/// What the entry view hands to the results view: the computed metrics and
/// the form strings they were computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct HandoffPayload {
    pub result: CalculationResult,
    pub raw_input: RawInput,
}
