use salary_core::EstimatorError;
use thiserror::Error;

use crate::models::FormField;

fn join_labels(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(FormField::label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Required fields left blank. Blocks submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill in all required fields ({})", join_labels(.missing))]
pub struct ValidationError {
    pub missing: Vec<FormField>,
}

impl ValidationError {
    /// One line per missing field: its command-line flag and an example
    /// value.
    pub fn flag_hints(&self) -> Vec<String> {
        self.missing
            .iter()
            .map(|field| format!("  --{:<20}{}", field.id(), field.placeholder()))
            .collect()
    }
}

/// Why a submission did not reach the results view.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Error calculating results: {0}")]
    Computation(#[from] EstimatorError),

    #[error("A calculation is already in progress")]
    InFlight,
}

/// The results view was opened without a calculation to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("No calculation to display; returning to the calculator")]
    MissingHandoff,
}
