mod form_field;
mod handoff_payload;
mod raw_input;

pub use form_field::FormField;
pub use handoff_payload::HandoffPayload;
pub use raw_input::{EmployeeEntry, RawInput};
