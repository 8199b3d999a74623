mod controller;
mod field_state;
mod lifecycle;
mod validation;

pub use controller::{FormController, SubmitOutcome};
pub use field_state::{FieldState, FormState};
pub use lifecycle::SubmissionPhase;
pub use validation::validate_field;
