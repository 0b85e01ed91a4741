pub mod lead;
pub mod step;
pub mod validate;

pub use lead::{Field, FieldErrors, LeadRecord};
pub use step::FormStep;
pub use validate::{rule_for, validate_step, StepRule, ValidationError, STEP_RULES};
