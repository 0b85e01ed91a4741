use lead_capture_core::Field;

/// Everything the UI can ask the form to do. An edit carries the full new
/// value for its field; submitting validates the active step and either
/// surfaces an error or moves the flow forward.
#[derive(Debug, Clone)]
pub enum FormAction {
    Edit { field: Field, value: String },
    SubmitStep,
}

impl FormAction {
    pub fn description(&self) -> &'static str {
        match self {
            FormAction::Edit { .. } => "Updating field value",
            FormAction::SubmitStep => "Submitting current step",
        }
    }
}
