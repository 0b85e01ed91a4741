use lead_capture_core::{Field, FieldErrors, FormStep, LeadRecord};
use serde::{Deserialize, Serialize};

/// Single source of truth for the widget: step position, the record being
/// accumulated, and per-field validation messages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormState {
    pub step: FormStep,
    pub lead: LeadRecord,
    pub errors: FieldErrors,
    pub completed: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite a field and drop its error message. Clearing happens on
    /// every edit, even one that leaves the value invalid; the message only
    /// comes back on the next failed submit.
    pub fn edit(&mut self, field: Field, value: String) {
        self.lead.set(field, value);
        self.errors.clear(field);
    }

    /// The error attached to the currently visible field, if any.
    pub fn active_error(&self) -> Option<&str> {
        self.errors.get(self.step.field())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_clears_the_field_error() {
        let mut state = FormState::new();
        state.errors.set(Field::Email, "Invalid email");

        state.edit(Field::Email, "still-not-valid".to_string());

        assert_eq!(state.lead.email, "still-not-valid");
        assert_eq!(state.errors.get(Field::Email), None);
    }

    #[test]
    fn test_edit_leaves_other_errors_alone() {
        let mut state = FormState::new();
        state.errors.set(Field::Phone, "Invalid phone number");

        state.edit(Field::Email, "a@b.com".to_string());

        assert_eq!(state.errors.get(Field::Phone), Some("Invalid phone number"));
    }

    #[test]
    fn test_active_error_follows_the_step() {
        let mut state = FormState::new();
        state.errors.set(Field::Phone, "Invalid phone number");

        assert_eq!(state.active_error(), None);
        state.step = FormStep::Phone;
        assert_eq!(state.active_error(), Some("Invalid phone number"));
    }
}
