use serde::{Deserialize, Serialize};

use crate::lead::Field;

/// One of the three sequential form states. Each step owns exactly one
/// input field; the sequence is forward-only, with no back transition and
/// no reset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FormStep {
    Email,
    Phone,
    LookingFor,
}

impl Default for FormStep {
    fn default() -> Self {
        Self::Email
    }
}

impl FormStep {
    /// 1-based position in the sequence.
    pub fn index(self) -> u8 {
        match self {
            FormStep::Email => 1,
            FormStep::Phone => 2,
            FormStep::LookingFor => 3,
        }
    }

    pub fn field(self) -> Field {
        match self {
            FormStep::Email => Field::Email,
            FormStep::Phone => Field::Phone,
            FormStep::LookingFor => Field::LookingFor,
        }
    }

    pub fn is_last(self) -> bool {
        matches!(self, FormStep::LookingFor)
    }

    pub fn advance(self) -> FormStep {
        match self {
            FormStep::Email => FormStep::Phone,
            FormStep::Phone => FormStep::LookingFor,
            FormStep::LookingFor => FormStep::LookingFor, // stay at terminal
        }
    }

    /// Label for the action control: "Next" until the final step.
    pub fn action_label(self) -> &'static str {
        if self.is_last() {
            "Submit"
        } else {
            "Next"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_starts_at_email() {
        assert_eq!(FormStep::default(), FormStep::Email);
        assert_eq!(FormStep::default().index(), 1);
    }

    #[test]
    fn test_advance_is_forward_only() {
        assert_eq!(FormStep::Email.advance(), FormStep::Phone);
        assert_eq!(FormStep::Phone.advance(), FormStep::LookingFor);
        // Terminal step has no successor.
        assert_eq!(FormStep::LookingFor.advance(), FormStep::LookingFor);
    }

    #[test]
    fn test_each_step_owns_one_field() {
        assert_eq!(FormStep::Email.field(), Field::Email);
        assert_eq!(FormStep::Phone.field(), Field::Phone);
        assert_eq!(FormStep::LookingFor.field(), Field::LookingFor);
    }

    #[test]
    fn test_action_label() {
        assert_eq!(FormStep::Email.action_label(), "Next");
        assert_eq!(FormStep::Phone.action_label(), "Next");
        assert_eq!(FormStep::LookingFor.action_label(), "Submit");
    }
}
