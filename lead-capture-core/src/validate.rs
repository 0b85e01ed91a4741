use regex::Regex;
use thiserror::Error;

use crate::lead::{Field, LeadRecord};
use crate::step::FormStep;

/// A failed field check. The message is the exact text rendered inline
/// beneath the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

/// One row of the step table: the field a step owns and its rule.
#[derive(Clone, Copy)]
pub struct StepRule {
    pub field: Field,
    pub check: fn(&str) -> Result<(), &'static str>,
}

/// The ordered, forward-only step sequence. Adding a step means adding a
/// row here, not a new control-flow branch.
pub const STEP_RULES: [StepRule; 3] = [
    StepRule {
        field: Field::Email,
        check: check_email,
    },
    StepRule {
        field: Field::Phone,
        check: check_phone,
    },
    StepRule {
        field: Field::LookingFor,
        check: check_looking_for,
    },
];

pub fn rule_for(step: FormStep) -> &'static StepRule {
    &STEP_RULES[step.index() as usize - 1]
}

/// Validate only the field belonging to `step`. Other fields are never
/// inspected, so a not-yet-reached field cannot block the current one.
pub fn validate_step(step: FormStep, lead: &LeadRecord) -> Result<(), ValidationError> {
    let rule = rule_for(step);
    (rule.check)(lead.get(rule.field)).map_err(|message| ValidationError {
        field: rule.field,
        message: message.to_string(),
    })
}

fn check_email(value: &str) -> Result<(), &'static str> {
    let email_regex = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();
    if email_regex.is_match(value) {
        Ok(())
    } else {
        Err("Invalid email")
    }
}

fn check_phone(value: &str) -> Result<(), &'static str> {
    // E.164: optional leading '+', first digit 1-9, up to 14 more digits
    let phone_regex = Regex::new(r"^\+?[1-9]\d{1,14}$").unwrap();
    if phone_regex.is_match(value) {
        Ok(())
    } else {
        Err("Invalid phone number")
    }
}

fn check_looking_for(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        Err("Please select an option")
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(email: &str, phone: &str, looking_for: &str) -> LeadRecord {
        LeadRecord {
            email: email.to_string(),
            phone: phone.to_string(),
            looking_for: looking_for.to_string(),
        }
    }

    #[test]
    fn test_email_rule() {
        assert!(check_email("a@b.com").is_ok());
        assert!(check_email("user.name+tag@example.co.uk").is_ok());

        assert_eq!(check_email(""), Err("Invalid email"));
        assert_eq!(check_email("invalid"), Err("Invalid email"));
        assert_eq!(check_email("@example.com"), Err("Invalid email"));
        assert_eq!(check_email("user@"), Err("Invalid email"));
        assert_eq!(check_email("user@domain"), Err("Invalid email"));
        assert_eq!(check_email("user@domain.c"), Err("Invalid email"));
        assert_eq!(check_email("user name@example.com"), Err("Invalid email"));
    }

    #[test]
    fn test_phone_rule() {
        assert!(check_phone("+15551234567").is_ok());
        assert!(check_phone("15551234567").is_ok());
        assert!(check_phone("+442071838750").is_ok());
        // 15 digits total is the E.164 maximum
        assert!(check_phone("+123456789012345").is_ok());

        assert_eq!(check_phone(""), Err("Invalid phone number"));
        assert_eq!(check_phone("1"), Err("Invalid phone number"));
        assert_eq!(check_phone("0123456789"), Err("Invalid phone number"));
        assert_eq!(check_phone("+0123456789"), Err("Invalid phone number"));
        assert_eq!(check_phone("+1234567890123456"), Err("Invalid phone number"));
        assert_eq!(check_phone("555-123-4567"), Err("Invalid phone number"));
        assert_eq!(check_phone("abc"), Err("Invalid phone number"));
    }

    #[test]
    fn test_looking_for_rule() {
        assert!(check_looking_for("Option 1").is_ok());
        assert_eq!(check_looking_for(""), Err("Please select an option"));
    }

    #[test]
    fn test_step_table_order_matches_sequence() {
        assert_eq!(rule_for(FormStep::Email).field, Field::Email);
        assert_eq!(rule_for(FormStep::Phone).field, Field::Phone);
        assert_eq!(rule_for(FormStep::LookingFor).field, Field::LookingFor);
    }

    #[test]
    fn test_validate_step_touches_only_its_field() {
        // Phone and selection are empty, but step 1 only looks at the email.
        let record = lead("a@b.com", "", "");
        assert!(validate_step(FormStep::Email, &record).is_ok());

        let error = validate_step(FormStep::Phone, &record).unwrap_err();
        assert_eq!(error.field, Field::Phone);
        assert_eq!(error.message, "Invalid phone number");
    }

    #[test]
    fn test_validation_error_displays_its_message() {
        let error = validate_step(FormStep::LookingFor, &lead("", "", "")).unwrap_err();
        assert_eq!(error.to_string(), "Please select an option");
    }
}
