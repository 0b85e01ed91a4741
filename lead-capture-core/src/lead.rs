use serde::{Deserialize, Serialize};

/// The record collected across the form steps.
///
/// Serialized with camelCase names so the wire body is exactly
/// `{"email": .., "phone": .., "lookingFor": ..}`. Starts empty, is
/// overwritten field-by-field as the visitor types, and is never persisted;
/// its lifetime ends at submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub email: String,
    pub phone: String,
    pub looking_for: String,
}

impl LeadRecord {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::LookingFor => &self.looking_for,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::LookingFor => self.looking_for = value,
        }
    }
}

/// Addresses one slot of the record and its error slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Phone,
    LookingFor,
}

impl Field {
    /// Wire-facing field name.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Phone => "phone",
            Field::LookingFor => "lookingFor",
        }
    }
}

/// Per-field validation messages. A field holds at most one message at a
/// time; an edit to the field clears it immediately, so a stale message
/// never outlives the value that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    email: Option<String>,
    phone: Option<String>,
    looking_for: Option<String>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Email => self.email.as_deref(),
            Field::Phone => self.phone.as_deref(),
            Field::LookingFor => self.looking_for.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        *self.slot_mut(field) = Some(message.into());
    }

    pub fn clear(&mut self, field: Field) {
        *self.slot_mut(field) = None;
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.phone.is_none() && self.looking_for.is_none()
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::LookingFor => &mut self.looking_for,
        }
    }
}
