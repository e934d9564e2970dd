//! Common types used across the application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Field Types** - Identifies the three form fields
//! - **Form Types** - The values the user has typed
//! - **Error Types** - Per-field validation messages

// =============================================================================
// Field Types
// =============================================================================

/// One of the three form fields.
///
/// Used to address a single slot in [`FormData`] and [`FieldErrors`]
/// when handling input events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    /// The name field
    Name,
    /// The email field
    Email,
    /// The mobile number field
    Mobile,
}

// =============================================================================
// Form Types
// =============================================================================

/// The current values of the form inputs.
///
/// Mutated on every keystroke; reset to empty on a successful submit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormData {
    /// Name input value
    pub name: String,
    /// Email input value
    pub email: String,
    /// Mobile input value
    pub mobile: String,
}

impl FormData {
    /// Get the value of one field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Mobile => &self.mobile,
        }
    }

    /// Replace the value of one field.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Mobile => self.mobile = value,
        }
    }

    /// True if any of the three fields is still empty.
    pub fn has_empty(&self) -> bool {
        self.name.is_empty() || self.email.is_empty() || self.mobile.is_empty()
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Per-field validation messages.
///
/// Each entry is either empty (the field is valid, or was never edited)
/// or a human-readable message shown under the corresponding input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    /// Message for the name field
    pub name: String,
    /// Message for the email field
    pub email: String,
    /// Message for the mobile field
    pub mobile: String,
}

impl FieldErrors {
    /// Get the message for one field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Mobile => &self.mobile,
        }
    }

    /// Replace the message for one field.
    pub fn set(&mut self, field: Field, message: String) {
        match field {
            Field::Name => self.name = message,
            Field::Email => self.email = message,
            Field::Mobile => self.mobile = message,
        }
    }

    /// True if at least one entry holds a message.
    pub fn has_any(&self) -> bool {
        !self.name.is_empty() || !self.email.is_empty() || !self.mobile.is_empty()
    }
}
