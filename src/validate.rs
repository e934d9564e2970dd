//! Per-field validation rules.
//!
//! Each field is checked independently; the result is a ready-to-display
//! message, or an empty string when the value passes. Rules run on every
//! keystroke, so they must stay cheap and side-effect free.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{MIN_NAME_LEN, MOBILE_LEN};
use crate::types::Field;

/// Message shown under the name input when it is too short.
pub const NAME_TOO_SHORT: &str = "Name must be at least 3 characters long";

/// Message shown under the email input when it fails the shape check.
pub const INVALID_EMAIL: &str = "Invalid email address";

/// Message shown under the mobile input when its length is wrong.
pub const MOBILE_WRONG_LENGTH: &str = "Mobile number must be 10 digits";

/// Email shape check: non-space local part, `@`, non-space domain with a dot.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern compiles"));

/// Validate a single field value.
///
/// Returns the message to display under the input, or an empty string
/// when the value is acceptable.
///
/// The mobile rule checks length only, not that the characters are
/// digits; the `pattern="[0-9]{10}"` attribute on the input is a UI hint
/// the rule does not enforce.
pub fn validate_field(field: Field, value: &str) -> String {
    match field {
        Field::Name => {
            if value.chars().count() < MIN_NAME_LEN {
                NAME_TOO_SHORT.to_string()
            } else {
                String::new()
            }
        }
        Field::Email => {
            if EMAIL_RE.is_match(value) {
                String::new()
            } else {
                INVALID_EMAIL.to_string()
            }
        }
        Field::Mobile => {
            if value.chars().count() != MOBILE_LEN {
                MOBILE_WRONG_LENGTH.to_string()
            } else {
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_shorter_than_three_is_rejected() {
        assert_eq!(validate_field(Field::Name, ""), NAME_TOO_SHORT);
        assert_eq!(validate_field(Field::Name, "A"), NAME_TOO_SHORT);
        assert_eq!(validate_field(Field::Name, "Al"), NAME_TOO_SHORT);
    }

    #[test]
    fn name_of_three_or_more_is_accepted() {
        assert_eq!(validate_field(Field::Name, "Ali"), "");
        assert_eq!(validate_field(Field::Name, "Alice"), "");
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        // Two characters, four bytes in UTF-8.
        assert_eq!(validate_field(Field::Name, "éé"), NAME_TOO_SHORT);
        assert_eq!(validate_field(Field::Name, "ééé"), "");
    }

    #[test]
    fn email_accepts_simple_shapes() {
        assert_eq!(validate_field(Field::Email, "alice@example.com"), "");
        assert_eq!(validate_field(Field::Email, "a@b.c"), "");
        assert_eq!(validate_field(Field::Email, "user+tag@example.co.uk"), "");
    }

    #[test]
    fn email_rejects_malformed_values() {
        assert_eq!(validate_field(Field::Email, ""), INVALID_EMAIL);
        assert_eq!(validate_field(Field::Email, "plainaddress"), INVALID_EMAIL);
        assert_eq!(validate_field(Field::Email, "@example.com"), INVALID_EMAIL);
        assert_eq!(validate_field(Field::Email, "user@"), INVALID_EMAIL);
        assert_eq!(validate_field(Field::Email, "user@nodot"), INVALID_EMAIL);
    }

    #[test]
    fn email_rejects_whitespace_anywhere() {
        assert_eq!(validate_field(Field::Email, "a b@c.d"), INVALID_EMAIL);
        assert_eq!(validate_field(Field::Email, "user@ example.com"), INVALID_EMAIL);
        assert_eq!(validate_field(Field::Email, " user@example.com"), INVALID_EMAIL);
    }

    #[test]
    fn mobile_requires_exactly_ten_characters() {
        assert_eq!(validate_field(Field::Mobile, "1234567890"), "");
        assert_eq!(validate_field(Field::Mobile, "123456789"), MOBILE_WRONG_LENGTH);
        assert_eq!(validate_field(Field::Mobile, "12345678901"), MOBILE_WRONG_LENGTH);
        assert_eq!(validate_field(Field::Mobile, ""), MOBILE_WRONG_LENGTH);
    }

    #[test]
    fn mobile_checks_length_not_character_class() {
        // The rule counts characters only; non-digits of the right length pass.
        assert_eq!(validate_field(Field::Mobile, "abcdefghij"), "");
        assert_eq!(validate_field(Field::Mobile, "12345 6789"), "");
    }
}
