//! Application configuration.
//!
//! Centralized configuration for the account form. These are fixed at
//! compile time; there is no environment or file-based configuration.

/// Application name.
///
/// Used for the document title.
pub const APP_NAME: &str = "Create an Account";

/// Minimum accepted length for the name field.
pub const MIN_NAME_LEN: usize = 3;

/// Exact accepted length for the mobile field.
///
/// Length is the only rule enforced; the digit-only hint lives in the
/// input's `pattern` attribute.
pub const MOBILE_LEN: usize = 10;

/// How long the success message stays visible (in milliseconds).
pub const SUCCESS_CLEAR_MS: u32 = 3_000;
