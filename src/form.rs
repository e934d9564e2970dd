//! Submit-time decision logic for the account form.
//!
//! The component keeps its state in signals; everything it has to decide
//! on submit lives here as plain functions over [`FormData`] and
//! [`FieldErrors`], so the branch behavior is testable without a browser.

use crate::types::{FieldErrors, FormData};

/// Message placed in the name error slot when a field was left empty.
pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";

/// Message shown (and logged) after a valid submission.
pub const ACCOUNT_CREATED: &str = "Account created successfully 🎉";

/// What the submit handler should do with the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A validation message is already showing; keep it, drop any success text.
    Rejected,
    /// No messages showing, but at least one field was never filled in.
    MissingFields,
    /// Every field is filled and valid; create the account.
    Accepted,
}

/// Decide the submit branch for the current form state.
///
/// Existing messages win over the empty-field check: a field the user
/// never touched carries no message and is only caught by the
/// [`SubmitOutcome::MissingFields`] branch. On `MissingFields` the
/// caller overwrites only the name error slot with
/// [`ALL_FIELDS_REQUIRED`] — the other slots keep whatever they held.
pub fn evaluate_submit(data: &FormData, errors: &FieldErrors) -> SubmitOutcome {
    if errors.has_any() {
        return SubmitOutcome::Rejected;
    }
    if data.has_empty() {
        return SubmitOutcome::MissingFields;
    }
    SubmitOutcome::Accepted
}
