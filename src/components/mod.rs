//! UI Components for the account form application.
//!
//! This module contains all Leptos components:
//!
//! - [`ContactForm`] - The account-creation form with inline validation
//! - [`ImagePanel`] - Decorative side panel (static markup)

mod contact;
mod panel;

pub use contact::*;
pub use panel::*;
