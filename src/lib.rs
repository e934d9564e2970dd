//! Account Form - Frontend Rust/Leptos Application
//!
//! A WebAssembly single-page app rendering an account-creation form with
//! inline client-side validation and a transient success message. There is
//! no backend and no persistence; "success" is local state only.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  SignupPage                                                  │
//! │  ├── ContactForm (name / email / mobile, inline errors,     │
//! │  │                success popover)                           │
//! │  └── ImagePanel (decorative)                                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (Field, FormData, FieldErrors)
//! - [`validate`] - Per-field validation rules
//! - [`form`] - Submit-time decision logic
//! - [`components`] - UI components (ContactForm, ImagePanel)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod validate;
pub mod form;
pub mod components;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{Field, FieldErrors, FormData};

// Validation
pub use validate::validate_field;

// Submit logic
pub use form::{evaluate_submit, SubmitOutcome};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Account Form - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <Title text=APP_NAME/>
            <main>
                <Routes>
                    <Route path="/" view=SignupPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn SignupPage() -> impl IntoView {
    view! {
        <div class="container">
            <div class="form-wrapper">
                <ContactForm/>
                <ImagePanel/>
            </div>
        </div>
    }
}
