//! Account-creation form with inline validation.
//!
//! Owns the three input values, their validation messages, and the
//! transient success message. Validation runs on every keystroke; the
//! submit handler only decides between the already-computed states.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use web_sys::SubmitEvent;

use crate::config::SUCCESS_CLEAR_MS;
use crate::form::{evaluate_submit, SubmitOutcome, ACCOUNT_CREATED, ALL_FIELDS_REQUIRED};
use crate::types::{Field, FieldErrors, FormData};
use crate::validate::validate_field;

#[component]
pub fn ContactForm() -> impl IntoView {
    let (form_data, set_form_data) = create_signal(FormData::default());
    let (errors, set_errors) = create_signal(FieldErrors::default());
    let (success, set_success) = create_signal(String::new());

    // One input event: store the new value, revalidate that field only.
    let on_field_input = move |field: Field, value: String| {
        let message = validate_field(field, &value);
        set_form_data.update(|data| data.set(field, value));
        set_errors.update(|errors| errors.set(field, message));
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        match evaluate_submit(&form_data.get(), &errors.get()) {
            SubmitOutcome::Rejected => {
                // Keep the messages on screen; drop any stale success text.
                set_success.set(String::new());
            }
            SubmitOutcome::MissingFields => {
                set_success.set(String::new());
                set_errors.update(|errors| {
                    errors.set(Field::Name, ALL_FIELDS_REQUIRED.to_string());
                });
            }
            SubmitOutcome::Accepted => {
                set_errors.set(FieldErrors::default());
                set_success.set(ACCOUNT_CREATED.to_string());
                log::info!("{}", ACCOUNT_CREATED);

                // Fire-and-forget clear; not cancelled on re-submit.
                spawn_local(async move {
                    TimeoutFuture::new(SUCCESS_CLEAR_MS).await;
                    set_success.set(String::new());
                });

                set_form_data.set(FormData::default());
            }
        }
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <h2>"Create an Account"</h2>

            <div class="form-fields">
                <div class="input-container">
                    <label for="name">"Name"</label>
                    <input
                        type="text"
                        name="name"
                        id="name"
                        placeholder="Enter your name"
                        required=true
                        prop:value=move || form_data.get().name
                        on:input=move |ev| on_field_input(Field::Name, event_target_value(&ev))
                    />
                    <Show
                        when=move || !errors.get().name.is_empty()
                        fallback=|| view! { }
                    >
                        <span class="error-message">{move || errors.get().name}</span>
                    </Show>
                </div>

                <div class="input-container">
                    <label for="email">"Email"</label>
                    <input
                        type="email"
                        name="email"
                        id="email"
                        placeholder="Enter your email"
                        prop:value=move || form_data.get().email
                        on:input=move |ev| on_field_input(Field::Email, event_target_value(&ev))
                    />
                    <Show
                        when=move || !errors.get().email.is_empty()
                        fallback=|| view! { }
                    >
                        <span class="error-message">{move || errors.get().email}</span>
                    </Show>
                </div>

                <div class="input-container">
                    <label for="mobile">"Mobile"</label>
                    <input
                        type="text"
                        name="mobile"
                        id="mobile"
                        placeholder="Enter your mobile number"
                        pattern="[0-9]{10}"
                        prop:value=move || form_data.get().mobile
                        on:input=move |ev| on_field_input(Field::Mobile, event_target_value(&ev))
                    />
                    <Show
                        when=move || !errors.get().mobile.is_empty()
                        fallback=|| view! { }
                    >
                        <span class="error-message">{move || errors.get().mobile}</span>
                    </Show>
                </div>

                // Fade is CSS-driven; the span stays mounted so the
                // transition can play when the message clears.
                <span
                    class="success-popover"
                    class:show=move || !success.get().is_empty()
                >
                    {move || success.get()}
                </span>
            </div>

            <button type="submit" class="submit-button">"Submit"</button>
        </form>
    }
}
