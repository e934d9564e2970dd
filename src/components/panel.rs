//! Decorative side panel component

use leptos::*;

#[component]
pub fn ImagePanel() -> impl IntoView {
    view! {
        <div class="image-panel"></div>
    }
}
