//! Colored status pill for any record status key.

use leptos::prelude::*;

use crate::util::status::status_display;

/// Renders `status` through the shared display table; unknown keys show as "Unknown".
#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let display = status_display(&status);
    view! {
        <span class=display.tone.class() title=status>
            <span class="badge__icon" aria-hidden="true">{display.icon}</span>
            {display.label}
        </span>
    }
}
