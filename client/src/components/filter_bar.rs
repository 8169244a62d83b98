//! Search box plus status dropdown shown above every table.

use leptos::prelude::*;

use crate::util::status::status_display;

#[component]
pub fn FilterBar(
    search: RwSignal<String>,
    status: RwSignal<String>,
    /// Status keys offered in the dropdown.
    statuses: Vec<&'static str>,
    #[prop(into)] placeholder: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <input
                class="filter-bar__search"
                type="search"
                placeholder=placeholder
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <select
                class="filter-bar__status"
                prop:value=move || status.get()
                on:change=move |ev| status.set(event_target_value(&ev))
            >
                <option value="">"All statuses"</option>
                {statuses
                    .into_iter()
                    .map(|key| view! { <option value=key>{status_display(key).label}</option> })
                    .collect_view()}
            </select>
            <div class="filter-bar__actions">{children.map(|c| c())}</div>
        </div>
    }
}
