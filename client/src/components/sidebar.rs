//! Primary navigation rail.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::ui::{Section, UiState};
use crate::util::preferences::Preferences;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let active = move || Section::from_path(&location.pathname.get());

    let toggle_collapsed = move |_| {
        let mut collapsed = false;
        ui.update(|u| {
            u.sidebar_collapsed = !u.sidebar_collapsed;
            collapsed = u.sidebar_collapsed;
        });
        Preferences::update(|p| p.sidebar_collapsed = collapsed);
    };

    view! {
        <nav class="sidebar" class:sidebar--collapsed=move || ui.with(|u| u.sidebar_collapsed)>
            <div class="sidebar__brand">
                <span class="sidebar__logo" aria-hidden="true">"🥛"</span>
                <span class="sidebar__name">"Dairy Admin"</span>
            </div>
            <ul class="sidebar__links">
                {Section::ALL
                    .iter()
                    .map(|&section| {
                        view! {
                            <li>
                                <a
                                    class="sidebar__link"
                                    class:sidebar__link--active=move || active() == section
                                    href=section.href()
                                    title=section.label()
                                >
                                    <span class="sidebar__icon" aria-hidden="true">{section.icon()}</span>
                                    <span class="sidebar__label">{section.label()}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button class="sidebar__collapse" title="Collapse sidebar" on:click=toggle_collapsed>
                {move || if ui.with(|u| u.sidebar_collapsed) { "»" } else { "«" }}
            </button>
        </nav>
    }
}
