//! Top bar: section title, theme toggle, notification bell and user menu.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::menus::{MenuButton, MenuList, MenuToggle, Menus};
use crate::state::session::SessionState;
use crate::state::ui::{Section, UiState};
use crate::util::notify::use_notifier;
use crate::util::theme;

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let notifier = use_notifier();
    let location = use_location();
    let navigate = use_navigate();

    let title = move || Section::from_path(&location.pathname.get()).label();
    let unread = move || notifier.store.with(|s| s.unread_count());
    let user_name = move || session.with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let initials = move || session.with(|s| s.user.as_ref().map(|u| u.initials()).unwrap_or_default());
    let role = move || session.with(|s| s.user.as_ref().map(|u| u.role.label()).unwrap_or_default());

    let toggle_theme = move |_| {
        ui.update(|u| u.dark_mode = theme::toggle(u.dark_mode));
    };
    let toggle_drawer = move |_| {
        ui.update(|u| u.notification_drawer_open = !u.notification_drawer_open);
    };
    let sign_out = Callback::new(move |()| {
        let name = user_name();
        session.update(SessionState::logout);
        leptos::logging::log!("signed out {name}");
        navigate("/login", NavigateOptions::default());
    });

    view! {
        <header class="header">
            <h1 class="header__title">{title}</h1>
            <div class="header__actions">
                <button class="header__icon-button" title="Toggle theme" on:click=toggle_theme>
                    {move || if ui.with(|u| u.dark_mode) { "☀" } else { "☾" }}
                </button>
                <button class="header__icon-button header__bell" title="Notifications" on:click=toggle_drawer>
                    "🔔"
                    <Show when=move || { unread() > 0 }>
                        <span class="header__badge">{unread}</span>
                    </Show>
                </button>
                <Menus>
                    <div class="header__user">
                        <span class="header__avatar">{initials}</span>
                        <div class="header__who">
                            <span class="header__name">{user_name}</span>
                            <span class="header__role">{role}</span>
                        </div>
                        <MenuToggle id="user-menu" />
                        <MenuList id="user-menu">
                            <MenuButton
                                label="Notifications"
                                icon="🔔"
                                on_click=Callback::new(move |()| ui.update(|u| u.notification_drawer_open = true))
                            />
                            <MenuButton label="Sign out" icon="⎋" on_click=sign_out />
                        </MenuList>
                    </div>
                </Menus>
            </div>
        </header>
    }
}
