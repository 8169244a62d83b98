//! Compound dropdown menu: `Menus` > `MenuToggle` + `MenuList` > `MenuButton`.
//!
//! ARCHITECTURE
//! ============
//! `Menus` scopes one `MenuState` to its subtree (typically a table), so only
//! one row menu is open at a time. Lists render through a `Portal` into
//! `<body>` with fixed positioning computed from the toggle's client rect,
//! which keeps them clear of table overflow clipping. A single window click
//! listener closes the open list on any click outside it.

use leptos::portal::Portal;
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::menu::{Rect, menu_position, should_close_on_click};
use crate::state::menu::{MenuPosition, MenuState};

/// Menu group provider.
#[component]
pub fn Menus(children: Children) -> impl IntoView {
    let menus = RwSignal::new(MenuState::default());
    provide_context(menus);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let handle = window_event_listener(leptos::ev::click, move |ev| {
            let open = menus.with_untracked(|m| m.open_id.is_some());
            if !open {
                return;
            }
            let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok());
            let within = |selector: &str| {
                target
                    .as_ref()
                    .is_some_and(|el| el.closest(selector).ok().flatten().is_some())
            };
            if should_close_on_click(open, within(".menus__list"), within(".menus__toggle")) {
                menus.update(MenuState::close);
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! { <div class="menus">{children()}</div> }
}

fn use_menus() -> RwSignal<MenuState> {
    expect_context::<RwSignal<MenuState>>()
}

/// Kebab button that opens (or closes) the list registered under `id`.
#[component]
pub fn MenuToggle(#[prop(into)] id: String) -> impl IntoView {
    let menus = use_menus();
    let button_ref = NodeRef::<leptos::html::Button>::new();
    let expanded_id = id.clone();
    let is_expanded = move || menus.with(|m| m.is_open(&expanded_id));

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        let position = toggle_position(button_ref);
        menus.update(|m| m.toggle(&id, position));
    };

    view! {
        <button
            class="menus__toggle"
            node_ref=button_ref
            aria-haspopup="menu"
            aria-expanded=move || is_expanded().to_string()
            title="Actions"
            on:click=on_click
        >
            "⋮"
        </button>
    }
}

#[cfg(feature = "hydrate")]
fn toggle_position(button_ref: NodeRef<leptos::html::Button>) -> MenuPosition {
    let Some(button) = button_ref.get_untracked() else {
        return MenuPosition::default();
    };
    let r = button.get_bounding_client_rect();
    let viewport_width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    menu_position(Rect { x: r.x(), y: r.y(), width: r.width(), height: r.height() }, viewport_width)
}

#[cfg(not(feature = "hydrate"))]
fn toggle_position(button_ref: NodeRef<leptos::html::Button>) -> MenuPosition {
    let _ = button_ref;
    MenuPosition::default()
}

/// Floating list for menu `id`, portalled into `<body>` while open.
#[component]
pub fn MenuList(#[prop(into)] id: String, children: ChildrenFn) -> impl IntoView {
    let menus = use_menus();
    let is_open = move || menus.with(|m| m.is_open(&id));

    view! {
        <Show when=is_open>
            {
                let children = children.clone();
                view! {
                    <Portal>
                        <ul
                            class="menus__list"
                            role="menu"
                            style=move || menus.with(|m| m.position.style())
                        >
                            {children()}
                        </ul>
                    </Portal>
                }
            }
        </Show>
    }
}

/// One menu entry. Runs `on_click`, then closes the list.
#[component]
pub fn MenuButton(
    #[prop(into)] label: String,
    #[prop(optional, into)] icon: Option<String>,
    #[prop(optional)] danger: bool,
    on_click: Callback<()>,
) -> impl IntoView {
    let menus = use_menus();
    view! {
        <li role="none">
            <button
                class="menus__button"
                class:menus__button--danger=danger
                role="menuitem"
                on:click=move |_| {
                    on_click.run(());
                    menus.update(MenuState::close);
                }
            >
                {icon.map(|i| view! { <span class="menus__icon" aria-hidden="true">{i}</span> })}
                <span>{label}</span>
            </button>
        </li>
    }
}
