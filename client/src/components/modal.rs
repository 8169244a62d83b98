//! Compound modal: `Modal` > `ModalOpen` + `ModalWindow`.
//!
//! `Modal` scopes a `ModalState` to its subtree. `ModalOpen` wraps any trigger
//! and opens the window registered under the same name. `ModalWindow` renders
//! into `<body>` through a `Portal`; Escape, the backdrop and the close button
//! all dismiss it. Window content can close itself through `use_modal`.

use leptos::portal::Portal;
use leptos::prelude::*;

use crate::state::modal::ModalState;

/// Modal group provider.
#[component]
pub fn Modal(children: Children) -> impl IntoView {
    let modal = RwSignal::new(ModalState::default());
    provide_context(modal);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && modal.with_untracked(ModalState::any_open) {
                ev.prevent_default();
                modal.update(ModalState::close);
            }
        });
        on_cleanup(move || handle.remove());
    }

    children()
}

/// The nearest `Modal` group's state.
pub fn use_modal() -> RwSignal<ModalState> {
    expect_context::<RwSignal<ModalState>>()
}

/// Trigger wrapper: clicking anything inside opens window `opens`.
#[component]
pub fn ModalOpen(#[prop(into)] opens: String, children: Children) -> impl IntoView {
    let modal = use_modal();
    view! {
        <span class="modal__open" on:click=move |_| modal.update(|m| m.open(&opens))>
            {children()}
        </span>
    }
}

#[component]
pub fn ModalWindow(
    #[prop(into)] name: String,
    #[prop(optional, into)] title: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let modal = use_modal();
    let is_open = move || modal.with(|m| m.is_open(&name));
    let close = move || modal.update(ModalState::close);

    view! {
        <Show when=is_open>
            {
                let children = children.clone();
                let title = title.clone();
                view! {
                    <Portal>
                        <div class="modal__backdrop" on:click=move |_| close()>
                            <div
                                class="modal"
                                role="dialog"
                                aria-modal="true"
                                on:click=move |ev| ev.stop_propagation()
                            >
                                <div class="modal__header">
                                    <h2>{title.clone().unwrap_or_default()}</h2>
                                    <button class="modal__close" title="Close" on:click=move |_| close()>
                                        "✕"
                                    </button>
                                </div>
                                <div class="modal__body">{children()}</div>
                            </div>
                        </div>
                    </Portal>
                }
            }
        </Show>
    }
}

/// Standard delete/cancel confirmation body for a `ModalWindow`.
#[component]
pub fn ConfirmDelete(
    #[prop(into)] resource: Signal<String>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let modal = use_modal();
    view! {
        <div class="confirm">
            <p>
                {move || format!("Are you sure you want to delete {}? This cannot be undone.", resource.get())}
            </p>
            <div class="confirm__actions">
                <button class="btn btn--secondary" on:click=move |_| modal.update(ModalState::close)>
                    "Cancel"
                </button>
                <button
                    class="btn btn--danger"
                    on:click=move |_| {
                        on_confirm.run(());
                        modal.update(ModalState::close);
                    }
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
