//! Fixed-position stack of transient notification toasts.

use leptos::prelude::*;

use crate::state::notifications::Notification;
use crate::util::notify::use_notifier;

#[component]
pub fn ToastStack() -> impl IntoView {
    let notifier = use_notifier();
    let toasts = move || {
        notifier
            .store
            .with(|s| s.toasts().into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For each=toasts key=|n| n.id.clone() let:toast>
                <Toast toast=toast />
            </For>
        </div>
    }
}

#[component]
fn Toast(toast: Notification) -> impl IntoView {
    let notifier = use_notifier();
    let id = toast.id.clone();
    let dismiss = move |_| notifier.dismiss_toast(&id);
    let class = format!("toast toast--{}", toast.kind.as_str());

    let action = toast.action.map(|action| {
        let id = toast.id.clone();
        view! {
            <a
                class="toast__action"
                href=action.href
                on:click=move |_| {
                    notifier.mark_read(&id);
                    notifier.dismiss_toast(&id);
                }
            >
                {action.label}
            </a>
        }
    });

    view! {
        <div class=class>
            <span class="toast__icon" aria-hidden="true">{toast.kind.icon()}</span>
            <div class="toast__body">
                <div class="toast__title">{toast.title}</div>
                <div class="toast__message">{toast.message}</div>
                {action}
            </div>
            <button class="toast__close" title="Dismiss" on:click=dismiss>"✕"</button>
        </div>
    }
}
