//! Persistent-notification list, shared by the header drawer and the
//! notifications page.

use leptos::prelude::*;

use crate::state::notifications::{Notification, NotificationFilter};
use crate::state::ui::UiState;
use crate::util::clock::now_ms;
use crate::util::format::relative_time;
use crate::util::notify::use_notifier;

/// Panel entries matching `filter`, high priority first.
#[component]
pub fn NotificationList(
    #[prop(into)] filter: Signal<NotificationFilter>,
    #[prop(optional)] limit: Option<usize>,
) -> impl IntoView {
    let notifier = use_notifier();
    let entries = move || {
        let filter = filter.get();
        notifier.store.with(|s| {
            s.filtered(filter)
                .into_iter()
                .take(limit.unwrap_or(usize::MAX))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Show
            when=move || !entries().is_empty()
            fallback=|| view! { <p class="notification-list__empty">"No notifications."</p> }
        >
            <ul class="notification-list">
                <For each=entries key=|n| (n.id.clone(), n.read) let:entry>
                    <NotificationRow entry=entry />
                </For>
            </ul>
        </Show>
    }
}

#[component]
fn NotificationRow(entry: Notification) -> impl IntoView {
    let notifier = use_notifier();
    let class = format!(
        "notification-list__item notification-list__item--{} notification-list__item--{}",
        entry.kind.as_str(),
        entry.priority.as_str()
    );
    let read_id = entry.id.clone();
    let remove_id = entry.id.clone();
    let when = relative_time(now_ms(), entry.timestamp_ms);
    let unread = !entry.read;

    let action = entry.action.map(|action| {
        let id = entry.id.clone();
        view! {
            <a class="notification-list__action" href=action.href on:click=move |_| notifier.mark_read(&id)>
                {action.label}
            </a>
        }
    });

    view! {
        <li class=class class:notification-list__item--unread=unread>
            <span class="notification-list__icon" aria-hidden="true">{entry.kind.icon()}</span>
            <div class="notification-list__body">
                <div class="notification-list__title">{entry.title}</div>
                <div class="notification-list__message">{entry.message}</div>
                <div class="notification-list__meta">
                    <span>{when}</span>
                    {action}
                </div>
            </div>
            <div class="notification-list__controls">
                <Show when=move || unread>
                    {
                        let read_id = read_id.clone();
                        view! {
                            <button title="Mark as read" on:click=move |_| notifier.mark_read(&read_id)>
                                "✓"
                            </button>
                        }
                    }
                </Show>
                <button title="Remove" on:click=move |_| notifier.remove(&remove_id)>"🗑"</button>
            </div>
        </li>
    }
}

/// Slide-over drawer opened from the header bell.
#[component]
pub fn NotificationDrawer() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let notifier = use_notifier();
    let close = move || ui.update(|u| u.notification_drawer_open = false);

    view! {
        <Show when=move || ui.with(|u| u.notification_drawer_open)>
            <div class="drawer__backdrop" on:click=move |_| close()></div>
            <aside class="drawer" aria-label="Notifications">
                <div class="drawer__header">
                    <h2>"Notifications"</h2>
                    <button class="drawer__close" title="Close" on:click=move |_| close()>"✕"</button>
                </div>
                <div class="drawer__actions">
                    <button class="btn btn--link" on:click=move |_| notifier.mark_all_read()>
                        "Mark all read"
                    </button>
                    <a class="btn btn--link" href="/notifications" on:click=move |_| close()>
                        "View all"
                    </a>
                </div>
                <NotificationList filter=NotificationFilter::All limit=10 />
            </aside>
        </Show>
    }
}
