//! Full notification center: filters, bulk actions, and sample alerts.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::notification_panel::NotificationList;
use crate::state::notifications::{NewNotification, NotificationFilter, NotificationKind, Priority};
use crate::state::session::SessionState;
use crate::util::auth::install_login_redirect;
use crate::util::notify::use_notifier;

const FILTERS: &[(&str, NotificationFilter)] = &[
    ("All", NotificationFilter::All),
    ("Unread", NotificationFilter::Unread),
    ("Success", NotificationFilter::Kind(NotificationKind::Success)),
    ("Errors", NotificationFilter::Kind(NotificationKind::Error)),
    ("Warnings", NotificationFilter::Kind(NotificationKind::Warning)),
    ("Info", NotificationFilter::Kind(NotificationKind::Info)),
];

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_login_redirect(session, use_navigate());

    let notifier = use_notifier();
    let filter = RwSignal::new(NotificationFilter::All);
    let unread = move || notifier.store.with(|s| s.unread_count());

    let send_samples = move |_| {
        notifier.notify(
            NewNotification::info("Route plan ready", "Tomorrow's delivery routes have been generated.")
                .priority(Priority::Low)
                .persistent()
                .action("View deliveries", "/deliveries"),
        );
        notifier.notify(
            NewNotification::warning("Low stock", "Skimmed Milk 1L is below its reorder level.")
                .priority(Priority::Medium)
                .persistent()
                .action("View products", "/products"),
        );
        notifier.notify(
            NewNotification::error("Invoice overdue", "INV-2002 is past its due date.")
                .priority(Priority::High)
                .persistent()
                .action("View invoices", "/invoices"),
        );
    };

    view! {
        <div class="page">
            <div class="toolbar">
                <div class="segmented" role="tablist">
                    {FILTERS
                        .iter()
                        .map(|&(label, value)| {
                            view! {
                                <button
                                    role="tab"
                                    class="segmented__item"
                                    class:segmented__item--active=move || filter.get() == value
                                    on:click=move |_| filter.set(value)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <span class="toolbar__meta">{move || format!("{} unread", unread())}</span>
                <div class="toolbar__actions">
                    <button class="btn btn--link" on:click=move |_| notifier.mark_all_read()>"Mark all read"</button>
                    <button class="btn btn--link" on:click=move |_| notifier.clear_read()>"Clear read"</button>
                    <button class="btn btn--link btn--danger" on:click=move |_| notifier.clear_all()>"Clear all"</button>
                    <button class="btn btn--secondary" on:click=send_samples>"Send sample alerts"</button>
                </div>
            </div>
            <NotificationList filter=filter />
        </div>
    }
}
