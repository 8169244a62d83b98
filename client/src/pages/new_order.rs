//! New-order wizard page.

use chrono::Days;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::order_wizard::OrderWizard;
use crate::data::records::Records;
use crate::state::notifications::NewNotification;
use crate::state::order_form::OrderDraft;
use crate::state::session::SessionState;
use crate::util::auth::install_login_redirect;
use crate::util::clock::{parse_iso_date, today_iso};
use crate::util::format::money;
use crate::util::notify::use_notifier;

/// Earliest bookable delivery: the day after `today`.
fn earliest_delivery(today: &str) -> String {
    parse_iso_date(today)
        .and_then(|d| d.checked_add_days(Days::new(1)))
        .map_or_else(|| today.to_owned(), |d| d.format("%Y-%m-%d").to_string())
}

#[component]
pub fn NewOrderPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_login_redirect(session, navigate.clone());

    let records = expect_context::<RwSignal<Records>>();
    let notifier = use_notifier();
    let today = today_iso();
    let (clients, distributors, products) =
        records.with_untracked(|r| (r.clients.clone(), r.distributors.clone(), r.products.clone()));

    let placed_on = today.clone();
    let on_submit = Callback::new(move |draft: OrderDraft| {
        let mut placed = None;
        records.update(|r| placed = Some(r.place_order(&draft, &placed_on)));
        let Some(order) = placed else {
            return;
        };
        leptos::logging::log!("order placed: {} ({} lines)", order.id, order.lines.len());
        notifier.notify(
            NewNotification::success(
                "Order placed",
                format!("{} for {} is pending confirmation.", order.id, money(order.total_cents())),
            )
            .persistent()
            .action("View orders", "/orders"),
        );
        navigate("/orders", NavigateOptions::default());
    });

    view! {
        <div class="page page--narrow">
            <OrderWizard
                clients=clients
                distributors=distributors
                products=products
                min_delivery_date=earliest_delivery(&today)
                on_submit=on_submit
            />
        </div>
    }
}
