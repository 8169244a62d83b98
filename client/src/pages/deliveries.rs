//! Deliveries table plus the live tracking map for vans on the road.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::delivery_map::DeliveryMap;
use crate::components::filter_bar::FilterBar;
use crate::components::menus::{MenuButton, MenuList, MenuToggle, Menus};
use crate::components::status_badge::StatusBadge;
use crate::data::query::{client_name, distributor_name, filter_records};
use crate::data::records::Records;
use crate::data::types::{Delivery, DeliveryStatus};
use crate::state::notifications::{NewNotification, Priority};
use crate::state::session::SessionState;
use crate::state::tracking::in_transit_routes;
use crate::util::auth::install_login_redirect;
use crate::util::notify::use_notifier;

#[component]
pub fn DeliveriesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_login_redirect(session, use_navigate());

    let records = expect_context::<RwSignal<Records>>();
    let search = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());

    let rows = move || {
        let term = search.get();
        let status = status.get();
        records.with(|r| filter_records(&r.deliveries, &term, &status).into_iter().cloned().collect::<Vec<_>>())
    };
    let routes = records.with_untracked(|r| in_transit_routes(&r.deliveries, &r.clients, &r.distributors));

    view! {
        <div class="page">
            <DeliveryMap routes=routes />
            <FilterBar
                search=search
                status=status
                statuses={DeliveryStatus::ALL.iter().copied().map(DeliveryStatus::as_str).collect()}
                placeholder="Search deliveries..."
            />
            <Menus>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Delivery"</th>
                            <th>"Order"</th>
                            <th>"Client"</th>
                            <th>"Distributor"</th>
                            <th>"Date"</th>
                            <th>"Slot"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=rows key=|d| (d.id.clone(), d.status) let:delivery>
                            <DeliveryRow delivery=delivery />
                        </For>
                    </tbody>
                </table>
            </Menus>
        </div>
    }
}

#[component]
fn DeliveryRow(delivery: Delivery) -> impl IntoView {
    let records = expect_context::<RwSignal<Records>>();
    let notifier = use_notifier();
    let menu_id = format!("delivery-{}", delivery.id);
    let (client, distributor) = records.with_untracked(|r| {
        (client_name(&r.clients, &delivery.client_id), distributor_name(&r.distributors, Some(delivery.distributor_id.as_str())))
    });

    let open = matches!(
        delivery.status,
        DeliveryStatus::Scheduled | DeliveryStatus::InTransit | DeliveryStatus::Delayed
    );

    let id = delivery.id.clone();
    let who = client.clone();
    let mark_delivered = Callback::new(move |()| {
        let mut changed = false;
        records.update(|r| changed = r.set_delivery_status(&id, DeliveryStatus::Delivered));
        if changed {
            leptos::logging::log!("delivery {id} delivered");
            notifier.success("Delivery completed", format!("{id} was delivered to {who}."));
        }
    });

    let id = delivery.id.clone();
    let who = client.clone();
    let report_delay = Callback::new(move |()| {
        let mut changed = false;
        records.update(|r| changed = r.set_delivery_status(&id, DeliveryStatus::Delayed));
        if changed {
            leptos::logging::warn!("delivery {id} delayed");
            notifier.notify(
                NewNotification::warning("Delivery delayed", format!("{id} to {who} is running late."))
                    .priority(Priority::High)
                    .persistent()
                    .action("View deliveries", "/deliveries"),
            );
        }
    });

    view! {
        <tr>
            <td class="mono">{delivery.id.clone()}</td>
            <td class="mono">{delivery.order_id.clone()}</td>
            <td>{client}</td>
            <td>{distributor}</td>
            <td>{delivery.scheduled_for.clone()}</td>
            <td>{delivery.time_slot.clone()}</td>
            <td>
                <StatusBadge status=delivery.status.as_str() />
            </td>
            <td class="table__actions">
                {open
                    .then(|| {
                        view! {
                            <MenuToggle id=menu_id.clone() />
                            <MenuList id=menu_id>
                                <MenuButton label="Mark delivered" icon="✓" on_click=mark_delivered />
                                <MenuButton label="Report delay" icon="⏱" danger=true on_click=report_delay />
                            </MenuList>
                        }
                    })}
            </td>
        </tr>
    }
}
