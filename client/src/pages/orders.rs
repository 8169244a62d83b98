//! Orders table with lifecycle actions.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::filter_bar::FilterBar;
use crate::components::menus::{MenuButton, MenuList, MenuToggle, Menus};
use crate::components::modal::{Modal, ModalWindow, use_modal};
use crate::components::status_badge::StatusBadge;
use crate::data::query::{client_name, distributor_name, filter_records};
use crate::data::records::Records;
use crate::data::types::{Order, OrderStatus};
use crate::state::modal::ModalState;
use crate::state::session::SessionState;
use crate::util::auth::install_login_redirect;
use crate::util::format::money;
use crate::util::notify::use_notifier;

const CANCEL_ORDER: &str = "cancel-order";

/// Next step offered from the row menu for each open status.
fn advance(status: OrderStatus) -> Option<(OrderStatus, &'static str)> {
    match status {
        OrderStatus::Pending => Some((OrderStatus::Confirmed, "Confirm")),
        OrderStatus::Confirmed => Some((OrderStatus::Processing, "Start processing")),
        OrderStatus::Processing => Some((OrderStatus::Shipped, "Mark shipped")),
        OrderStatus::Shipped => Some((OrderStatus::Delivered, "Mark delivered")),
        OrderStatus::Delivered | OrderStatus::Cancelled => None,
    }
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_login_redirect(session, use_navigate());

    view! {
        <Modal>
            <OrdersView />
        </Modal>
    }
}

#[component]
fn OrdersView() -> impl IntoView {
    let records = expect_context::<RwSignal<Records>>();
    let notifier = use_notifier();
    let modal = use_modal();
    let search = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let pending_cancel = RwSignal::new(None::<String>);

    let rows = move || {
        let term = search.get();
        let status = status.get();
        records.with(|r| filter_records(&r.orders, &term, &status).into_iter().cloned().collect::<Vec<_>>())
    };

    let confirm_cancel = move |_| {
        let Some(id) = pending_cancel.get_untracked() else {
            return;
        };
        let mut changed = false;
        records.update(|r| changed = r.set_order_status(&id, OrderStatus::Cancelled));
        if changed {
            leptos::logging::log!("order cancelled: {id}");
            notifier.warning("Order cancelled", format!("{id} was cancelled."));
        }
        pending_cancel.set(None);
        modal.update(ModalState::close);
    };

    view! {
        <div class="page">
            <FilterBar
                search=search
                status=status
                statuses={OrderStatus::ALL.iter().copied().map(OrderStatus::as_str).collect()}
                placeholder="Search orders..."
            >
                <a class="btn btn--primary" href="/orders/new">"+ New order"</a>
            </FilterBar>
            <Menus>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Order"</th>
                            <th>"Client"</th>
                            <th>"Distributor"</th>
                            <th>"Placed"</th>
                            <th>"Delivery"</th>
                            <th class="num">"Total"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=rows key=|o| (o.id.clone(), o.status) let:order>
                            <OrderRow order=order pending_cancel=pending_cancel />
                        </For>
                    </tbody>
                </table>
            </Menus>
            <ModalWindow name=CANCEL_ORDER title="Cancel order">
                <div class="confirm">
                    <p>
                        {move || format!(
                            "Cancel order {}? The client will need to place it again.",
                            pending_cancel.get().unwrap_or_default(),
                        )}
                    </p>
                    <div class="confirm__actions">
                        <button class="btn btn--secondary" on:click=move |_| modal.update(ModalState::close)>
                            "Keep order"
                        </button>
                        <button class="btn btn--danger" on:click=confirm_cancel>"Cancel order"</button>
                    </div>
                </div>
            </ModalWindow>
        </div>
    }
}

#[component]
fn OrderRow(order: Order, pending_cancel: RwSignal<Option<String>>) -> impl IntoView {
    let records = expect_context::<RwSignal<Records>>();
    let notifier = use_notifier();
    let modal = use_modal();
    let menu_id = format!("order-{}", order.id);

    let (client, distributor) = records.with_untracked(|r| {
        (client_name(&r.clients, &order.client_id), distributor_name(&r.distributors, order.distributor_id.as_deref()))
    });

    let step = advance(order.status);
    let step_id = order.id.clone();
    let advance_order = Callback::new(move |()| {
        let Some((next, _)) = step else {
            return;
        };
        let mut changed = false;
        records.update(|r| changed = r.set_order_status(&step_id, next));
        if changed {
            leptos::logging::log!("order {step_id} -> {}", next.as_str());
            notifier.success("Order updated", format!("{step_id} is now {}.", next.display().label));
        }
    });

    let cancel_id = order.id.clone();
    let ask_cancel = Callback::new(move |()| {
        pending_cancel.set(Some(cancel_id.clone()));
        modal.update(|m| m.open(CANCEL_ORDER));
    });

    let can_cancel = step.is_some();

    view! {
        <tr>
            <td class="mono">{order.id.clone()}</td>
            <td>{client}</td>
            <td>{distributor}</td>
            <td>{order.placed_on.clone()}</td>
            <td>{order.delivery_date.clone()}</td>
            <td class="num">{money(order.total_cents())}</td>
            <td>
                <StatusBadge status=order.status.as_str() />
            </td>
            <td class="table__actions">
                {can_cancel
                    .then(|| {
                        view! {
                            <MenuToggle id=menu_id.clone() />
                            <MenuList id=menu_id>
                                {step.map(|(_, label)| view! { <MenuButton label=label icon="➜" on_click=advance_order /> })}
                                <MenuButton label="Cancel order" icon="✕" danger=true on_click=ask_cancel />
                            </MenuList>
                        }
                    })}
            </td>
        </tr>
    }
}
