//! Invoices table with payment tracking.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::filter_bar::FilterBar;
use crate::components::menus::{MenuButton, MenuList, MenuToggle, Menus};
use crate::components::modal::{ConfirmDelete, Modal, ModalWindow, use_modal};
use crate::components::stat_card::StatCard;
use crate::components::status_badge::StatusBadge;
use crate::data::query::{client_name, filter_records};
use crate::data::records::Records;
use crate::data::types::{Invoice, InvoiceStatus};
use crate::state::session::SessionState;
use crate::util::auth::install_login_redirect;
use crate::util::format::money;
use crate::util::notify::use_notifier;

const DELETE_INVOICE: &str = "delete-invoice";

#[component]
pub fn InvoicesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_login_redirect(session, use_navigate());

    view! {
        <Modal>
            <InvoicesView />
        </Modal>
    }
}

#[component]
fn InvoicesView() -> impl IntoView {
    let records = expect_context::<RwSignal<Records>>();
    let notifier = use_notifier();
    let search = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let pending_delete = RwSignal::new(None::<String>);

    let rows = move || {
        let term = search.get();
        let status = status.get();
        records.with(|r| filter_records(&r.invoices, &term, &status).into_iter().cloned().collect::<Vec<_>>())
    };
    let total_for = move |wanted: &'static [InvoiceStatus]| {
        records.with(|r| {
            r.invoices
                .iter()
                .filter(|i| wanted.contains(&i.status))
                .map(|i| i.amount_cents)
                .sum::<i64>()
        })
    };

    let on_delete = Callback::new(move |()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        let mut removed = false;
        records.update(|r| removed = r.remove_invoice(&id));
        if removed {
            leptos::logging::log!("invoice deleted: {id}");
            notifier.success("Invoice deleted", format!("{id} was removed."));
        }
        pending_delete.set(None);
    });

    view! {
        <div class="page">
            <div class="stat-grid">
                {move || view! {
                    <StatCard label="Paid" value={money(total_for(&[InvoiceStatus::Paid]))} icon="✓" />
                    <StatCard
                        label="Outstanding"
                        value={money(total_for(&[InvoiceStatus::Sent, InvoiceStatus::Overdue]))}
                        icon="⏳"
                    />
                    <StatCard
                        label="Overdue"
                        value={money(total_for(&[InvoiceStatus::Overdue]))}
                        icon="⚠"
                        alert=true
                    />
                }}
            </div>
            <FilterBar
                search=search
                status=status
                statuses={InvoiceStatus::ALL.iter().copied().map(InvoiceStatus::as_str).collect()}
                placeholder="Search invoices..."
            />
            <Menus>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Invoice"</th>
                            <th>"Order"</th>
                            <th>"Client"</th>
                            <th>"Issued"</th>
                            <th>"Due"</th>
                            <th class="num">"Amount"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=rows key=|i| (i.id.clone(), i.status) let:invoice>
                            <InvoiceRow invoice=invoice pending_delete=pending_delete />
                        </For>
                    </tbody>
                </table>
            </Menus>
            <ModalWindow name=DELETE_INVOICE title="Delete invoice">
                <ConfirmDelete resource=move || pending_delete.get().unwrap_or_default() on_confirm=on_delete />
            </ModalWindow>
        </div>
    }
}

#[component]
fn InvoiceRow(invoice: Invoice, pending_delete: RwSignal<Option<String>>) -> impl IntoView {
    let records = expect_context::<RwSignal<Records>>();
    let notifier = use_notifier();
    let modal = use_modal();
    let menu_id = format!("invoice-{}", invoice.id);
    let client = records.with_untracked(|r| client_name(&r.clients, &invoice.client_id));
    let overdue = invoice.status == InvoiceStatus::Overdue;
    let payable = matches!(invoice.status, InvoiceStatus::Sent | InvoiceStatus::Overdue);

    let id = invoice.id.clone();
    let amount = invoice.amount_cents;
    let mark_paid = Callback::new(move |()| {
        let mut changed = false;
        records.update(|r| changed = r.mark_invoice_paid(&id));
        if changed {
            leptos::logging::log!("invoice {id} paid");
            notifier.success("Payment recorded", format!("{id} settled for {}.", money(amount)));
        }
    });

    let id = invoice.id.clone();
    let who = client.clone();
    let send_reminder = Callback::new(move |()| {
        leptos::logging::log!("reminder queued for {id}");
        notifier.info("Reminder sent", format!("Payment reminder for {id} sent to {who}."));
    });

    let id = invoice.id.clone();
    let ask_delete = Callback::new(move |()| {
        pending_delete.set(Some(id.clone()));
        modal.update(|m| m.open(DELETE_INVOICE));
    });

    view! {
        <tr class:table__row--alert=overdue>
            <td class="mono">{invoice.id.clone()}</td>
            <td class="mono">{invoice.order_id.clone()}</td>
            <td>{client}</td>
            <td>{invoice.issued_on.clone()}</td>
            <td>{invoice.due_on.clone()}</td>
            <td class="num">{money(invoice.amount_cents)}</td>
            <td>
                <StatusBadge status=invoice.status.as_str() />
            </td>
            <td class="table__actions">
                <MenuToggle id=menu_id.clone() />
                <MenuList id=menu_id>
                    {payable
                        .then(|| {
                            view! {
                                <MenuButton label="Mark paid" icon="✓" on_click=mark_paid />
                                <MenuButton label="Send reminder" icon="✉" on_click=send_reminder />
                            }
                        })}
                    <MenuButton label="Delete" icon="🗑" danger=true on_click=ask_delete />
                </MenuList>
            </td>
        </tr>
    }
}
