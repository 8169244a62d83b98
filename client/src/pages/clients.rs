//! Clients table with search, status filter, new-client modal and row actions.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::client_form::ClientForm;
use crate::components::filter_bar::FilterBar;
use crate::components::menus::{MenuButton, MenuList, MenuToggle, Menus};
use crate::components::modal::{ConfirmDelete, Modal, ModalOpen, ModalWindow, use_modal};
use crate::components::status_badge::StatusBadge;
use crate::data::query::filter_records;
use crate::data::records::Records;
use crate::data::types::{AccountStatus, Client};
use crate::state::client_form::ClientDraft;
use crate::state::session::SessionState;
use crate::util::auth::install_login_redirect;
use crate::util::clock::today_iso;
use crate::util::notify::use_notifier;

const NEW_CLIENT: &str = "new-client";
const DELETE_CLIENT: &str = "delete-client";

#[component]
pub fn ClientsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_login_redirect(session, use_navigate());

    view! {
        <Modal>
            <ClientsView />
        </Modal>
    }
}

#[component]
fn ClientsView() -> impl IntoView {
    let records = expect_context::<RwSignal<Records>>();
    let notifier = use_notifier();
    let search = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let pending_delete = RwSignal::new(None::<Client>);

    let rows = move || {
        let term = search.get();
        let status = status.get();
        records.with(|r| filter_records(&r.clients, &term, &status).into_iter().cloned().collect::<Vec<_>>())
    };

    let on_create = Callback::new(move |draft: ClientDraft| {
        let mut created = None;
        records.update(|r| created = Some(r.add_client(&draft, &today_iso())));
        if let Some(client) = created {
            leptos::logging::log!("client created: {}", client.id);
            notifier.success("Client created", format!("{} ({}) was added.", client.name, client.id));
        }
    });

    let on_delete = Callback::new(move |()| {
        let Some(client) = pending_delete.get_untracked() else {
            return;
        };
        let mut removed = false;
        records.update(|r| removed = r.remove_client(&client.id));
        if removed {
            leptos::logging::log!("client deleted: {}", client.id);
            notifier.success("Client deleted", format!("{} was removed.", client.name));
        }
        pending_delete.set(None);
    });

    view! {
        <div class="page">
            <FilterBar
                search=search
                status=status
                statuses={AccountStatus::ALL.iter().copied().map(AccountStatus::as_str).collect()}
                placeholder="Search clients..."
            >
                <ModalOpen opens=NEW_CLIENT>
                    <button class="btn btn--primary">"+ New client"</button>
                </ModalOpen>
            </FilterBar>
            <Menus>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Business"</th>
                            <th>"Type"</th>
                            <th>"Contact"</th>
                            <th>"City"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=rows key=|c| (c.id.clone(), c.status) let:client>
                            <ClientRow client=client pending_delete=pending_delete />
                        </For>
                    </tbody>
                </table>
                <Show when=move || rows().is_empty()>
                    <p class="table__empty">"No clients match the current filters."</p>
                </Show>
            </Menus>
            <ModalWindow name=NEW_CLIENT title="New client">
                <ClientForm on_submit=on_create />
            </ModalWindow>
            <ModalWindow name=DELETE_CLIENT title="Delete client">
                <ConfirmDelete
                    resource=move || pending_delete.with(|c| c.as_ref().map(|c| c.name.clone()).unwrap_or_default())
                    on_confirm=on_delete
                />
            </ModalWindow>
        </div>
    }
}

#[component]
fn ClientRow(client: Client, pending_delete: RwSignal<Option<Client>>) -> impl IntoView {
    let records = expect_context::<RwSignal<Records>>();
    let notifier = use_notifier();
    let modal = use_modal();
    let menu_id = format!("client-{}", client.id);

    let suspended = client.status == AccountStatus::Suspended;
    let toggle_label = if suspended { "Reactivate" } else { "Suspend" };
    let next_status = if suspended { AccountStatus::Active } else { AccountStatus::Suspended };
    let status_id = client.id.clone();
    let status_name = client.name.clone();
    let toggle_status = Callback::new(move |()| {
        let mut changed = false;
        records.update(|r| changed = r.set_client_status(&status_id, next_status));
        if changed {
            notifier.info("Client updated", format!("{status_name} is now {}.", next_status.display().label));
        }
    });

    let contact_name = client.name.clone();
    let contact_email = client.email.clone();
    let contact = Callback::new(move |()| {
        leptos::logging::log!("contact requested for {contact_name}");
        notifier.info("Contact details", format!("{contact_name}: {contact_email}"));
    });

    let delete_target = client.clone();
    let ask_delete = Callback::new(move |()| {
        pending_delete.set(Some(delete_target.clone()));
        modal.update(|m| m.open(DELETE_CLIENT));
    });

    view! {
        <tr>
            <td class="mono">{client.id.clone()}</td>
            <td>{client.name.clone()}</td>
            <td>{client.kind.label()}</td>
            <td>
                <div>{client.contact_name.clone()}</div>
                <div class="muted">{client.phone.clone()}</div>
            </td>
            <td>{client.city.clone()}</td>
            <td>
                <StatusBadge status=client.status.as_str() />
            </td>
            <td class="table__actions">
                <MenuToggle id=menu_id.clone() />
                <MenuList id=menu_id>
                    <MenuButton label="Contact" icon="✉" on_click=contact />
                    <MenuButton label=toggle_label icon="⏯" on_click=toggle_status />
                    <MenuButton label="Delete" icon="🗑" danger=true on_click=ask_delete />
                </MenuList>
            </td>
        </tr>
    }
}
