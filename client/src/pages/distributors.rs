//! Distributors table.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::filter_bar::FilterBar;
use crate::components::menus::{MenuButton, MenuList, MenuToggle, Menus};
use crate::components::modal::{ConfirmDelete, Modal, ModalWindow, use_modal};
use crate::components::status_badge::StatusBadge;
use crate::data::query::filter_records;
use crate::data::records::Records;
use crate::data::types::{AccountStatus, Distributor};
use crate::state::session::SessionState;
use crate::util::auth::install_login_redirect;
use crate::util::notify::use_notifier;

const DELETE_DISTRIBUTOR: &str = "delete-distributor";

#[component]
pub fn DistributorsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_login_redirect(session, use_navigate());

    view! {
        <Modal>
            <DistributorsView />
        </Modal>
    }
}

#[component]
fn DistributorsView() -> impl IntoView {
    let records = expect_context::<RwSignal<Records>>();
    let notifier = use_notifier();
    let search = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let pending_delete = RwSignal::new(None::<Distributor>);

    let rows = move || {
        let term = search.get();
        let status = status.get();
        records.with(|r| filter_records(&r.distributors, &term, &status).into_iter().cloned().collect::<Vec<_>>())
    };

    let on_delete = Callback::new(move |()| {
        let Some(d) = pending_delete.get_untracked() else {
            return;
        };
        let mut removed = false;
        records.update(|r| removed = r.remove_distributor(&d.id));
        if removed {
            leptos::logging::log!("distributor deleted: {}", d.id);
            notifier.success("Distributor deleted", format!("{} was removed.", d.name));
        }
        pending_delete.set(None);
    });

    view! {
        <div class="page">
            <FilterBar
                search=search
                status=status
                statuses={AccountStatus::ALL.iter().copied().map(AccountStatus::as_str).collect()}
                placeholder="Search distributors..."
            />
            <Menus>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Name"</th>
                            <th>"Vehicle"</th>
                            <th>"Zone"</th>
                            <th class="num">"Rating"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=rows key=|d| (d.id.clone(), d.status) let:distributor>
                            <DistributorRow distributor=distributor pending_delete=pending_delete />
                        </For>
                    </tbody>
                </table>
            </Menus>
            <ModalWindow name=DELETE_DISTRIBUTOR title="Delete distributor">
                <ConfirmDelete
                    resource=move || pending_delete.with(|d| d.as_ref().map(|d| d.name.clone()).unwrap_or_default())
                    on_confirm=on_delete
                />
            </ModalWindow>
        </div>
    }
}

#[component]
fn DistributorRow(distributor: Distributor, pending_delete: RwSignal<Option<Distributor>>) -> impl IntoView {
    let records = expect_context::<RwSignal<Records>>();
    let notifier = use_notifier();
    let modal = use_modal();
    let menu_id = format!("distributor-{}", distributor.id);

    let active = distributor.status == AccountStatus::Active;
    let next_status = if active { AccountStatus::Inactive } else { AccountStatus::Active };
    let toggle_label = if active { "Deactivate" } else { "Activate" };
    let id = distributor.id.clone();
    let name = distributor.name.clone();
    let toggle_status = Callback::new(move |()| {
        let mut changed = false;
        records.update(|r| changed = r.set_distributor_status(&id, next_status));
        if changed {
            notifier.info("Distributor updated", format!("{name} is now {}.", next_status.display().label));
        }
    });

    let name = distributor.name.clone();
    let phone = distributor.phone.clone();
    let call = Callback::new(move |()| {
        notifier.info("Call distributor", format!("{name}: {phone}"));
    });

    let target = distributor.clone();
    let ask_delete = Callback::new(move |()| {
        pending_delete.set(Some(target.clone()));
        modal.update(|m| m.open(DELETE_DISTRIBUTOR));
    });

    view! {
        <tr>
            <td class="mono">{distributor.id.clone()}</td>
            <td>
                <div>{distributor.name.clone()}</div>
                <div class="muted">{distributor.phone.clone()}</div>
            </td>
            <td>{distributor.vehicle.clone()}</td>
            <td>{distributor.zone.clone()}</td>
            <td class="num">{format!("★ {:.1}", distributor.rating)}</td>
            <td>
                <StatusBadge status=distributor.status.as_str() />
            </td>
            <td class="table__actions">
                <MenuToggle id=menu_id.clone() />
                <MenuList id=menu_id>
                    <MenuButton label="Call" icon="☎" on_click=call />
                    <MenuButton label=toggle_label icon="⏯" on_click=toggle_status />
                    <MenuButton label="Delete" icon="🗑" danger=true on_click=ask_delete />
                </MenuList>
            </td>
        </tr>
    }
}
