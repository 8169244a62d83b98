//! Product catalog with stock levels.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::filter_bar::FilterBar;
use crate::components::menus::{MenuButton, MenuList, MenuToggle, Menus};
use crate::components::modal::{ConfirmDelete, Modal, ModalWindow, use_modal};
use crate::components::status_badge::StatusBadge;
use crate::data::query::filter_records;
use crate::data::records::Records;
use crate::data::types::{Product, StockStatus};
use crate::state::notifications::{NewNotification, Priority};
use crate::state::session::SessionState;
use crate::util::auth::install_login_redirect;
use crate::util::format::{money, quantity};
use crate::util::notify::use_notifier;

const DELETE_PRODUCT: &str = "delete-product";
const RESTOCK_BATCH: u32 = 500;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_login_redirect(session, use_navigate());

    view! {
        <Modal>
            <ProductsView />
        </Modal>
    }
}

#[component]
fn ProductsView() -> impl IntoView {
    let records = expect_context::<RwSignal<Records>>();
    let notifier = use_notifier();
    let search = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let pending_delete = RwSignal::new(None::<Product>);

    let rows = move || {
        let term = search.get();
        let status = status.get();
        records.with(|r| filter_records(&r.products, &term, &status).into_iter().cloned().collect::<Vec<_>>())
    };

    let on_delete = Callback::new(move |()| {
        let Some(p) = pending_delete.get_untracked() else {
            return;
        };
        let mut removed = false;
        records.update(|r| removed = r.remove_product(&p.id));
        if removed {
            leptos::logging::log!("product deleted: {}", p.id);
            notifier.success("Product deleted", format!("{} was removed from the catalog.", p.name));
        }
        pending_delete.set(None);
    });

    view! {
        <div class="page">
            <FilterBar
                search=search
                status=status
                statuses={StockStatus::ALL.iter().copied().map(StockStatus::as_str).collect()}
                placeholder="Search products..."
            />
            <Menus>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Product"</th>
                            <th>"Category"</th>
                            <th class="num">"Price"</th>
                            <th class="num">"Stock"</th>
                            <th>"Availability"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=rows key=|p| (p.id.clone(), p.stock) let:product>
                            <ProductRow product=product pending_delete=pending_delete />
                        </For>
                    </tbody>
                </table>
            </Menus>
            <ModalWindow name=DELETE_PRODUCT title="Delete product">
                <ConfirmDelete
                    resource=move || pending_delete.with(|p| p.as_ref().map(|p| p.name.clone()).unwrap_or_default())
                    on_confirm=on_delete
                />
            </ModalWindow>
        </div>
    }
}

#[component]
fn ProductRow(product: Product, pending_delete: RwSignal<Option<Product>>) -> impl IntoView {
    let records = expect_context::<RwSignal<Records>>();
    let notifier = use_notifier();
    let modal = use_modal();
    let menu_id = format!("product-{}", product.id);

    let id = product.id.clone();
    let name = product.name.clone();
    let unit = product.unit.clone();
    let restock = Callback::new(move |()| {
        let mut level = None;
        records.update(|r| level = r.restock(&id, RESTOCK_BATCH));
        if let Some(level) = level {
            leptos::logging::log!("restocked {id} to {level}");
            notifier.notify(
                NewNotification::success("Stock replenished", format!("{name} now has {}.", quantity(level, &unit)))
                    .priority(Priority::Low)
                    .persistent(),
            );
        }
    });

    let target = product.clone();
    let ask_delete = Callback::new(move |()| {
        pending_delete.set(Some(target.clone()));
        modal.update(|m| m.open(DELETE_PRODUCT));
    });

    view! {
        <tr>
            <td class="mono">{product.id.clone()}</td>
            <td>{product.name.clone()}</td>
            <td>{product.category.clone()}</td>
            <td class="num">{format!("{} / {}", money(product.price_cents), product.unit)}</td>
            <td class="num">
                {quantity(product.stock, &product.unit)}
                <div class="muted">{format!("reorder at {}", product.reorder_level)}</div>
            </td>
            <td>
                <StatusBadge status=product.stock_status().as_str() />
            </td>
            <td class="table__actions">
                <MenuToggle id=menu_id.clone() />
                <MenuList id=menu_id>
                    <MenuButton label={format!("Restock +{RESTOCK_BATCH}")} icon="📦" on_click=restock />
                    <MenuButton label="Delete" icon="🗑" danger=true on_click=ask_delete />
                </MenuList>
            </td>
        </tr>
    }
}
