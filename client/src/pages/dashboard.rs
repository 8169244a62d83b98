//! Dashboard: headline numbers, recent orders, stock alerts, top clients and
//! weather.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::stat_card::StatCard;
use crate::components::status_badge::StatusBadge;
use crate::components::weather_widget::WeatherWidget;
use crate::data::query::{DashboardSummary, client_name, low_stock, recent_orders, top_clients_by_revenue};
use crate::data::records::Records;
use crate::state::session::SessionState;
use crate::util::auth::install_login_redirect;
use crate::util::format::{money, quantity};

const RECENT_ORDERS: usize = 5;
const TOP_CLIENTS: usize = 5;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_login_redirect(session, use_navigate());

    let records = expect_context::<RwSignal<Records>>();
    let summary = Memo::new(move |_| {
        records.with(|r| {
            DashboardSummary::compute(&r.clients, &r.distributors, &r.orders, &r.deliveries, &r.invoices, &r.products)
        })
    });
    let greeting = move || {
        session.with(|s| {
            s.user
                .as_ref()
                .map(|u| format!("Welcome back, {}", u.name.split_whitespace().next().unwrap_or(&u.name)))
                .unwrap_or_default()
        })
    };

    let recent = move || {
        records.with(|r| {
            recent_orders(&r.orders, RECENT_ORDERS)
                .into_iter()
                .map(|o| {
                    view! {
                        <tr>
                            <td class="mono">{o.id.clone()}</td>
                            <td>{client_name(&r.clients, &o.client_id)}</td>
                            <td>{o.placed_on.clone()}</td>
                            <td class="num">{money(o.total_cents())}</td>
                            <td>
                                <StatusBadge status=o.status.as_str() />
                            </td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    let stock_alerts = move || {
        records.with(|r| {
            low_stock(&r.products)
                .into_iter()
                .map(|p| {
                    view! {
                        <li class="list__item">
                            <span>{p.name.clone()}</span>
                            <span class="muted">{quantity(p.stock, &p.unit)}</span>
                            <StatusBadge status=p.stock_status().as_str() />
                        </li>
                    }
                })
                .collect_view()
        })
    };

    let top_clients = move || {
        records.with(|r| {
            top_clients_by_revenue(&r.orders, TOP_CLIENTS)
                .into_iter()
                .enumerate()
                .map(|(rank, (id, total))| {
                    view! {
                        <li class="list__item">
                            <span class="list__rank">{rank + 1}</span>
                            <span>{client_name(&r.clients, &id)}</span>
                            <span class="num">{money(total)}</span>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="page dashboard">
            <p class="dashboard__greeting">{greeting}</p>
            <div class="stat-grid">
                {move || {
                    let s = summary.get();
                    view! {
                        <StatCard label="Active clients" value={s.active_clients.to_string()} icon="🏪" href="/clients" />
                        <StatCard
                            label="Active distributors"
                            value={s.active_distributors.to_string()}
                            icon="🚚"
                            href="/distributors"
                        />
                        <StatCard label="Open orders" value={s.pending_orders.to_string()} icon="🧾" href="/orders" />
                        <StatCard
                            label="In transit"
                            value={s.deliveries_in_transit.to_string()}
                            icon="📍"
                            href="/deliveries"
                        />
                        <StatCard label="Revenue collected" value={money(s.revenue_paid_cents)} icon="💰" href="/invoices" />
                        <StatCard
                            label="Outstanding"
                            value={money(s.outstanding_cents)}
                            icon="⏳"
                            href="/invoices"
                            alert={s.overdue_invoices > 0}
                        />
                        <StatCard
                            label="Low stock"
                            value={s.low_stock_products.to_string()}
                            icon="📦"
                            href="/products"
                            alert={s.low_stock_products > 0}
                        />
                    }
                }}
            </div>
            <div class="dashboard__grid">
                <section class="card">
                    <h2 class="card__title">"Recent orders"</h2>
                    <table class="table table--compact">
                        <tbody>{recent}</tbody>
                    </table>
                    <a class="card__link" href="/orders">"All orders →"</a>
                </section>
                <section class="card">
                    <h2 class="card__title">"Stock alerts"</h2>
                    <ul class="list">{stock_alerts}</ul>
                </section>
                <section class="card">
                    <h2 class="card__title">"Top clients"</h2>
                    <ol class="list">{top_clients}</ol>
                </section>
                <WeatherWidget />
            </div>
        </div>
    }
}
