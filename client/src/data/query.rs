//! Search, filter, and aggregation over the in-memory record sets.
//!
//! Every table page funnels through `filter_records` so search semantics stay
//! identical: case-insensitive substring over a record's searchable text,
//! optionally narrowed by its status key.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::collections::HashMap;

use super::types::*;

/// A record that can be searched and filtered by status in a table view.
pub trait Searchable {
    /// Text matched against the search box.
    fn search_text(&self) -> String;
    /// Raw status key (same key space as `util::status`).
    fn status_key(&self) -> &'static str;
}

impl Searchable for Client {
    fn search_text(&self) -> String {
        format!("{} {} {} {} {} {}", self.id, self.name, self.contact_name, self.email, self.phone, self.city)
    }

    fn status_key(&self) -> &'static str {
        self.status.as_str()
    }
}

impl Searchable for Distributor {
    fn search_text(&self) -> String {
        format!("{} {} {} {} {}", self.id, self.name, self.phone, self.vehicle, self.zone)
    }

    fn status_key(&self) -> &'static str {
        self.status.as_str()
    }
}

impl Searchable for Product {
    fn search_text(&self) -> String {
        format!("{} {} {}", self.id, self.name, self.category)
    }

    fn status_key(&self) -> &'static str {
        self.stock_status().as_str()
    }
}

impl Searchable for Order {
    fn search_text(&self) -> String {
        format!("{} {} {}", self.id, self.client_id, self.distributor_id.as_deref().unwrap_or_default())
    }

    fn status_key(&self) -> &'static str {
        self.status.as_str()
    }
}

impl Searchable for Delivery {
    fn search_text(&self) -> String {
        format!("{} {} {} {}", self.id, self.order_id, self.client_id, self.distributor_id)
    }

    fn status_key(&self) -> &'static str {
        self.status.as_str()
    }
}

impl Searchable for Invoice {
    fn search_text(&self) -> String {
        format!("{} {} {}", self.id, self.order_id, self.client_id)
    }

    fn status_key(&self) -> &'static str {
        self.status.as_str()
    }
}

/// Case-insensitive substring match; a blank term matches everything.
pub fn matches_search(haystack: &str, term: &str) -> bool {
    let term = term.trim();
    term.is_empty() || haystack.to_lowercase().contains(&term.to_lowercase())
}

/// Filter `items` by search term and optional status key (`""` means any).
pub fn filter_records<'a, T: Searchable>(items: &'a [T], term: &str, status: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| status.is_empty() || item.status_key() == status)
        .filter(|item| matches_search(&item.search_text(), term))
        .collect()
}

/// Headline numbers for the dashboard cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub active_clients: usize,
    pub active_distributors: usize,
    pub pending_orders: usize,
    pub deliveries_in_transit: usize,
    pub revenue_paid_cents: i64,
    pub outstanding_cents: i64,
    pub overdue_invoices: usize,
    pub low_stock_products: usize,
}

impl DashboardSummary {
    pub fn compute(
        clients: &[Client],
        distributors: &[Distributor],
        orders: &[Order],
        deliveries: &[Delivery],
        invoices: &[Invoice],
        products: &[Product],
    ) -> Self {
        Self {
            active_clients: clients.iter().filter(|c| c.status == AccountStatus::Active).count(),
            active_distributors: distributors.iter().filter(|d| d.status == AccountStatus::Active).count(),
            pending_orders: orders
                .iter()
                .filter(|o| matches!(o.status, OrderStatus::Pending | OrderStatus::Confirmed | OrderStatus::Processing))
                .count(),
            deliveries_in_transit: deliveries.iter().filter(|d| d.status == DeliveryStatus::InTransit).count(),
            revenue_paid_cents: invoices
                .iter()
                .filter(|i| i.status == InvoiceStatus::Paid)
                .map(|i| i.amount_cents)
                .sum(),
            outstanding_cents: invoices
                .iter()
                .filter(|i| matches!(i.status, InvoiceStatus::Sent | InvoiceStatus::Overdue))
                .map(|i| i.amount_cents)
                .sum(),
            overdue_invoices: invoices.iter().filter(|i| i.status == InvoiceStatus::Overdue).count(),
            low_stock_products: low_stock(products).len(),
        }
    }
}

/// Products at or under their reorder level, emptiest first.
pub fn low_stock(products: &[Product]) -> Vec<&Product> {
    let mut out = products
        .iter()
        .filter(|p| p.stock_status() != StockStatus::InStock)
        .collect::<Vec<_>>();
    out.sort_by_key(|p| p.stock);
    out
}

/// Sum of non-cancelled order value per client, highest first, truncated to `limit`.
pub fn top_clients_by_revenue(orders: &[Order], limit: usize) -> Vec<(String, i64)> {
    let mut totals = HashMap::<&str, i64>::new();
    for order in orders.iter().filter(|o| o.status != OrderStatus::Cancelled) {
        *totals.entry(order.client_id.as_str()).or_default() += order.total_cents();
    }
    let mut ranked = totals
        .into_iter()
        .map(|(id, total)| (id.to_owned(), total))
        .collect::<Vec<_>>();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}

/// Most recently placed orders first.
pub fn recent_orders(orders: &[Order], limit: usize) -> Vec<&Order> {
    let mut out = orders.iter().collect::<Vec<_>>();
    out.sort_by(|a, b| b.placed_on.cmp(&a.placed_on).then_with(|| b.id.cmp(&a.id)));
    out.truncate(limit);
    out
}

/// Display name for a client id, or the id itself when unknown.
pub fn client_name(clients: &[Client], id: &str) -> String {
    clients
        .iter()
        .find(|c| c.id == id)
        .map_or_else(|| id.to_owned(), |c| c.name.clone())
}

/// Display name for a distributor id; `"Unassigned"` for `None`.
pub fn distributor_name(distributors: &[Distributor], id: Option<&str>) -> String {
    let Some(id) = id else {
        return "Unassigned".to_owned();
    };
    distributors
        .iter()
        .find(|d| d.id == id)
        .map_or_else(|| id.to_owned(), |d| d.name.clone())
}

pub fn find_product<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.id == id)
}
