//! Session-lifetime record sets backing every table page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` seeds one `Records` from `fixtures` and provides it as
//! `RwSignal<Records>`. Row actions and forms edit this copy; nothing is
//! written back and a reload restores the fixtures.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use super::fixtures;
use super::types::*;
use crate::state::client_form::ClientDraft;
use crate::state::order_form::OrderDraft;

/// Map pin for clients created before they are geocoded (Algiers centre).
pub const DEFAULT_LOCATION: GeoPoint = GeoPoint { lat: 36.7538, lng: 3.0588 };

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Records {
    pub clients: Vec<Client>,
    pub distributors: Vec<Distributor>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub deliveries: Vec<Delivery>,
    pub invoices: Vec<Invoice>,
}

/// Next id in a `PREFIX` + zero-padded number sequence, e.g. `C006` -> `C007`.
pub fn next_id<'a>(prefix: &str, width: usize, existing: impl IntoIterator<Item = &'a str>) -> String {
    let max = existing
        .into_iter()
        .filter_map(|id| id.strip_prefix(prefix)?.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("{prefix}{:0width$}", max + 1)
}

impl Records {
    pub fn seeded() -> Self {
        Self {
            clients: fixtures::clients(),
            distributors: fixtures::distributors(),
            products: fixtures::products(),
            orders: fixtures::orders(),
            deliveries: fixtures::deliveries(),
            invoices: fixtures::invoices(),
        }
    }

    /// Add a client from a validated draft.
    pub fn add_client(&mut self, draft: &ClientDraft, joined_on: &str) -> Client {
        let client = Client {
            id: next_id("C", 3, self.clients.iter().map(|c| c.id.as_str())),
            name: draft.name.trim().to_owned(),
            kind: ClientKind::parse(&draft.kind).unwrap_or_default(),
            contact_name: draft.contact_name.trim().to_owned(),
            phone: draft.phone.trim().to_owned(),
            email: draft.email.trim().to_owned(),
            address: draft.address.trim().to_owned(),
            city: draft.city.trim().to_owned(),
            location: DEFAULT_LOCATION,
            status: AccountStatus::Active,
            joined_on: joined_on.to_owned(),
        };
        self.clients.insert(0, client.clone());
        client
    }

    pub fn set_client_status(&mut self, id: &str, status: AccountStatus) -> bool {
        match self.clients.iter_mut().find(|c| c.id == id) {
            Some(c) if c.status != status => {
                c.status = status;
                true
            }
            _ => false,
        }
    }

    pub fn remove_client(&mut self, id: &str) -> bool {
        let before = self.clients.len();
        self.clients.retain(|c| c.id != id);
        self.clients.len() != before
    }

    pub fn set_distributor_status(&mut self, id: &str, status: AccountStatus) -> bool {
        match self.distributors.iter_mut().find(|d| d.id == id) {
            Some(d) if d.status != status => {
                d.status = status;
                true
            }
            _ => false,
        }
    }

    pub fn remove_distributor(&mut self, id: &str) -> bool {
        let before = self.distributors.len();
        self.distributors.retain(|d| d.id != id);
        self.distributors.len() != before
    }

    /// Add `quantity` units to a product; returns the new stock level.
    pub fn restock(&mut self, id: &str, quantity: u32) -> Option<u32> {
        let product = self.products.iter_mut().find(|p| p.id == id)?;
        product.stock = product.stock.saturating_add(quantity);
        Some(product.stock)
    }

    pub fn remove_product(&mut self, id: &str) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        self.products.len() != before
    }

    /// Record a validated draft as a new pending order.
    pub fn place_order(&mut self, draft: &OrderDraft, placed_on: &str) -> Order {
        let id = next_id("ORD-", 4, self.orders.iter().map(|o| o.id.as_str()));
        let order = draft.to_order(&id, placed_on, &self.products);
        self.orders.insert(0, order.clone());
        order
    }

    /// Move an order forward. Delivered and cancelled orders are final.
    pub fn set_order_status(&mut self, id: &str, status: OrderStatus) -> bool {
        match self.orders.iter_mut().find(|o| o.id == id) {
            Some(o) if !matches!(o.status, OrderStatus::Delivered | OrderStatus::Cancelled) && o.status != status => {
                o.status = status;
                true
            }
            _ => false,
        }
    }

    pub fn set_delivery_status(&mut self, id: &str, status: DeliveryStatus) -> bool {
        match self.deliveries.iter_mut().find(|d| d.id == id) {
            Some(d) if d.status != status => {
                d.status = status;
                true
            }
            _ => false,
        }
    }

    /// Settle an outstanding invoice. Drafts, paid and cancelled invoices are left alone.
    pub fn mark_invoice_paid(&mut self, id: &str) -> bool {
        match self.invoices.iter_mut().find(|i| i.id == id) {
            Some(i) if matches!(i.status, InvoiceStatus::Sent | InvoiceStatus::Overdue) => {
                i.status = InvoiceStatus::Paid;
                true
            }
            _ => false,
        }
    }

    pub fn remove_invoice(&mut self, id: &str) -> bool {
        let before = self.invoices.len();
        self.invoices.retain(|i| i.id != id);
        self.invoices.len() != before
    }
}
