//! Draft model for the new-order wizard.
//!
//! Quantities stay as raw strings while editing so half-typed input is not
//! lost; they are parsed during validation and on submit.

#[cfg(test)]
#[path = "order_form_test.rs"]
mod order_form_test;

use crate::data::query::find_product;
use crate::data::types::{Order, OrderLine, OrderStatus, Product};
use crate::state::wizard::StepForm;
use crate::util::clock::parse_iso_date;
use crate::util::validate::{positive_quantity, required};

pub const STEP_CLIENT: usize = 0;
pub const STEP_PRODUCTS: usize = 1;
pub const STEP_DELIVERY: usize = 2;
pub const STEP_REVIEW: usize = 3;

/// Delivery windows offered by the depot.
pub const TIME_SLOTS: &[&str] = &["06:00-09:00", "07:00-10:00", "09:00-12:00", "14:00-17:00"];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineDraft {
    pub product_id: String,
    pub quantity: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderDraft {
    pub client_id: String,
    pub lines: Vec<LineDraft>,
    pub delivery_date: String,
    pub time_slot: String,
    pub address: String,
    pub distributor_id: String,
    pub notes: String,
    /// Earliest acceptable delivery date (`YYYY-MM-DD`).
    pub min_delivery_date: String,
    /// Catalog ids the draft may reference.
    pub known_products: Vec<String>,
}

impl OrderDraft {
    pub fn new(products: &[Product], min_delivery_date: &str) -> Self {
        Self {
            client_id: String::new(),
            lines: vec![LineDraft::default()],
            delivery_date: String::new(),
            time_slot: String::new(),
            address: String::new(),
            distributor_id: String::new(),
            notes: String::new(),
            min_delivery_date: min_delivery_date.to_owned(),
            known_products: products.iter().map(|p| p.id.clone()).collect(),
        }
    }

    pub fn add_line(&mut self) {
        self.lines.push(LineDraft::default());
    }

    /// Remove a line, always leaving at least one editable row.
    pub fn remove_line(&mut self, index: usize) {
        if index < self.lines.len() {
            self.lines.remove(index);
        }
        if self.lines.is_empty() {
            self.lines.push(LineDraft::default());
        }
    }

    fn validate_lines(&self) -> Vec<String> {
        let filled = self
            .lines
            .iter()
            .enumerate()
            .filter(|(_, l)| !l.product_id.trim().is_empty() || !l.quantity.trim().is_empty())
            .collect::<Vec<_>>();
        if filled.is_empty() {
            return vec!["Add at least one product.".to_owned()];
        }
        let mut errors = Vec::new();
        for (i, line) in filled {
            let label = format!("Line {}", i + 1);
            if line.product_id.trim().is_empty() {
                errors.push(format!("{label}: choose a product."));
            } else if !self.known_products.iter().any(|id| id == line.product_id.trim()) {
                errors.push(format!("{label}: unknown product {}.", line.product_id.trim()));
            }
            if let Err(e) = positive_quantity(&line.quantity, &format!("{label}: quantity")) {
                errors.push(e);
            }
        }
        errors
    }

    fn validate_delivery_date(&self) -> Option<String> {
        if self.delivery_date.trim().is_empty() {
            return required(&self.delivery_date, "Delivery date");
        }
        let Some(date) = parse_iso_date(&self.delivery_date) else {
            return Some("Delivery date must be a valid date (YYYY-MM-DD).".to_owned());
        };
        match parse_iso_date(&self.min_delivery_date) {
            Some(min) if date < min => Some(format!("Delivery date cannot be before {min}.")),
            _ => None,
        }
    }

    /// Build the order this draft describes. Assumes every step validated.
    pub fn to_order(&self, id: &str, placed_on: &str, catalog: &[Product]) -> Order {
        let lines = self
            .lines
            .iter()
            .filter_map(|l| {
                let product = find_product(catalog, l.product_id.trim())?;
                let quantity = l.quantity.trim().parse::<u32>().ok()?;
                Some(OrderLine { product_id: product.id.clone(), quantity, unit_price_cents: product.price_cents })
            })
            .collect();
        Order {
            id: id.to_owned(),
            client_id: self.client_id.clone(),
            distributor_id: Some(self.distributor_id.clone()).filter(|d| !d.is_empty()),
            placed_on: placed_on.to_owned(),
            delivery_date: self.delivery_date.clone(),
            lines,
            status: OrderStatus::Pending,
        }
    }
}

impl StepForm for OrderDraft {
    const STEP_TITLES: &'static [&'static str] = &["Client", "Products", "Delivery", "Review"];

    fn validate_step(&self, step: usize) -> Vec<String> {
        match step {
            STEP_CLIENT => required(&self.client_id, "Client").into_iter().collect(),
            STEP_PRODUCTS => self.validate_lines(),
            STEP_DELIVERY => [
                self.validate_delivery_date(),
                required(&self.time_slot, "Time slot"),
                required(&self.address, "Delivery address"),
                required(&self.distributor_id, "Distributor"),
            ]
            .into_iter()
            .flatten()
            .collect(),
            _ => Vec::new(),
        }
    }
}
