use super::*;
use crate::state::order_form::LineDraft;

fn valid_client_draft() -> ClientDraft {
    ClientDraft {
        name: "  Dar El Halib  ".to_owned(),
        kind: "restaurant".to_owned(),
        contact_name: "Nadia Bensalem".to_owned(),
        phone: "+213 550 12 34 56".to_owned(),
        email: "contact@darelhalib.dz".to_owned(),
        address: "7 Rue Didouche Mourad".to_owned(),
        city: "Algiers".to_owned(),
    }
}

#[test]
fn next_id_continues_padded_sequence() {
    assert_eq!(next_id("C", 3, ["C001", "C006", "C004"]), "C007");
    assert_eq!(next_id("ORD-", 4, ["ORD-1001", "ORD-1007"]), "ORD-1008");
    assert_eq!(next_id("INV-", 4, []), "INV-0001");
    assert_eq!(next_id("C", 3, ["X900", "Cabc", "C002"]), "C003");
}

#[test]
fn add_client_assigns_next_id_and_trims() {
    let mut records = Records::seeded();
    let client = records.add_client(&valid_client_draft(), "2026-10-17");
    assert_eq!(client.id, "C007");
    assert_eq!(client.name, "Dar El Halib");
    assert_eq!(client.kind, ClientKind::Restaurant);
    assert_eq!(client.status, AccountStatus::Active);
    assert_eq!(client.location, DEFAULT_LOCATION);
    assert_eq!(records.clients[0].id, "C007");
}

#[test]
fn client_status_and_removal() {
    let mut records = Records::seeded();
    assert!(records.set_client_status("C004", AccountStatus::Active));
    assert!(!records.set_client_status("C004", AccountStatus::Active));
    assert!(!records.set_client_status("C999", AccountStatus::Active));

    let before = records.clients.len();
    assert!(records.remove_client("C006"));
    assert!(!records.remove_client("C006"));
    assert_eq!(records.clients.len(), before - 1);
}

#[test]
fn restock_adds_to_stock() {
    let mut records = Records::seeded();
    assert_eq!(records.restock("P004", 500), Some(500));
    assert_eq!(records.restock("P404", 1), None);
}

#[test]
fn place_order_is_pending_with_catalog_prices() {
    let mut records = Records::seeded();
    let mut draft = OrderDraft::new(&records.products, "2026-10-18");
    draft.client_id = "C001".to_owned();
    draft.lines = vec![LineDraft { product_id: "P001".to_owned(), quantity: "10".to_owned() }];
    draft.delivery_date = "2026-10-20".to_owned();
    draft.time_slot = "06:00-09:00".to_owned();
    draft.address = "12 Rue Larbi Ben M'hidi, Algiers".to_owned();
    draft.distributor_id = "D001".to_owned();

    let order = records.place_order(&draft, "2026-10-17");
    assert_eq!(order.id, "ORD-1008");
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total_cents(), 1_200);
    assert_eq!(records.orders[0], order);
}

#[test]
fn final_orders_do_not_change_status() {
    let mut records = Records::seeded();
    assert!(records.set_order_status("ORD-1005", OrderStatus::Confirmed));
    assert!(!records.set_order_status("ORD-1001", OrderStatus::Cancelled));
    assert!(!records.set_order_status("ORD-1006", OrderStatus::Pending));
}

#[test]
fn only_outstanding_invoices_can_be_paid() {
    let mut records = Records::seeded();
    assert!(records.mark_invoice_paid("INV-2002"));
    assert!(records.mark_invoice_paid("INV-2003"));
    assert!(!records.mark_invoice_paid("INV-2001"));
    assert!(!records.mark_invoice_paid("INV-2004"));
    assert!(!records.mark_invoice_paid("INV-2005"));
    assert!(records.remove_invoice("INV-2004"));
}

#[test]
fn delivery_status_updates_once() {
    let mut records = Records::seeded();
    assert!(records.set_delivery_status("DLV-504", DeliveryStatus::Delivered));
    assert!(!records.set_delivery_status("DLV-504", DeliveryStatus::Delivered));
}
