//! Mock records standing in for a backend.
//!
//! Built on demand; callers that render repeatedly should hold the result in
//! a `StoredValue` rather than rebuilding it per frame.

use super::types::*;

fn at(lat: f64, lng: f64) -> GeoPoint {
    GeoPoint { lat, lng }
}

pub fn clients() -> Vec<Client> {
    let row = |id: &str,
               name: &str,
               kind: ClientKind,
               contact: &str,
               phone: &str,
               email: &str,
               address: &str,
               city: &str,
               location: GeoPoint,
               status: AccountStatus,
               joined: &str| Client {
        id: id.to_owned(),
        name: name.to_owned(),
        kind,
        contact_name: contact.to_owned(),
        phone: phone.to_owned(),
        email: email.to_owned(),
        address: address.to_owned(),
        city: city.to_owned(),
        location,
        status,
        joined_on: joined.to_owned(),
    };
    vec![
        row(
            "C001",
            "Fresh Corner Market",
            ClientKind::Retailer,
            "Amina Benali",
            "+213 555 120 334",
            "amina@freshcorner.example",
            "12 Rue Didouche Mourad",
            "Algiers",
            at(36.7690, 3.0560),
            AccountStatus::Active,
            "2023-02-14",
        ),
        row(
            "C002",
            "Hypermarché El Baraka",
            ClientKind::Supermarket,
            "Karim Haddad",
            "+213 555 448 201",
            "orders@elbaraka.example",
            "Zone Industrielle Lot 7",
            "Blida",
            at(36.4700, 2.8300),
            AccountStatus::Active,
            "2022-11-03",
        ),
        row(
            "C003",
            "Le Petit Bistro",
            ClientKind::Restaurant,
            "Sophie Martin",
            "+213 555 902 117",
            "chef@petitbistro.example",
            "4 Boulevard Zighout Youcef",
            "Algiers",
            at(36.7750, 3.0600),
            AccountStatus::Active,
            "2024-01-22",
        ),
        row(
            "C004",
            "Coop Laitière du Sahel",
            ClientKind::Wholesaler,
            "Yacine Mebarki",
            "+213 555 300 780",
            "achats@coopsahel.example",
            "Route Nationale 11",
            "Tipaza",
            at(36.5890, 2.4470),
            AccountStatus::Suspended,
            "2021-06-30",
        ),
        row(
            "C005",
            "Mini Market Nour",
            ClientKind::Retailer,
            "Nour Saidi",
            "+213 555 671 009",
            "nour@minimarket.example",
            "27 Cité des Oliviers",
            "Boumerdès",
            at(36.7600, 3.4770),
            AccountStatus::Active,
            "2024-05-09",
        ),
        row(
            "C006",
            "Café des Arts",
            ClientKind::Restaurant,
            "Riad Ouali",
            "+213 555 245 556",
            "contact@cafedesarts.example",
            "9 Place des Martyrs",
            "Algiers",
            at(36.7860, 3.0630),
            AccountStatus::Inactive,
            "2023-09-17",
        ),
    ]
}

pub fn distributors() -> Vec<Distributor> {
    let row = |id: &str, name: &str, phone: &str, vehicle: &str, zone: &str, depot: GeoPoint, status, rating| {
        Distributor {
            id: id.to_owned(),
            name: name.to_owned(),
            phone: phone.to_owned(),
            vehicle: vehicle.to_owned(),
            zone: zone.to_owned(),
            depot,
            status,
            rating,
        }
    };
    vec![
        row("D001", "Omar Khelifi", "+213 661 200 145", "Refrigerated van 3.5t", "Algiers Centre", at(36.7370, 3.0860), AccountStatus::Active, 4.8),
        row("D002", "Farid Zerrouki", "+213 661 874 302", "Refrigerated truck 7t", "Blida / Mitidja", at(36.5300, 2.9200), AccountStatus::Active, 4.5),
        row("D003", "Lyes Amrani", "+213 661 550 918", "Insulated van 2t", "Western coast", at(36.6400, 2.6900), AccountStatus::Inactive, 4.1),
        row("D004", "Samir Belkacem", "+213 661 119 633", "Refrigerated van 3.5t", "Eastern suburbs", at(36.7200, 3.2500), AccountStatus::Active, 4.6),
    ]
}

pub fn products() -> Vec<Product> {
    let row = |id: &str, name: &str, category: &str, unit: &str, price_cents, stock, reorder_level| Product {
        id: id.to_owned(),
        name: name.to_owned(),
        category: category.to_owned(),
        unit: unit.to_owned(),
        price_cents,
        stock,
        reorder_level,
    };
    vec![
        row("P001", "Whole Milk 1L", "Milk", "bottle", 120, 1_450, 400),
        row("P002", "Skimmed Milk 1L", "Milk", "bottle", 110, 320, 400),
        row("P003", "Natural Yogurt 125g", "Yogurt", "cup", 45, 2_800, 600),
        row("P004", "Strawberry Yogurt 125g", "Yogurt", "cup", 55, 0, 500),
        row("P005", "Butter 250g", "Butter", "block", 390, 140, 150),
        row("P006", "Camembert 250g", "Cheese", "wheel", 650, 260, 80),
        row("P007", "Fresh Cream 200ml", "Cream", "pot", 210, 520, 200),
        row("P008", "Lben 1L", "Fermented", "bottle", 95, 980, 300),
    ]
}

fn line(product_id: &str, quantity: u32, unit_price_cents: i64) -> OrderLine {
    OrderLine { product_id: product_id.to_owned(), quantity, unit_price_cents }
}

pub fn orders() -> Vec<Order> {
    let row = |id: &str, client: &str, distributor: Option<&str>, placed: &str, due: &str, lines, status| Order {
        id: id.to_owned(),
        client_id: client.to_owned(),
        distributor_id: distributor.map(str::to_owned),
        placed_on: placed.to_owned(),
        delivery_date: due.to_owned(),
        lines,
        status,
    };
    vec![
        row(
            "ORD-1001",
            "C002",
            Some("D002"),
            "2026-10-01",
            "2026-10-03",
            vec![line("P001", 600, 120), line("P003", 1_200, 45), line("P006", 40, 650)],
            OrderStatus::Delivered,
        ),
        row(
            "ORD-1002",
            "C001",
            Some("D001"),
            "2026-10-08",
            "2026-10-09",
            vec![line("P001", 120, 120), line("P005", 30, 390)],
            OrderStatus::Delivered,
        ),
        row(
            "ORD-1003",
            "C003",
            Some("D001"),
            "2026-10-14",
            "2026-10-16",
            vec![line("P007", 60, 210), line("P006", 24, 650), line("P005", 20, 390)],
            OrderStatus::Shipped,
        ),
        row(
            "ORD-1004",
            "C005",
            Some("D004"),
            "2026-10-15",
            "2026-10-17",
            vec![line("P001", 200, 120), line("P008", 150, 95), line("P003", 300, 45)],
            OrderStatus::Shipped,
        ),
        row(
            "ORD-1005",
            "C002",
            None,
            "2026-10-16",
            "2026-10-19",
            vec![line("P002", 500, 110), line("P004", 800, 55)],
            OrderStatus::Pending,
        ),
        row(
            "ORD-1006",
            "C004",
            None,
            "2026-10-11",
            "2026-10-13",
            vec![line("P008", 900, 95)],
            OrderStatus::Cancelled,
        ),
        row(
            "ORD-1007",
            "C001",
            Some("D001"),
            "2026-10-16",
            "2026-10-18",
            vec![line("P003", 240, 45), line("P007", 24, 210)],
            OrderStatus::Confirmed,
        ),
    ]
}

pub fn deliveries() -> Vec<Delivery> {
    let row = |id: &str, order: &str, client: &str, distributor: &str, date: &str, slot: &str, status| Delivery {
        id: id.to_owned(),
        order_id: order.to_owned(),
        client_id: client.to_owned(),
        distributor_id: distributor.to_owned(),
        scheduled_for: date.to_owned(),
        time_slot: slot.to_owned(),
        status,
    };
    vec![
        row("DLV-501", "ORD-1001", "C002", "D002", "2026-10-03", "06:00-09:00", DeliveryStatus::Delivered),
        row("DLV-502", "ORD-1002", "C001", "D001", "2026-10-09", "07:00-10:00", DeliveryStatus::Delivered),
        row("DLV-503", "ORD-1003", "C003", "D001", "2026-10-16", "09:00-12:00", DeliveryStatus::Delayed),
        row("DLV-504", "ORD-1004", "C005", "D004", "2026-10-17", "06:00-09:00", DeliveryStatus::InTransit),
        row("DLV-505", "ORD-1007", "C001", "D001", "2026-10-18", "07:00-10:00", DeliveryStatus::Scheduled),
        row("DLV-506", "ORD-1003", "C003", "D001", "2026-10-17", "09:00-12:00", DeliveryStatus::InTransit),
    ]
}

pub fn invoices() -> Vec<Invoice> {
    let row = |id: &str, order: &str, client: &str, issued: &str, due: &str, amount_cents, status| Invoice {
        id: id.to_owned(),
        order_id: order.to_owned(),
        client_id: client.to_owned(),
        issued_on: issued.to_owned(),
        due_on: due.to_owned(),
        amount_cents,
        status,
    };
    vec![
        row("INV-2001", "ORD-1001", "C002", "2026-10-03", "2026-11-02", 152_000, InvoiceStatus::Paid),
        row("INV-2002", "ORD-1002", "C001", "2026-10-09", "2026-10-16", 26_100, InvoiceStatus::Overdue),
        row("INV-2003", "ORD-1003", "C003", "2026-10-16", "2026-11-15", 36_000, InvoiceStatus::Sent),
        row("INV-2004", "ORD-1004", "C005", "2026-10-17", "2026-11-16", 51_750, InvoiceStatus::Draft),
        row("INV-2005", "ORD-1006", "C004", "2026-10-11", "2026-10-25", 85_500, InvoiceStatus::Cancelled),
    ]
}
