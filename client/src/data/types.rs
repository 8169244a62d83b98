//! Domain record types for the distribution back office.
//!
//! Amounts are stored in minor units (`cents`) to keep aggregation exact.
//! Dates are ISO `YYYY-MM-DD` strings, which sort lexicographically.

use crate::util::status::{StatusDisplay, status_display};

macro_rules! status_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $key:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $key),+
                }
            }

            pub fn display(self) -> StatusDisplay {
                status_display(self.as_str())
            }
        }
    };
}

status_enum!(
    /// Account standing shared by clients and distributors.
    AccountStatus {
        Active => "active",
        Inactive => "inactive",
        Suspended => "suspended",
    }
);

status_enum!(OrderStatus {
    Pending => "pending",
    Confirmed => "confirmed",
    Processing => "processing",
    Shipped => "shipped",
    Delivered => "delivered",
    Cancelled => "cancelled",
});

status_enum!(DeliveryStatus {
    Scheduled => "scheduled",
    InTransit => "in_transit",
    Delivered => "delivered",
    Delayed => "delayed",
    Failed => "failed",
});

status_enum!(InvoiceStatus {
    Draft => "draft",
    Sent => "sent",
    Paid => "paid",
    Overdue => "overdue",
    Cancelled => "cancelled",
});

status_enum!(
    /// Derived from on-hand quantity versus reorder level.
    StockStatus {
        InStock => "in_stock",
        LowStock => "low_stock",
        OutOfStock => "out_of_stock",
    }
);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientKind {
    #[default]
    Retailer,
    Supermarket,
    Restaurant,
    Wholesaler,
}

impl ClientKind {
    pub const ALL: &'static [Self] = &[Self::Retailer, Self::Supermarket, Self::Restaurant, Self::Wholesaler];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Retailer => "retailer",
            Self::Supermarket => "supermarket",
            Self::Restaurant => "restaurant",
            Self::Wholesaler => "wholesaler",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Retailer => "Retailer",
            Self::Supermarket => "Supermarket",
            Self::Restaurant => "Restaurant",
            Self::Wholesaler => "Wholesaler",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == raw)
    }
}

/// WGS84 coordinate.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub kind: ClientKind,
    pub contact_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub location: GeoPoint,
    pub status: AccountStatus,
    pub joined_on: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Distributor {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub vehicle: String,
    pub zone: String,
    pub depot: GeoPoint,
    pub status: AccountStatus,
    pub rating: f32,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub unit: String,
    pub price_cents: i64,
    pub stock: u32,
    pub reorder_level: u32,
}

impl Product {
    pub fn stock_status(&self) -> StockStatus {
        if self.stock == 0 {
            StockStatus::OutOfStock
        } else if self.stock <= self.reorder_level {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OrderLine {
    pub product_id: String,
    pub quantity: u32,
    pub unit_price_cents: i64,
}

impl OrderLine {
    pub fn total_cents(&self) -> i64 {
        i64::from(self.quantity) * self.unit_price_cents
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Order {
    pub id: String,
    pub client_id: String,
    pub distributor_id: Option<String>,
    pub placed_on: String,
    pub delivery_date: String,
    pub lines: Vec<OrderLine>,
    pub status: OrderStatus,
}

impl Order {
    pub fn total_cents(&self) -> i64 {
        self.lines.iter().map(OrderLine::total_cents).sum()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Delivery {
    pub id: String,
    pub order_id: String,
    pub client_id: String,
    pub distributor_id: String,
    pub scheduled_for: String,
    pub time_slot: String,
    pub status: DeliveryStatus,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Invoice {
    pub id: String,
    pub order_id: String,
    pub client_id: String,
    pub issued_on: String,
    pub due_on: String,
    pub amount_cents: i64,
    pub status: InvoiceStatus,
}
