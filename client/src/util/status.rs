//! Status value → badge label, tone, and icon.
//!
//! One table serves every record type. Lookup normalizes case and `-`/space
//! separators so `"In Transit"`, `"in-transit"` and `"in_transit"` agree.
//! Anything unrecognized renders as `StatusDisplay::UNKNOWN`.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// Color family of a badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Info,
    Neutral,
    Muted,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "badge badge--success",
            Self::Warning => "badge badge--warning",
            Self::Danger => "badge badge--danger",
            Self::Info => "badge badge--info",
            Self::Neutral => "badge badge--neutral",
            Self::Muted => "badge badge--muted",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusDisplay {
    pub label: &'static str,
    pub tone: Tone,
    pub icon: &'static str,
}

impl StatusDisplay {
    pub const UNKNOWN: Self = Self { label: "Unknown", tone: Tone::Neutral, icon: "•" };

    const fn new(label: &'static str, tone: Tone, icon: &'static str) -> Self {
        Self { label, tone, icon }
    }
}

const TABLE: &[(&str, StatusDisplay)] = &[
    // accounts
    ("active", StatusDisplay::new("Active", Tone::Success, "●")),
    ("inactive", StatusDisplay::new("Inactive", Tone::Muted, "○")),
    ("suspended", StatusDisplay::new("Suspended", Tone::Danger, "⊘")),
    // orders
    ("pending", StatusDisplay::new("Pending", Tone::Warning, "⏳")),
    ("confirmed", StatusDisplay::new("Confirmed", Tone::Info, "✔")),
    ("processing", StatusDisplay::new("Processing", Tone::Info, "⚙")),
    ("shipped", StatusDisplay::new("Shipped", Tone::Info, "📦")),
    ("delivered", StatusDisplay::new("Delivered", Tone::Success, "✓")),
    ("cancelled", StatusDisplay::new("Cancelled", Tone::Muted, "✕")),
    // deliveries
    ("scheduled", StatusDisplay::new("Scheduled", Tone::Neutral, "📅")),
    ("in_transit", StatusDisplay::new("In Transit", Tone::Info, "🚚")),
    ("delayed", StatusDisplay::new("Delayed", Tone::Warning, "⚠")),
    ("failed", StatusDisplay::new("Failed", Tone::Danger, "✕")),
    // invoices
    ("draft", StatusDisplay::new("Draft", Tone::Muted, "✎")),
    ("sent", StatusDisplay::new("Sent", Tone::Info, "✉")),
    ("paid", StatusDisplay::new("Paid", Tone::Success, "✓")),
    ("overdue", StatusDisplay::new("Overdue", Tone::Danger, "!")),
    // stock
    ("in_stock", StatusDisplay::new("In Stock", Tone::Success, "●")),
    ("low_stock", StatusDisplay::new("Low Stock", Tone::Warning, "▼")),
    ("out_of_stock", StatusDisplay::new("Out of Stock", Tone::Danger, "✕")),
];

fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c.to_ascii_lowercase() })
        .collect()
}

/// Look up the badge for a raw status value, falling back to `UNKNOWN`.
pub fn status_display(raw: &str) -> StatusDisplay {
    let key = normalize(raw);
    TABLE
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(StatusDisplay::UNKNOWN, |(_, display)| *display)
}
