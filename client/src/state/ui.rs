//! Local UI chrome state (sidebar, theme, notification drawer).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of record data so layout
//! controls can evolve independently of the fixtures they display.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Sections reachable from the sidebar, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Dashboard,
    Clients,
    Distributors,
    Products,
    Orders,
    Deliveries,
    Invoices,
    Notifications,
}

impl Section {
    pub const ALL: &'static [Self] = &[
        Self::Dashboard,
        Self::Clients,
        Self::Distributors,
        Self::Products,
        Self::Orders,
        Self::Deliveries,
        Self::Invoices,
        Self::Notifications,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Clients => "Clients",
            Self::Distributors => "Distributors",
            Self::Products => "Products",
            Self::Orders => "Orders",
            Self::Deliveries => "Deliveries",
            Self::Invoices => "Invoices",
            Self::Notifications => "Notifications",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Clients => "/clients",
            Self::Distributors => "/distributors",
            Self::Products => "/products",
            Self::Orders => "/orders",
            Self::Deliveries => "/deliveries",
            Self::Invoices => "/invoices",
            Self::Notifications => "/notifications",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Dashboard => "▦",
            Self::Clients => "☺",
            Self::Distributors => "⛟",
            Self::Products => "🥛",
            Self::Orders => "🧾",
            Self::Deliveries => "🚚",
            Self::Invoices => "💳",
            Self::Notifications => "🔔",
        }
    }

    /// Section owning `path`; nested paths (`/orders/new`) resolve to their parent.
    pub fn from_path(path: &str) -> Self {
        let first = path.trim_start_matches('/').split('/').next().unwrap_or_default();
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.href().trim_start_matches('/') == first)
            .unwrap_or_default()
    }
}

/// UI state for layout chrome and theme.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_collapsed: bool,
    pub notification_drawer_open: bool,
}
