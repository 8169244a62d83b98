//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`notifications`, `menu`, `wizard`, etc.) and
//! kept free of Leptos types so every model is unit-testable with plain
//! values. Components wrap them in `RwSignal`s.

pub mod client_form;
pub mod menu;
pub mod modal;
pub mod notifications;
pub mod order_form;
pub mod session;
pub mod tracking;
pub mod ui;
pub mod wizard;
