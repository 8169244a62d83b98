//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (login guard, filters, pending
//! confirmations) and delegates rendering details to `components`.

pub mod clients;
pub mod dashboard;
pub mod deliveries;
pub mod distributors;
pub mod invoices;
pub mod login;
pub mod new_order;
pub mod notifications;
pub mod orders;
pub mod products;
