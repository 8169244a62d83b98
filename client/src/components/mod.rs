//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render layout chrome, tables and forms while reading/writing
//! shared state from Leptos context providers. `menus` and `modal` are
//! compound components that scope their own state to a subtree.

pub mod client_form;
pub mod delivery_map;
pub mod filter_bar;
pub mod header;
pub mod menus;
pub mod modal;
pub mod notification_panel;
pub mod order_wizard;
pub mod sidebar;
pub mod stat_card;
pub mod status_badge;
pub mod toast_stack;
pub mod weather_widget;
