//! Outbound HTTP integrations.
//!
//! SYSTEM CONTEXT
//! ==============
//! `weather` is the only remote call the dashboard makes; everything else is
//! served from in-memory records.

pub mod weather;
