//! Domain records, mock fixtures, and queries over them.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no backend. `fixtures` seeds `records::Records`, which `App`
//! provides through context; `query` holds the read-side helpers pages use.

pub mod fixtures;
pub mod query;
pub mod records;
pub mod types;
