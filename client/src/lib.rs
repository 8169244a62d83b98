//! # dairy-ui
//!
//! Leptos + WASM admin dashboard for a dairy distribution business: clients,
//! distributors, products, orders, deliveries and invoices, with an in-app
//! notification center.
//!
//! The crate builds twice: with `hydrate` for the browser bundle and with
//! `ssr` for the `dairy-server` binary that renders the first paint.

pub mod app;
pub mod components;
pub mod data;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
