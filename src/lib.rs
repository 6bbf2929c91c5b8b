//! # portfolio-client
//!
//! Leptos + WASM browser client for a personal portfolio site. Renders the
//! landing page (account menu, GitHub repository widgets, certificate
//! galleries) and the standalone question page, replacing the hand-written
//! static-script layer with a Rust-native UI.
//!
//! Browser-only behavior (fetches, localStorage, element styling) is gated
//! behind the `csr` feature; without it the crate compiles natively with
//! stub fallbacks so the unit suite runs under plain `cargo test`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
