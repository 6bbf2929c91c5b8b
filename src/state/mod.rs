//! Shared client state provided through Leptos context signals.
//!
//! DESIGN
//! ======
//! State lives in plain structs wrapped in `RwSignal`s by the root `App`
//! component instead of module-level globals, so each piece can be
//! constructed and exercised in isolation by the unit suite.

pub mod auth;
pub mod colors;
pub mod gallery;
