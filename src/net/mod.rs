//! Networking modules for the account backend and GitHub data sources.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` talks to the first-party account endpoints, `github` fetches public
//! repository metadata and the language color definitions, and `types`
//! defines the wire DTOs both sides share.

pub mod api;
pub mod github;
pub mod types;
