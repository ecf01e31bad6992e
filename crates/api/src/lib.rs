//! HTTP surface of the conference service.
//!
//! [`router::build_app_router`] assembles the full application; the binary
//! in `main.rs` only picks a store and serves it.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod projections;
pub mod query;
pub mod resolve;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
