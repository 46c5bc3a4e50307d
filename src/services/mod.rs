//! API services.
//!
//! These contain the core business logic.
//!
//! Every service directly maps to a set of HTTP routes, so each one has an
//! `http` module containing the handlers and an `Into<axum::Router>`
//! implementation.

pub mod health;
pub use health::HealthService;

pub mod voters;
pub use voters::VoterService;
