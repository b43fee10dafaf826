//! Sign-in reconciliation core.
//!
//! Exchanges an identity-provider credential for a backend session, works
//! out whether the identity is a new or an existing account, and publishes
//! exactly one outcome per run to subscribers.

pub mod adapters;
pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
