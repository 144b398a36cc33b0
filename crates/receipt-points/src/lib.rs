//! Receipt intake and loyalty points scoring.
//!
//! The [`receipts`] module holds the domain: the receipt model, the points
//! rules, the registry abstraction, the service facade and its HTTP router.

pub mod config;
pub mod error;
pub mod receipts;
pub mod telemetry;
