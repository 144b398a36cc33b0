//! Receipt intake, storage and loyalty points scoring.
//!
//! Receipts are validated at intake, stored write-once in a
//! [`ReceiptRegistry`], and scored on demand by the pure rules in
//! [`scoring`].

pub mod domain;
pub mod registry;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{LineItem, Receipt, ReceiptId};
pub use registry::{InMemoryReceiptRegistry, ReceiptRegistry, RegistryError};
pub use router::{receipt_router, PointsResponse, ProcessReceiptResponse};
pub use scoring::{compute_points, score_receipt, PointsBreakdown, PointsComponent, PointsRule};
pub use service::{ReceiptPointsService, ReceiptServiceError};
pub use validation::{validate_receipt, ReceiptValidationError};
