use std::sync::Arc;

use tracing::{debug, info, warn};

use super::domain::{Receipt, ReceiptId};
use super::registry::{ReceiptRegistry, RegistryError};
use super::scoring::{score_receipt, PointsBreakdown};
use super::validation::{validate_receipt, ReceiptValidationError};

/// Service composing intake validation, the registry, and the points rules.
pub struct ReceiptPointsService<R> {
    registry: Arc<R>,
}

impl<R> ReceiptPointsService<R>
where
    R: ReceiptRegistry + 'static,
{
    pub fn new(registry: Arc<R>) -> Self {
        Self { registry }
    }

    /// Validate and store a receipt, returning its freshly issued identifier.
    pub fn submit(&self, receipt: Receipt) -> Result<ReceiptId, ReceiptServiceError> {
        if let Err(err) = validate_receipt(&receipt) {
            warn!(error = %err, "receipt rejected at intake");
            return Err(err.into());
        }

        let item_count = receipt.items.len();
        let id = self.registry.create(receipt)?;
        info!(receipt_id = %id, item_count, "receipt stored");
        Ok(id)
    }

    pub fn get(&self, id: &ReceiptId) -> Result<Receipt, ReceiptServiceError> {
        let receipt = self.registry.get(id)?;
        Ok(receipt)
    }

    /// Look up a stored receipt and score it.
    pub fn points(&self, id: &ReceiptId) -> Result<PointsBreakdown, ReceiptServiceError> {
        let receipt = match self.registry.get(id) {
            Ok(receipt) => receipt,
            Err(RegistryError::NotFound) => {
                debug!(receipt_id = %id, "points requested for unknown receipt");
                return Err(RegistryError::NotFound.into());
            }
            Err(err) => return Err(err.into()),
        };

        let breakdown = score_receipt(&receipt);
        debug!(receipt_id = %id, points = breakdown.total, "receipt scored");
        Ok(breakdown)
    }
}

/// Error raised by the receipt service.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error(transparent)]
    Validation(#[from] ReceiptValidationError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
