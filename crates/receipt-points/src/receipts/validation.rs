use super::domain::{parse_purchase_date, parse_purchase_time, Receipt};

/// Reasons a submission is rejected before it reaches the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReceiptValidationError {
    #[error("invalid purchaseDate '{0}': expected YYYY-MM-DD")]
    InvalidPurchaseDate(String),
    #[error("invalid purchaseTime '{0}': expected 24-hour HH:MM")]
    InvalidPurchaseTime(String),
}

/// Checks the fields that must parse at intake. Amounts are left to scoring.
pub fn validate_receipt(receipt: &Receipt) -> Result<(), ReceiptValidationError> {
    if parse_purchase_date(&receipt.purchase_date).is_none() {
        return Err(ReceiptValidationError::InvalidPurchaseDate(
            receipt.purchase_date.clone(),
        ));
    }
    if parse_purchase_time(&receipt.purchase_time).is_none() {
        return Err(ReceiptValidationError::InvalidPurchaseTime(
            receipt.purchase_time.clone(),
        ));
    }
    Ok(())
}
