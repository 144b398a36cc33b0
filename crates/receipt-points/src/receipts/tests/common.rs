use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::receipts::domain::{LineItem, Receipt, ReceiptId};
use crate::receipts::registry::{InMemoryReceiptRegistry, ReceiptRegistry, RegistryError};
use crate::receipts::{receipt_router, ReceiptPointsService};

pub(super) fn receipt(
    retailer: &str,
    purchase_date: &str,
    purchase_time: &str,
    total: &str,
    items: &[(&str, &str)],
) -> Receipt {
    Receipt {
        retailer: retailer.to_string(),
        purchase_date: purchase_date.to_string(),
        purchase_time: purchase_time.to_string(),
        total: total.to_string(),
        items: items
            .iter()
            .map(|(description, price)| LineItem {
                short_description: description.to_string(),
                price: price.to_string(),
            })
            .collect(),
    }
}

pub(super) fn target_receipt() -> Receipt {
    receipt(
        "Target",
        "2022-01-01",
        "13:01",
        "35.35",
        &[
            ("Mountain Dew 12PK", "6.49"),
            ("Emils Cheese Pizza", "12.25"),
            ("Knorr Creamy Chicken", "1.26"),
            ("Doritos Nacho Cheese", "3.35"),
            ("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
    )
}

pub(super) fn corner_market_receipt() -> Receipt {
    receipt(
        "M&M Corner Market",
        "2022-03-20",
        "14:33",
        "9.00",
        &[
            ("Gatorade", "2.25"),
            ("Gatorade", "2.25"),
            ("Gatorade", "2.25"),
            ("Gatorade", "2.25"),
        ],
    )
}

/// Receipt that earns nothing from any rule except the ones a test switches on.
pub(super) fn blank_receipt() -> Receipt {
    receipt("", "2022-01-02", "10:00", "0.01", &[])
}

pub(super) fn build_service() -> (
    ReceiptPointsService<InMemoryReceiptRegistry>,
    Arc<InMemoryReceiptRegistry>,
) {
    let registry = Arc::new(InMemoryReceiptRegistry::default());
    let service = ReceiptPointsService::new(registry.clone());
    (service, registry)
}

pub(super) fn router_with_service(
    service: ReceiptPointsService<InMemoryReceiptRegistry>,
) -> axum::Router {
    receipt_router(Arc::new(service))
}

pub(super) struct UnavailableRegistry;

impl ReceiptRegistry for UnavailableRegistry {
    fn create(&self, _receipt: Receipt) -> Result<ReceiptId, RegistryError> {
        Err(RegistryError::Unavailable("storage offline".to_string()))
    }

    fn get(&self, _id: &ReceiptId) -> Result<Receipt, RegistryError> {
        Err(RegistryError::Unavailable("storage offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
