use metrics_exporter_prometheus::PrometheusHandle;
use receipt_points::error::AppError;
use receipt_points::receipts::Receipt;
use std::fs;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn load_receipt(path: &Path) -> Result<Receipt, AppError> {
    let raw = fs::read_to_string(path)?;
    let receipt = serde_json::from_str(&raw)?;
    Ok(receipt)
}
