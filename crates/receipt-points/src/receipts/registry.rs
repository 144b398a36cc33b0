use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::domain::{Receipt, ReceiptId};

/// Storage abstraction so the service can be exercised without process-wide state.
///
/// Entries are write-once: there is no update or delete.
pub trait ReceiptRegistry: Send + Sync {
    fn create(&self, receipt: Receipt) -> Result<ReceiptId, RegistryError>;
    fn get(&self, id: &ReceiptId) -> Result<Receipt, RegistryError>;
}

/// Error enumeration for registry failures.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("receipt not found")]
    NotFound,
    #[error("registry unavailable: {0}")]
    Unavailable(String),
}

/// Process-local registry; clones share the same map.
#[derive(Debug, Default, Clone)]
pub struct InMemoryReceiptRegistry {
    receipts: Arc<Mutex<HashMap<ReceiptId, Receipt>>>,
}

impl InMemoryReceiptRegistry {
    /// Number of stored receipts. A poisoned registry reports 0; `create` and
    /// `get` surface the same condition as [`RegistryError::Unavailable`].
    pub fn len(&self) -> usize {
        self.receipts.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReceiptRegistry for InMemoryReceiptRegistry {
    fn create(&self, receipt: Receipt) -> Result<ReceiptId, RegistryError> {
        let mut guard = self
            .receipts
            .lock()
            .map_err(|_| RegistryError::Unavailable("registry mutex poisoned".to_string()))?;

        let mut id = ReceiptId::generate();
        while guard.contains_key(&id) {
            id = ReceiptId::generate();
        }
        guard.insert(id.clone(), receipt);
        Ok(id)
    }

    fn get(&self, id: &ReceiptId) -> Result<Receipt, RegistryError> {
        let guard = self
            .receipts
            .lock()
            .map_err(|_| RegistryError::Unavailable("registry mutex poisoned".to_string()))?;
        guard.get(id).cloned().ok_or(RegistryError::NotFound)
    }
}
