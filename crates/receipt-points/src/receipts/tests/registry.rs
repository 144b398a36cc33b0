use std::collections::HashSet;
use std::thread;

use super::common::*;
use crate::receipts::domain::ReceiptId;
use crate::receipts::registry::{InMemoryReceiptRegistry, ReceiptRegistry, RegistryError};

#[test]
fn create_then_get_returns_identical_receipt() {
    let registry = InMemoryReceiptRegistry::default();
    let submitted = target_receipt();

    let id = registry.create(submitted.clone()).expect("create succeeds");
    let stored = registry.get(&id).expect("receipt stored");

    assert_eq!(stored, submitted);
}

#[test]
fn create_issues_distinct_identifiers() {
    let registry = InMemoryReceiptRegistry::default();

    let ids: HashSet<ReceiptId> = (0..50)
        .map(|_| registry.create(corner_market_receipt()).expect("create succeeds"))
        .collect();

    assert_eq!(ids.len(), 50);
    assert_eq!(registry.len(), 50);
}

#[test]
fn get_unknown_identifier_is_not_found() {
    let registry = InMemoryReceiptRegistry::default();
    registry.create(target_receipt()).expect("create succeeds");

    let never_issued = ReceiptId("7fb1377b-b223-49d9-a31a-5a02701dd310".to_string());
    assert!(matches!(
        registry.get(&never_issued),
        Err(RegistryError::NotFound)
    ));
    assert!(matches!(
        registry.get(&ReceiptId("not-a-uuid".to_string())),
        Err(RegistryError::NotFound)
    ));
}

#[test]
fn clones_share_storage() {
    let registry = InMemoryReceiptRegistry::default();
    let handle = registry.clone();

    let id = handle.create(target_receipt()).expect("create succeeds");

    assert_eq!(registry.get(&id).expect("visible through clone"), target_receipt());
}

#[test]
fn concurrent_creates_and_reads_are_serialized() {
    let registry = InMemoryReceiptRegistry::default();

    let ids: Vec<ReceiptId> = thread::scope(|scope| {
        let workers: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    (0..25)
                        .map(|_| {
                            let id = registry
                                .create(corner_market_receipt())
                                .expect("create succeeds");
                            registry.get(&id).expect("own write visible");
                            id
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        workers
            .into_iter()
            .flat_map(|worker| worker.join().expect("worker finished"))
            .collect()
    });

    let unique: HashSet<&ReceiptId> = ids.iter().collect();
    assert_eq!(unique.len(), 200);
    assert_eq!(registry.len(), 200);
}
