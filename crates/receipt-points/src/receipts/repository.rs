use std::collections::HashMap;
use std::sync::RwLock;

use super::domain::{Receipt, ReceiptId, StoredReceipt};

/// Storage abstraction so the scoring service can be exercised in isolation.
pub trait ReceiptRepository: Send + Sync {
    /// Store a receipt under a freshly generated id.
    fn put(&self, receipt: Receipt) -> Result<StoredReceipt, RepositoryError>;
    fn get(&self, id: &ReceiptId) -> Result<Option<StoredReceipt>, RepositoryError>;
    /// All receipts in the order they were submitted.
    fn list(&self) -> Result<Vec<StoredReceipt>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Append-only in-memory store living for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryReceiptRepository {
    ledger: RwLock<Ledger>,
}

#[derive(Debug, Default)]
struct Ledger {
    receipts: Vec<StoredReceipt>,
    index: HashMap<ReceiptId, usize>,
}

impl InMemoryReceiptRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize, RepositoryError> {
        let ledger = self.ledger.read().map_err(|_| poisoned())?;
        Ok(ledger.receipts.len())
    }

    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }
}

fn poisoned() -> RepositoryError {
    RepositoryError::Unavailable("receipt ledger lock poisoned".to_string())
}

impl ReceiptRepository for InMemoryReceiptRepository {
    fn put(&self, receipt: Receipt) -> Result<StoredReceipt, RepositoryError> {
        let mut ledger = self.ledger.write().map_err(|_| poisoned())?;

        let stored = StoredReceipt {
            id: ReceiptId::generate(),
            receipt,
        };
        let position = ledger.receipts.len();
        ledger.index.insert(stored.id.clone(), position);
        ledger.receipts.push(stored.clone());
        Ok(stored)
    }

    fn get(&self, id: &ReceiptId) -> Result<Option<StoredReceipt>, RepositoryError> {
        let ledger = self.ledger.read().map_err(|_| poisoned())?;
        Ok(ledger
            .index
            .get(id)
            .and_then(|&position| ledger.receipts.get(position))
            .cloned())
    }

    fn list(&self) -> Result<Vec<StoredReceipt>, RepositoryError> {
        let ledger = self.ledger.read().map_err(|_| poisoned())?;
        Ok(ledger.receipts.clone())
    }
}
