use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::filter::Predicate;
use crate::models::TransactionRecord;
use crate::storage::{StorageError, TransactionStore};
use crate::types::TransactionId;

/// In-memory transaction store.
///
/// Identifiers are handed out from an increasing counter, so sorting by identifier
/// gives insertion order.
pub struct TransactionStorage {
    cache: Arc<DashMap<TransactionId, TransactionRecord>>,
    next_id: AtomicU32
}

impl TransactionStorage {
    pub fn new() -> Self {
        Self {
            cache: Arc::new(DashMap::new()),
            next_id: AtomicU32::new(1)
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    fn collect_where<F>(&self, keep: F) -> Vec<TransactionRecord>
    where
        F: Fn(&TransactionRecord) -> bool,
    {
        let mut matches: Vec<(TransactionId, TransactionRecord)> = self.cache.iter()
            .filter(|entry| keep(entry.value()))
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();

        matches.sort_by_key(|(id, _)| *id);
        matches.into_iter().map(|(_, record)| record).collect()
    }
}

impl Default for TransactionStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionStore for TransactionStorage {
    fn load_all(&self, owner_scope: &str) -> Result<Vec<TransactionRecord>, StorageError> {
        Ok(self.collect_where(|record| owner_scope.is_empty() || record.owner == owner_scope))
    }

    fn load_filtered(&self, predicate: &Predicate) -> Result<Vec<TransactionRecord>, StorageError> {
        let records = self.collect_where(|record| predicate.matches(record));
        debug!("Predicate [{predicate}] matched {} transactions", records.len());

        Ok(records)
    }

    fn get(&self, id: TransactionId) -> Result<TransactionRecord, StorageError> {
        self.cache.get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(StorageError::NotFound { id })
    }

    fn insert(&self, record: TransactionRecord) -> TransactionId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.cache.insert(id, record);
        id
    }

    fn update(&self, id: TransactionId, record: TransactionRecord) -> Result<bool, StorageError> {
        let mut entry = self.cache.get_mut(&id).ok_or(StorageError::NotFound { id })?;

        if *entry == record {
            return Ok(false)
        }

        *entry = record;

        Ok(true)
    }

    fn delete(&self, id: TransactionId) -> Result<TransactionRecord, StorageError> {
        self.cache.remove(&id)
            .map(|(_, record)| record)
            .ok_or(StorageError::NotFound { id })
    }
}
