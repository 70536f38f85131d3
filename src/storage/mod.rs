mod errors;
mod settings_storage;
mod transaction_storage;

use crate::filter::Predicate;
use crate::models::TransactionRecord;
use crate::types::TransactionId;

pub use errors::StorageError;
pub use settings_storage::SettingsStorage;
pub use transaction_storage::TransactionStorage;

/// Persistent transaction storage, scoped by owner.
///
/// Every load returns records in insertion order.
pub trait TransactionStore: Send + Sync + 'static {
    /// Loads every record belonging to `owner_scope`, or every record when it is empty.
    fn load_all(&self, owner_scope: &str) -> Result<Vec<TransactionRecord>, StorageError>;
    /// Loads the records matching a compiled filter predicate.
    fn load_filtered(&self, predicate: &Predicate) -> Result<Vec<TransactionRecord>, StorageError>;
    fn get(&self, id: TransactionId) -> Result<TransactionRecord, StorageError>;
    fn insert(&self, record: TransactionRecord) -> TransactionId;
    /// Replaces the stored record, returning whether any field actually changed.
    fn update(&self, id: TransactionId, record: TransactionRecord) -> Result<bool, StorageError>;
    fn delete(&self, id: TransactionId) -> Result<TransactionRecord, StorageError>;
}

/// Simple list-backed key/value settings (owners, custom categories).
pub trait SettingsStore: Send + Sync + 'static {
    /// Returns the list saved under `key`, or an empty list if nothing was saved.
    fn load(&self, key: &str) -> Vec<String>;
    fn save(&self, key: &str, values: Vec<String>);
}
