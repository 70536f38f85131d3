use thiserror::Error;

use crate::types::TransactionId;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum StorageError {
    #[error("Transaction [{id}] was not found")]
    NotFound {
        id: TransactionId
    }
}
