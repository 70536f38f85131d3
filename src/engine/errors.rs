use thiserror::Error;

use crate::models::RecordError;

/// Why a CSV row was left out of an import. `line` is the row's line in the file,
/// counting the header as line 1.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ImportError {
    #[error("Unreadable row: {reason}")]
    MalformedRow {
        line: u64,
        reason: String
    },
    #[error("Invalid transaction: {source}")]
    InvalidRecord {
        line: u64,
        source: RecordError
    }
}

impl ImportError {
    pub fn line(&self) -> u64 {
        match self {
            ImportError::MalformedRow { line, .. } | ImportError::InvalidRecord { line, .. } => *line
        }
    }
}
