use thiserror::Error;

use crate::types::Amount;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum RecordError {
    #[error("Amount must be greater than zero, got [{amount}]")]
    NonPositiveAmount {
        amount: Amount
    },
    #[error("Category must not be empty")]
    EmptyCategory,
    #[error("Unknown transaction field [{value}]")]
    UnknownField {
        value: String
    }
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum CategoryError {
    #[error("Category name must not be empty")]
    EmptyName,
    #[error("Category [{name}] already exists")]
    AlreadyExists {
        name: String
    }
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum OwnerError {
    #[error("Owner name must not be empty")]
    EmptyName,
    #[error("Owner [{name}] already exists")]
    AlreadyExists {
        name: String
    }
}
