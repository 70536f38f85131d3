use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::errors::RecordError;
use crate::types::Amount;

/// A single recorded transaction.
///
/// Records are built by the input layer (CSV import, the CLI) and are not mutated
/// afterwards. The amount is expected to be a positive expense magnitude; call
/// [`TransactionRecord::validate`] at the input boundary, the filter and aggregation
/// code trust it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Calendar date of the transaction.
    pub date: NaiveDate,
    /// Preset or custom category label, e.g. "Grocery".
    pub category: String,
    /// Amount spent, always greater than zero once validated. Read from its text form so
    /// the scale and every digit survive.
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Amount,
    /// Who was paid.
    pub vendor: String,
    /// The account or person this transaction belongs to.
    pub owner: String
}

impl TransactionRecord {
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        amount: Amount,
        vendor: impl Into<String>,
        owner: impl Into<String>
    ) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
            vendor: vendor.into(),
            owner: owner.into()
        }
    }

    /// Checks the invariants the input layer is responsible for.
    ///
    /// # Errors
    /// Returns `RecordError` if the amount is not strictly positive or the category is blank.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.amount <= Amount::ZERO {
            return Err(RecordError::NonPositiveAmount { amount: self.amount })
        }

        if self.category.trim().is_empty() {
            return Err(RecordError::EmptyCategory)
        }

        Ok(())
    }
}
