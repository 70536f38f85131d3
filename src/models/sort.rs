use std::cmp::Ordering;

use crate::models::{RecordField, TransactionRecord};

/// Column sort applied to a list of records, as chosen from a table header.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SortOrder {
    pub column: RecordField,
    pub ascending: bool
}

impl SortOrder {
    pub fn new(column: RecordField, ascending: bool) -> Self {
        Self { column, ascending }
    }

    pub fn ascending(column: RecordField) -> Self {
        Self::new(column, true)
    }

    pub fn descending(column: RecordField) -> Self {
        Self::new(column, false)
    }

    /// Sorts `records` in place. The sort is stable, so records that compare equal on
    /// the chosen column keep their relative order.
    pub fn apply(&self, records: &mut [TransactionRecord]) {
        records.sort_by(|left, right| {
            let ordering = self.compare(left, right);
            if self.ascending { ordering } else { ordering.reverse() }
        });
    }

    fn compare(&self, left: &TransactionRecord, right: &TransactionRecord) -> Ordering {
        match self.column {
            RecordField::Date => left.date.cmp(&right.date),
            RecordField::Category => left.category.cmp(&right.category),
            RecordField::Amount => left.amount.cmp(&right.amount),
            RecordField::Vendor => left.vendor.cmp(&right.vendor),
            RecordField::Owner => left.owner.cmp(&right.owner)
        }
    }
}
