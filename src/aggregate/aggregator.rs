use indexmap::IndexMap;
use tracing::{debug, error};

use crate::models::TransactionRecord;
use crate::types::Amount;

/// Spending totals for one snapshot of transactions.
///
/// Categories keep the order they were first seen in, which keeps chart legends stable
/// for the same input.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct AggregationResult {
    /// Sum of every record's amount.
    pub total_amount: Amount,
    /// Summed amount per category.
    pub category_totals: IndexMap<String, Amount>
}

impl AggregationResult {
    /// True when no records were aggregated.
    pub fn is_empty(&self) -> bool {
        self.category_totals.is_empty()
    }

    pub fn category_total(&self, category: &str) -> Option<Amount> {
        self.category_totals.get(category).copied()
    }

    /// Fraction of the total spent in `category`, between 0 and 1 for positive amounts.
    ///
    /// Returns `None` for unknown categories or when the total is zero.
    pub fn share(&self, category: &str) -> Option<Amount> {
        let amount = self.category_total(category)?;
        amount.checked_div(self.total_amount)
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, Amount)> {
        self.category_totals.iter().map(|(category, amount)| (category.as_str(), *amount))
    }
}

pub struct TransactionAggregator;

impl TransactionAggregator {
    /// Sums `records` into a grand total and per-category subtotals in a single pass.
    ///
    /// Every record counts exactly once. Amounts are summed as-is, so records that skipped
    /// validation (e.g. negative amounts) still contribute. A sum that leaves the decimal
    /// range is logged and clamped to it.
    pub fn aggregate<'a, I>(records: I) -> AggregationResult
    where
        I: IntoIterator<Item = &'a TransactionRecord>,
    {
        let mut result = AggregationResult::default();

        for record in records {
            accumulate(&mut result.total_amount, record.amount, "total");
            let subtotal = result.category_totals.entry(record.category.clone()).or_insert(Amount::ZERO);
            accumulate(subtotal, record.amount, &record.category);
        }

        debug!("Aggregated {} categories totalling {}", result.category_totals.len(), result.total_amount);

        result
    }
}

fn accumulate(sum: &mut Amount, amount: Amount, label: &str) {
    match sum.checked_add(amount) {
        Some(value) => *sum = value,
        None => {
            *sum = sum.saturating_add(amount);
            error!("Overflow adding {amount} to [{label}], clamped to {sum}");
        }
    }
}
