mod aggregator;

pub use aggregator::{AggregationResult, TransactionAggregator};
