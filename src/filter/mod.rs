mod criteria;
mod errors;
mod predicate;
mod rules;

pub use criteria::FilterCriteria;
pub use errors::FilterError;
pub use predicate::{Condition, ContainsText, Predicate, SqlFragment, SqlValue, TextField};
pub use rules::{AmountMode, AmountRule, DateMode, DateRule, TextMode, TextRule};
