use tracing::debug;

use crate::filter::predicate::{Condition, Predicate, TextField};
use crate::filter::rules::{AmountRule, DateRule, TextRule};
use crate::filter::FilterError;
use crate::models::TransactionRecord;

/// One filter rule per field, as picked by the user for a single filter action.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct FilterCriteria {
    pub date_rule: DateRule,
    pub category_rule: TextRule,
    pub amount_rule: AmountRule,
    pub vendor_rule: TextRule
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date(mut self, rule: DateRule) -> Self {
        self.date_rule = rule;
        self
    }

    pub fn with_category(mut self, rule: TextRule) -> Self {
        self.category_rule = rule;
        self
    }

    pub fn with_amount(mut self, rule: AmountRule) -> Self {
        self.amount_rule = rule;
        self
    }

    pub fn with_vendor(mut self, rule: TextRule) -> Self {
        self.vendor_rule = rule;
        self
    }

    /// Whether any field rule is set to something other than `none`.
    pub fn is_active(&self) -> bool {
        self.date_rule.is_active()
            || self.category_rule.is_active()
            || self.amount_rule.is_active()
            || self.vendor_rule.is_active()
    }

    /// Compiles the active rules into a single predicate.
    ///
    /// Conditions are ANDed in field order (date, category, amount, vendor). A non-empty
    /// `owner_scope` appends an `owner == owner_scope` condition at the end.
    ///
    /// # Errors
    /// Returns `FilterError` if:
    /// - No field rule is active, even when an owner scope was given. Load unfiltered instead.
    /// - A `between` rule has reversed bounds or a rule is missing its text.
    /// - Some text cannot be embedded in the predicate.
    pub fn compile(&self, owner_scope: &str) -> Result<Predicate, FilterError> {
        let mut conditions: Vec<Condition> = [
            self.date_rule.condition()?,
            self.category_rule.condition(TextField::Category)?,
            self.amount_rule.condition()?,
            self.vendor_rule.condition(TextField::Vendor)?
        ]
        .into_iter()
        .flatten()
        .collect();

        if conditions.is_empty() {
            return Err(FilterError::NoActiveFilter)
        }

        if !owner_scope.is_empty() {
            conditions.push(Condition::text_equals(TextField::Owner, owner_scope)?);
        }

        let predicate = Predicate::new(conditions);
        debug!("Compiled filter predicate: {predicate}");

        Ok(predicate)
    }

    /// Compiles the criteria into an in-memory matcher.
    ///
    /// # Errors
    /// Same as [`FilterCriteria::compile`].
    pub fn matcher(&self, owner_scope: &str) -> Result<impl Fn(&TransactionRecord) -> bool + use<>, FilterError> {
        let predicate = self.compile(owner_scope)?;

        Ok(move |record: &TransactionRecord| predicate.matches(record))
    }
}
