use thiserror::Error;

use crate::models::RecordField;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum FilterError {
    #[error("No filter rule is active")]
    NoActiveFilter,
    #[error("Could not build predicate for [{field}]: {reason}")]
    PredicateBuild {
        field: RecordField,
        reason: String
    },
    #[error("Invalid [{field}] filter rule: {reason}")]
    InvalidRuleState {
        field: RecordField,
        reason: String
    },
    #[error("Unknown filter mode [{value}]")]
    UnknownMode {
        value: String
    }
}

impl FilterError {
    pub fn predicate_build(field: RecordField, reason: impl Into<String>) -> Self {
        Self::PredicateBuild { field, reason: reason.into() }
    }

    pub fn invalid_rule(field: RecordField, reason: impl Into<String>) -> Self {
        Self::InvalidRuleState { field, reason: reason.into() }
    }

    pub fn unknown_mode(value: &str) -> Self {
        Self::UnknownMode { value: value.to_string() }
    }
}
