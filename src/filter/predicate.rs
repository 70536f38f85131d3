use std::fmt::{self, Display, Formatter};

use chrono::NaiveDate;

use crate::filter::FilterError;
use crate::models::{RecordField, TransactionRecord};
use crate::types::{fold, find_control_character, Amount};

/// The text attributes a condition can compare against.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TextField {
    Category,
    Vendor,
    Owner
}

impl TextField {
    pub fn value<'a>(&self, record: &'a TransactionRecord) -> &'a str {
        match self {
            TextField::Category => &record.category,
            TextField::Vendor => &record.vendor,
            TextField::Owner => &record.owner
        }
    }
}

impl From<TextField> for RecordField {
    fn from(field: TextField) -> Self {
        match field {
            TextField::Category => RecordField::Category,
            TextField::Vendor => RecordField::Vendor,
            TextField::Owner => RecordField::Owner
        }
    }
}

/// Search text for a `contains` condition, kept alongside its folded form.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ContainsText {
    text: String,
    folded: String
}

impl ContainsText {
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A single boolean test over one attribute of a record.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Condition {
    DateOnOrBefore(NaiveDate),
    DateOnOrAfter(NaiveDate),
    DateBetween {
        start: NaiveDate,
        end: NaiveDate
    },
    AmountEquals(Amount),
    AmountGreaterThan(Amount),
    AmountLessThan(Amount),
    AmountBetween {
        low: Amount,
        high: Amount
    },
    TextEquals {
        field: TextField,
        text: String
    },
    TextContains {
        field: TextField,
        needle: ContainsText
    }
}

impl Condition {
    /// # Errors
    /// Returns `FilterError::PredicateBuild` if the text cannot be embedded in a query.
    pub fn text_equals(field: TextField, text: &str) -> Result<Self, FilterError> {
        check_embeddable(field, text)?;

        Ok(Condition::TextEquals { field, text: text.to_string() })
    }

    /// # Errors
    /// Returns `FilterError::PredicateBuild` if the text cannot be embedded in a query.
    pub fn text_contains(field: TextField, text: &str) -> Result<Self, FilterError> {
        check_embeddable(field, text)?;

        Ok(Condition::TextContains {
            field,
            needle: ContainsText {
                text: text.to_string(),
                folded: fold(text)
            }
        })
    }

    pub fn field(&self) -> RecordField {
        match self {
            Condition::DateOnOrBefore(_) | Condition::DateOnOrAfter(_) | Condition::DateBetween { .. } => RecordField::Date,
            Condition::AmountEquals(_)
            | Condition::AmountGreaterThan(_)
            | Condition::AmountLessThan(_)
            | Condition::AmountBetween { .. } => RecordField::Amount,
            Condition::TextEquals { field, .. } | Condition::TextContains { field, .. } => (*field).into()
        }
    }

    pub fn matches(&self, record: &TransactionRecord) -> bool {
        match self {
            Condition::DateOnOrBefore(start) => record.date <= *start,
            Condition::DateOnOrAfter(start) => record.date >= *start,
            Condition::DateBetween { start, end } => *start <= record.date && record.date <= *end,
            Condition::AmountEquals(value) => record.amount == *value,
            Condition::AmountGreaterThan(value) => record.amount > *value,
            Condition::AmountLessThan(value) => record.amount < *value,
            Condition::AmountBetween { low, high } => *low <= record.amount && record.amount <= *high,
            Condition::TextEquals { field, text } => field.value(record) == text.as_str(),
            Condition::TextContains { field, needle } => fold(field.value(record)).contains(&needle.folded)
        }
    }

    fn sql(&self, params: &mut Vec<SqlValue>) -> String {
        let column = self.field();

        match self {
            Condition::DateOnOrBefore(start) => format!("{column} <= {}", bind(params, SqlValue::Date(*start))),
            Condition::DateOnOrAfter(start) => format!("{column} >= {}", bind(params, SqlValue::Date(*start))),
            Condition::DateBetween { start, end } => {
                let start = bind(params, SqlValue::Date(*start));
                let end = bind(params, SqlValue::Date(*end));
                format!("{column} BETWEEN {start} AND {end}")
            }
            Condition::AmountEquals(value) => format!("{column} = {}", bind(params, SqlValue::Amount(*value))),
            Condition::AmountGreaterThan(value) => format!("{column} > {}", bind(params, SqlValue::Amount(*value))),
            Condition::AmountLessThan(value) => format!("{column} < {}", bind(params, SqlValue::Amount(*value))),
            Condition::AmountBetween { low, high } => {
                let low = bind(params, SqlValue::Amount(*low));
                let high = bind(params, SqlValue::Amount(*high));
                format!("{column} BETWEEN {low} AND {high}")
            }
            Condition::TextEquals { text, .. } => format!("{column} = {}", bind(params, SqlValue::Text(text.clone()))),
            Condition::TextContains { needle, .. } => {
                let pattern = format!("%{}%", escape_like(&needle.text));
                format!("{column} LIKE {} ESCAPE '\\'", bind(params, SqlValue::Text(pattern)))
            }
        }
    }
}

impl Display for Condition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let column = self.field();

        match self {
            Condition::DateOnOrBefore(start) => write!(formatter, "{column} <= {start}"),
            Condition::DateOnOrAfter(start) => write!(formatter, "{column} >= {start}"),
            Condition::DateBetween { start, end } => write!(formatter, "{column} BETWEEN {start} AND {end}"),
            Condition::AmountEquals(value) => write!(formatter, "{column} == {value}"),
            Condition::AmountGreaterThan(value) => write!(formatter, "{column} > {value}"),
            Condition::AmountLessThan(value) => write!(formatter, "{column} < {value}"),
            Condition::AmountBetween { low, high } => write!(formatter, "{column} BETWEEN {low} AND {high}"),
            Condition::TextEquals { text, .. } => write!(formatter, "{column} == {text:?}"),
            Condition::TextContains { needle, .. } => write!(formatter, "{column} CONTAINS[cd] {:?}", needle.text)
        }
    }
}

fn check_embeddable(field: TextField, text: &str) -> Result<(), FilterError> {
    match find_control_character(text) {
        Some(character) => Err(FilterError::predicate_build(
            field.into(),
            format!("text contains control character {character:?}")
        )),
        None => Ok(())
    }
}

fn bind(params: &mut Vec<SqlValue>, value: SqlValue) -> String {
    params.push(value);
    format!("?{}", params.len())
}

fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for character in text.chars() {
        if matches!(character, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(character);
    }

    escaped
}

/// A value bound to a numbered SQL placeholder.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SqlValue {
    Date(NaiveDate),
    Amount(Amount),
    Text(String)
}

/// A parameterised `WHERE` clause body. Placeholders are numbered `?1`, `?2`, ... in the
/// same order as `params`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SqlFragment {
    pub clause: String,
    pub params: Vec<SqlValue>
}

/// A compiled filter: every condition must hold for a record to be selected.
///
/// Only [`FilterCriteria::compile`](crate::filter::FilterCriteria::compile) builds one,
/// so a predicate always carries at least one field condition.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Predicate {
    conditions: Vec<Condition>
}

impl Predicate {
    pub(crate) fn new(conditions: Vec<Condition>) -> Self {
        Self { conditions }
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Stops at the first condition that fails.
    pub fn matches(&self, record: &TransactionRecord) -> bool {
        self.conditions.iter().all(|condition| condition.matches(record))
    }

    /// Returns clones of the matching records, keeping their input order.
    pub fn filter<'a, I>(&self, records: I) -> Vec<TransactionRecord>
    where
        I: IntoIterator<Item = &'a TransactionRecord>,
    {
        records.into_iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }

    /// Renders the predicate for SQL back-ends, with every value bound as a parameter.
    ///
    /// `contains` becomes a `LIKE` with `%`, `_` and `\` escaped. SQLite's `LIKE` folds
    /// ASCII case only, so diacritic-insensitive matching is exact only through
    /// [`Predicate::matches`].
    pub fn to_sql(&self) -> SqlFragment {
        let mut params = Vec::new();
        let clause = self.conditions.iter()
            .map(|condition| condition.sql(&mut params))
            .collect::<Vec<_>>()
            .join(" AND ");

        SqlFragment { clause, params }
    }
}

impl Display for Predicate {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        for (index, condition) in self.conditions.iter().enumerate() {
            if index > 0 {
                formatter.write_str(" AND ")?;
            }
            write!(formatter, "{condition}")?;
        }

        Ok(())
    }
}
