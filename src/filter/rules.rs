use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;

use crate::filter::predicate::{Condition, TextField};
use crate::filter::FilterError;
use crate::models::RecordField;
use crate::types::Amount;

/// Normalizes user-entered mode names: `"Greater-Than"` and `"greater than"` read alike.
fn normalize_mode(value: &str) -> String {
    value.trim().to_lowercase().replace(['-', '_'], " ")
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum DateMode {
    #[default]
    None,
    Before,
    After,
    Between
}

impl DateMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateMode::None => "none",
            DateMode::Before => "before",
            DateMode::After => "after",
            DateMode::Between => "between"
        }
    }
}

impl Display for DateMode {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for DateMode {
    type Err = FilterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize_mode(value).as_str() {
            "none" => Ok(DateMode::None),
            "before" => Ok(DateMode::Before),
            "after" => Ok(DateMode::After),
            "between" => Ok(DateMode::Between),
            _ => Err(FilterError::unknown_mode(value))
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum TextMode {
    #[default]
    None,
    Equals,
    Contains
}

impl TextMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextMode::None => "none",
            TextMode::Equals => "equals",
            TextMode::Contains => "contains"
        }
    }
}

impl Display for TextMode {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for TextMode {
    type Err = FilterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize_mode(value).as_str() {
            "none" => Ok(TextMode::None),
            "equals" => Ok(TextMode::Equals),
            "contains" => Ok(TextMode::Contains),
            _ => Err(FilterError::unknown_mode(value))
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum AmountMode {
    #[default]
    None,
    Equals,
    GreaterThan,
    LessThan,
    Between
}

impl AmountMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AmountMode::None => "none",
            AmountMode::Equals => "equals",
            AmountMode::GreaterThan => "greater than",
            AmountMode::LessThan => "less than",
            AmountMode::Between => "between"
        }
    }
}

impl Display for AmountMode {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for AmountMode {
    type Err = FilterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize_mode(value).as_str() {
            "none" => Ok(AmountMode::None),
            "equals" => Ok(AmountMode::Equals),
            "greater than" | "greater" => Ok(AmountMode::GreaterThan),
            "less than" | "less" => Ok(AmountMode::LessThan),
            "between" => Ok(AmountMode::Between),
            _ => Err(FilterError::unknown_mode(value))
        }
    }
}

/// Date filter. `Before` and `After` include the boundary day, and so does `Between`
/// on both ends.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum DateRule {
    #[default]
    None,
    Before(NaiveDate),
    After(NaiveDate),
    Between {
        start: NaiveDate,
        end: NaiveDate
    }
}

impl DateRule {
    /// Builds a rule from a mode and the raw values an input form supplied.
    ///
    /// # Errors
    /// Returns `FilterError::InvalidRuleState` if the mode needs a date that is missing.
    pub fn from_parts(mode: DateMode, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self, FilterError> {
        let require = |value: Option<NaiveDate>, name: &str| {
            value.ok_or_else(|| FilterError::invalid_rule(RecordField::Date, format!("[{mode}] requires a {name} date")))
        };

        match mode {
            DateMode::None => Ok(DateRule::None),
            DateMode::Before => Ok(DateRule::Before(require(start, "start")?)),
            DateMode::After => Ok(DateRule::After(require(start, "start")?)),
            DateMode::Between => Ok(DateRule::Between {
                start: require(start, "start")?,
                end: require(end, "end")?
            })
        }
    }

    pub fn mode(&self) -> DateMode {
        match self {
            DateRule::None => DateMode::None,
            DateRule::Before(_) => DateMode::Before,
            DateRule::After(_) => DateMode::After,
            DateRule::Between { .. } => DateMode::Between
        }
    }

    pub fn is_active(&self) -> bool {
        self.mode() != DateMode::None
    }

    pub(crate) fn condition(&self) -> Result<Option<Condition>, FilterError> {
        match *self {
            DateRule::None => Ok(None),
            DateRule::Before(start) => Ok(Some(Condition::DateOnOrBefore(start))),
            DateRule::After(start) => Ok(Some(Condition::DateOnOrAfter(start))),
            DateRule::Between { start, end } => {
                if start > end {
                    return Err(FilterError::invalid_rule(
                        RecordField::Date,
                        format!("start date {start} is after end date {end}")
                    ))
                }

                Ok(Some(Condition::DateBetween { start, end }))
            }
        }
    }
}

/// Filter on a text attribute such as the category or vendor.
///
/// `Equals` is an exact, case-sensitive comparison. `Contains` ignores case and diacritics.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub enum TextRule {
    #[default]
    None,
    Equals(String),
    Contains(String)
}

impl TextRule {
    /// # Errors
    /// Returns `FilterError::InvalidRuleState` if the mode needs text and none (or an empty
    /// string) was supplied.
    pub fn from_parts(field: RecordField, mode: TextMode, text: Option<String>) -> Result<Self, FilterError> {
        let require = || {
            text.filter(|text| !text.is_empty())
                .ok_or_else(|| FilterError::invalid_rule(field, format!("[{mode}] requires text")))
        };

        match mode {
            TextMode::None => Ok(TextRule::None),
            TextMode::Equals => Ok(TextRule::Equals(require()?)),
            TextMode::Contains => Ok(TextRule::Contains(require()?))
        }
    }

    pub fn mode(&self) -> TextMode {
        match self {
            TextRule::None => TextMode::None,
            TextRule::Equals(_) => TextMode::Equals,
            TextRule::Contains(_) => TextMode::Contains
        }
    }

    pub fn is_active(&self) -> bool {
        self.mode() != TextMode::None
    }

    pub(crate) fn condition(&self, field: TextField) -> Result<Option<Condition>, FilterError> {
        let require = |text: &str| {
            if text.is_empty() {
                return Err(FilterError::invalid_rule(field.into(), format!("[{}] requires text", self.mode())))
            }

            Ok(())
        };

        match self {
            TextRule::None => Ok(None),
            TextRule::Equals(text) => {
                require(text)?;
                Condition::text_equals(field, text).map(Some)
            }
            TextRule::Contains(text) => {
                require(text)?;
                Condition::text_contains(field, text).map(Some)
            }
        }
    }
}

/// Filter on the transaction amount. `Between` includes both bounds.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum AmountRule {
    #[default]
    None,
    Equals(Amount),
    GreaterThan(Amount),
    LessThan(Amount),
    Between {
        value: Amount,
        other_value: Amount
    }
}

impl AmountRule {
    /// # Errors
    /// Returns `FilterError::InvalidRuleState` if the mode needs an amount that is missing.
    pub fn from_parts(mode: AmountMode, value: Option<Amount>, other_value: Option<Amount>) -> Result<Self, FilterError> {
        let require = |amount: Option<Amount>, name: &str| {
            amount.ok_or_else(|| FilterError::invalid_rule(RecordField::Amount, format!("[{mode}] requires {name}")))
        };

        match mode {
            AmountMode::None => Ok(AmountRule::None),
            AmountMode::Equals => Ok(AmountRule::Equals(require(value, "a value")?)),
            AmountMode::GreaterThan => Ok(AmountRule::GreaterThan(require(value, "a value")?)),
            AmountMode::LessThan => Ok(AmountRule::LessThan(require(value, "a value")?)),
            AmountMode::Between => Ok(AmountRule::Between {
                value: require(value, "a value")?,
                other_value: require(other_value, "another value")?
            })
        }
    }

    pub fn mode(&self) -> AmountMode {
        match self {
            AmountRule::None => AmountMode::None,
            AmountRule::Equals(_) => AmountMode::Equals,
            AmountRule::GreaterThan(_) => AmountMode::GreaterThan,
            AmountRule::LessThan(_) => AmountMode::LessThan,
            AmountRule::Between { .. } => AmountMode::Between
        }
    }

    pub fn is_active(&self) -> bool {
        self.mode() != AmountMode::None
    }

    pub(crate) fn condition(&self) -> Result<Option<Condition>, FilterError> {
        match *self {
            AmountRule::None => Ok(None),
            AmountRule::Equals(value) => Ok(Some(Condition::AmountEquals(value))),
            AmountRule::GreaterThan(value) => Ok(Some(Condition::AmountGreaterThan(value))),
            AmountRule::LessThan(value) => Ok(Some(Condition::AmountLessThan(value))),
            AmountRule::Between { value, other_value } => {
                if value > other_value {
                    return Err(FilterError::invalid_rule(
                        RecordField::Amount,
                        format!("lower bound {value} is greater than upper bound {other_value}")
                    ))
                }

                Ok(Some(Condition::AmountBetween { low: value, high: other_value }))
            }
        }
    }
}
