mod category;
mod errors;
mod owner;
mod sort;
mod transaction;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

pub use category::{CategoryList, CUSTOM_CATEGORIES_KEY, DEFAULT_CATEGORIES};
pub use errors::{CategoryError, OwnerError, RecordError};
pub use owner::{OwnerList, DEFAULT_OWNER, OWNERS_KEY};
pub use sort::SortOrder;
pub use transaction::TransactionRecord;

/// The attributes of a stored transaction.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum RecordField {
    Date,
    Category,
    Amount,
    Vendor,
    Owner
}

impl RecordField {
    /// Column name used for CSV headers, SQL fragments and sort keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordField::Date => "date",
            RecordField::Category => "category",
            RecordField::Amount => "amount",
            RecordField::Vendor => "vendor",
            RecordField::Owner => "owner"
        }
    }
}

impl Display for RecordField {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for RecordField {
    type Err = RecordError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "date" => Ok(RecordField::Date),
            "category" => Ok(RecordField::Category),
            "amount" => Ok(RecordField::Amount),
            "vendor" => Ok(RecordField::Vendor),
            "owner" => Ok(RecordField::Owner),
            _ => Err(RecordError::UnknownField { value: value.to_string() })
        }
    }
}
