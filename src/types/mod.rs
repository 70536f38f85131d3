mod text;
#[cfg(test)]
mod tests;

use rust_decimal::Decimal;

pub use text::{fold, find_control_character};

pub type Amount = Decimal;
pub type TransactionId = u32;
