//! Payment amount and its three representations.
//!
//! The gateway carries amounts as a comma-grouped display string on the wire
//! ("123,456.78"), the signature recipe uses a separator-free two-decimal
//! string ("12345678"), and arithmetic happens on `Decimal`.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A payment amount as held by a message.
///
/// Wire values that cannot be parsed are kept verbatim so that validation can
/// report them instead of failing message construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PaymentAmount {
    Numeric(Decimal),
    Unparsed(String),
}

impl PaymentAmount {
    /// Builds an amount from its wire (display) representation.
    pub fn from_wire(value: &str) -> Self {
        match parse_display(value) {
            Some(amount) => Self::Numeric(amount),
            None => Self::Unparsed(value.to_string()),
        }
    }

    pub fn value(&self) -> Option<Decimal> {
        match self {
            Self::Numeric(amount) => Some(*amount),
            Self::Unparsed(_) => None,
        }
    }

    /// The wire representation.
    pub fn to_wire(&self) -> String {
        match self {
            Self::Numeric(amount) => format_display(*amount),
            Self::Unparsed(raw) => raw.clone(),
        }
    }

    /// The representation consumed by the signature recipe.
    pub fn to_hashable(&self) -> String {
        match self {
            Self::Numeric(amount) => format_hashable(*amount),
            Self::Unparsed(raw) => raw.clone(),
        }
    }
}

impl From<Decimal> for PaymentAmount {
    fn from(value: Decimal) -> Self {
        Self::Numeric(value)
    }
}

impl fmt::Display for PaymentAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

fn two_decimals(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

/// Formats an amount with two decimals, "." as decimal separator and "," as
/// thousands separator (e.g. "123,456.78").
pub fn format_display(amount: Decimal) -> String {
    let plain = two_decimals(amount);
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}{grouped}.{fraction}")
}

/// Formats an amount with two decimals and no separators at all
/// (e.g. 1234.5 gives "123450").
pub fn format_hashable(amount: Decimal) -> String {
    two_decimals(amount).replace('.', "")
}

/// Parses a display amount ("1,234.50") into a decimal.
pub fn parse_display(value: &str) -> Option<Decimal> {
    let cleaned: String = value.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<Decimal>().ok()
}
