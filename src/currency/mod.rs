use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Decimal places used for every displayed amount and percentage.
pub const DISPLAY_PRECISION: u32 = 2;

/// Currency label shown next to amounts. Cosmetic only: no conversion happens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("PHP")
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rounds half away from zero and pads to the requested precision.
pub fn format_number(value: Decimal, precision: u32) -> String {
    let rounded = value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    let rendered = format!("{:.*}", precision as usize, rounded);
    // Avoid printing "-0.00" for tiny negative values.
    if rounded.is_zero() && rendered.starts_with('-') {
        rendered[1..].to_string()
    } else {
        rendered
    }
}

pub fn format_amount(value: Decimal) -> String {
    format_number(value, DISPLAY_PRECISION)
}

/// Inline money text such as `PHP 1000.00`.
pub fn format_money(code: &CurrencyCode, value: Decimal) -> String {
    format!("{} {}", code.as_str(), format_amount(value))
}

pub fn format_percent(value: Decimal) -> String {
    format!("{}%", format_number(value, DISPLAY_PRECISION))
}
