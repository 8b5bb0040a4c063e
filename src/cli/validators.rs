//! Pure parsers for every value the wizard asks for.
//!
//! Each returns the typed value or a [`ValidationError`] carrying the message
//! shown before the prompt is repeated.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::category::{CategoryListBuilder, ExpenseCategory};
use crate::domain::expense::InputPeriod;
pub use crate::errors::ValidationError;

pub const AMOUNT_ERROR: &str = "Invalid amount. Please enter a non-negative number.";
pub const YES_NO_ERROR: &str = "Invalid input. Please enter Y or N.";
pub const PERIOD_ERROR: &str = "Invalid input. Please enter m for monthly or w for weekly.";

/// Parses a non-negative decimal amount.
pub fn parse_amount(raw: &str) -> Result<Decimal, ValidationError> {
    let trimmed = raw.trim();
    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| ValidationError::new(AMOUNT_ERROR))?;
    if value < Decimal::ZERO {
        return Err(ValidationError::new(AMOUNT_ERROR));
    }
    Ok(value.normalize())
}

/// Accepts `y`/`n` in either case.
pub fn parse_yes_no(raw: &str) -> Result<bool, ValidationError> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "Y" => Ok(true),
        "N" => Ok(false),
        _ => Err(ValidationError::new(YES_NO_ERROR)),
    }
}

/// Accepts `m` (monthly) or `w` (weekly) in either case.
pub fn parse_period(raw: &str) -> Result<InputPeriod, ValidationError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "m" => Ok(InputPeriod::Monthly),
        "w" => Ok(InputPeriod::Weekly),
        _ => Err(ValidationError::new(PERIOD_ERROR)),
    }
}

/// Checks a proposed custom category against the labels collected so far.
pub fn validate_new_category(
    raw: &str,
    existing: &CategoryListBuilder,
) -> Result<ExpenseCategory, ValidationError> {
    existing.check(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn amounts_accept_non_negative_decimals() {
        assert_eq!(parse_amount(" 1500 ").unwrap(), dec!(1500));
        assert_eq!(parse_amount("12.50").unwrap(), dec!(12.5));
        assert_eq!(parse_amount("0").unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount("1e3").unwrap(), dec!(1000));
    }

    #[test]
    fn amounts_reject_negatives_and_text() {
        for raw in ["-1", "abc", "", "12,000"] {
            let err = parse_amount(raw).unwrap_err();
            assert_eq!(err.message, AMOUNT_ERROR, "input {raw:?}");
        }
    }

    #[test]
    fn yes_no_is_case_insensitive() {
        assert!(parse_yes_no("y").unwrap());
        assert!(!parse_yes_no("N").unwrap());
        assert!(parse_yes_no("yes").is_err());
    }

    #[test]
    fn period_choices() {
        assert_eq!(parse_period("M").unwrap(), InputPeriod::Monthly);
        assert_eq!(parse_period("w").unwrap(), InputPeriod::Weekly);
        assert!(parse_period("d").is_err());
    }

    #[test]
    fn new_categories_must_be_unique_and_non_empty() {
        let builder = CategoryListBuilder::with_defaults();
        assert!(validate_new_category("", &builder).is_err());
        assert!(validate_new_category("Food", &builder).is_err());
        assert_eq!(
            validate_new_category(" Gym ", &builder).unwrap().as_str(),
            "Gym"
        );
    }
}
