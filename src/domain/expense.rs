//! Per-category monthly amounts collected during a session.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::category::ExpenseCategory;
use crate::errors::ValidationError;

/// Weeks per month used when normalising weekly figures.
pub const WEEKS_PER_MONTH: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

pub const MONTHLY_OVERFLOW_ERROR: &str =
    "Invalid amount. The monthly equivalent of this amount is too large.";

/// Period the user reports allowance and expenses in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPeriod {
    Monthly,
    Weekly,
}

impl InputPeriod {
    /// Converts an amount entered for this period into its monthly equivalent.
    pub fn to_monthly(self, amount: Decimal) -> Result<Decimal, ValidationError> {
        match self {
            InputPeriod::Monthly => Ok(amount),
            InputPeriod::Weekly => amount
                .checked_mul(WEEKS_PER_MONTH)
                .ok_or_else(|| ValidationError::new(MONTHLY_OVERFLOW_ERROR)),
        }
    }
}

impl fmt::Display for InputPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputPeriod::Monthly => f.write_str("monthly"),
            InputPeriod::Weekly => f.write_str("weekly"),
        }
    }
}

/// One category paired with its non-negative monthly amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseRecord {
    pub category: ExpenseCategory,
    pub amount: Decimal,
}

/// Insertion-ordered mapping of category to monthly amount with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExpenseSet {
    records: Vec<ExpenseRecord>,
}

impl ExpenseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a monthly amount for a category not yet present in the set.
    pub fn insert(
        &mut self,
        category: ExpenseCategory,
        amount: Decimal,
    ) -> Result<(), ValidationError> {
        if amount < Decimal::ZERO {
            return Err(ValidationError::new(format!(
                "Amount for {category} must be non-negative"
            )));
        }
        if self.get(category.as_str()).is_some() {
            return Err(ValidationError::new(format!(
                "An amount for {category} was already recorded"
            )));
        }
        self.records.push(ExpenseRecord { category, amount });
        Ok(())
    }

    pub fn get(&self, label: &str) -> Option<Decimal> {
        self.records
            .iter()
            .find(|record| record.category.as_str() == label)
            .map(|record| record.amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExpenseRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of every amount, or `None` when it does not fit in a `Decimal`.
    pub fn checked_total(&self) -> Option<Decimal> {
        self.records
            .iter()
            .try_fold(Decimal::ZERO, |acc, record| acc.checked_add(record.amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn category(label: &str) -> ExpenseCategory {
        ExpenseCategory::new(label).unwrap()
    }

    #[test]
    fn weekly_amounts_scale_by_four() {
        assert_eq!(InputPeriod::Weekly.to_monthly(dec!(50)).unwrap(), dec!(200));
        assert_eq!(InputPeriod::Monthly.to_monthly(dec!(50)).unwrap(), dec!(50));
    }

    #[test]
    fn weekly_amount_too_large_to_scale_is_rejected() {
        let err = InputPeriod::Weekly.to_monthly(Decimal::MAX).unwrap_err();
        assert_eq!(err.message, MONTHLY_OVERFLOW_ERROR);
        assert_eq!(
            InputPeriod::Monthly.to_monthly(Decimal::MAX).unwrap(),
            Decimal::MAX
        );
    }

    #[test]
    fn insert_preserves_order_and_rejects_duplicates() {
        let mut set = ExpenseSet::new();
        set.insert(category("Food"), dec!(10)).unwrap();
        set.insert(category("Rent"), dec!(20)).unwrap();
        assert!(set.insert(category("Food"), dec!(5)).is_err());

        let labels: Vec<&str> = set.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(labels, vec!["Food", "Rent"]);
        assert_eq!(set.checked_total(), Some(dec!(30)));
    }

    #[test]
    fn checked_total_reports_overflow() {
        let mut set = ExpenseSet::new();
        set.insert(category("Food"), Decimal::MAX).unwrap();
        set.insert(category("Rent"), dec!(1)).unwrap();
        assert_eq!(set.checked_total(), None);
    }

    #[test]
    fn insert_rejects_negative_amounts() {
        let mut set = ExpenseSet::new();
        let err = set.insert(category("Food"), dec!(-1)).unwrap_err();
        assert!(err.message.contains("non-negative"));
        assert!(set.is_empty());
    }
}
