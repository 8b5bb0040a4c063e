use rust_decimal::Decimal;
use serde::Serialize;

use crate::analysis::{analyze, Report};
use crate::domain::expense::ExpenseSet;
use crate::errors::AnalysisError;

/// Everything one run of the tracker collects before reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub monthly_income: Decimal,
    pub expenses: ExpenseSet,
    pub goal_budget: Decimal,
}

impl Session {
    pub fn new(monthly_income: Decimal, expenses: ExpenseSet, goal_budget: Decimal) -> Self {
        Self {
            monthly_income,
            expenses,
            goal_budget,
        }
    }

    pub fn analyze(&self) -> Result<Report, AnalysisError> {
        analyze(self.monthly_income, &self.expenses, self.goal_budget)
    }
}
