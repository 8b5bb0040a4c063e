//! Structured result of analysing one session.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::analysis::advice::Tip;
use crate::domain::category::ExpenseCategory;

/// Sign of the month's net value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NetStatus {
    /// Income and expenses cancel out.
    Balanced,
    Deficit,
    Gain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PortionKind {
    Spent,
    Saved,
}

/// Share of the allowance spent (deficit) or saved (gain).
///
/// `percent` is `None` when the allowance is zero and the share has no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Portion {
    pub kind: PortionKind,
    pub percent: Option<Decimal>,
}

/// How net value compares against the goal budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalOutcome {
    MetExactly,
    Exceeded,
    ShortNonNegative,
    ShortDeficit,
}

impl GoalOutcome {
    pub fn is_short(self) -> bool {
        matches!(
            self,
            GoalOutcome::ShortNonNegative | GoalOutcome::ShortDeficit
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionLabel {
    Savings,
    Deficit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoalComparison {
    pub outcome: GoalOutcome,
    /// Surplus when exceeded, shortfall when short, zero when met.
    pub difference: Decimal,
    pub projected_annual: Decimal,
    pub projection_label: ProjectionLabel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    pub category: ExpenseCategory,
    pub amount: Decimal,
    pub percentage: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub monthly_income: Decimal,
    pub goal_budget: Decimal,
    pub total_expenses: Decimal,
    pub net: Decimal,
    pub net_status: NetStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portion: Option<Portion>,
    pub daily_average: Decimal,
    pub weekly_average: Decimal,
    pub goal: GoalComparison,
    /// Every category in the order it was entered.
    pub breakdown: Vec<CategoryShare>,
    /// Up to three largest categories, ties kept in entry order.
    pub top_expenses: Vec<CategoryShare>,
    pub tips: Vec<Tip>,
}

impl Report {
    pub fn net_label(&self) -> &'static str {
        match self.net_status {
            NetStatus::Balanced => "Net value",
            NetStatus::Deficit => "Net Deficit",
            NetStatus::Gain => "Net Gain",
        }
    }
}
