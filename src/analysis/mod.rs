//! Expense analysis: turns one session's income, expenses and goal into a [`Report`].

pub mod advice;
pub mod report;

use rust_decimal::Decimal;

use crate::domain::expense::{ExpenseRecord, ExpenseSet, WEEKS_PER_MONTH};
use crate::errors::AnalysisError;

pub use advice::{tips_for, Tip};
pub use report::{
    CategoryShare, GoalComparison, GoalOutcome, NetStatus, Portion, PortionKind, ProjectionLabel,
    Report,
};

/// Days per month assumed by the daily average.
pub const DAYS_PER_MONTH: u32 = 30;
pub const MONTHS_PER_YEAR: u32 = 12;
/// Number of categories listed as the biggest expenses.
pub const TOP_EXPENSE_COUNT: usize = 3;

type AnalysisResult<T> = Result<T, AnalysisError>;

/// Computes every derived figure for one session.
///
/// Pure: the same inputs always produce the same report.
pub fn analyze(
    monthly_income: Decimal,
    expenses: &ExpenseSet,
    goal_budget: Decimal,
) -> AnalysisResult<Report> {
    if monthly_income < Decimal::ZERO {
        return Err(AnalysisError::InvalidInput(
            "monthly income must be non-negative".into(),
        ));
    }
    if goal_budget < Decimal::ZERO {
        return Err(AnalysisError::InvalidInput(
            "goal budget must be non-negative".into(),
        ));
    }
    if expenses.is_empty() {
        return Err(AnalysisError::EmptyExpenseSet);
    }
    if let Some(record) = expenses.iter().find(|r| r.amount < Decimal::ZERO) {
        return Err(AnalysisError::InvalidInput(format!(
            "amount for {} must be non-negative",
            record.category
        )));
    }

    let total_expenses = expenses.checked_total().ok_or(AnalysisError::Overflow)?;
    let net = monthly_income
        .checked_sub(total_expenses)
        .ok_or(AnalysisError::Overflow)?;
    let daily_average = total_expenses / Decimal::from(DAYS_PER_MONTH);
    let weekly_average = total_expenses / WEEKS_PER_MONTH;

    let net_status = classify_net(net);
    let portion = portion_of_income(net_status, net, total_expenses, monthly_income)?;
    let goal = compare_to_goal(net, goal_budget)?;

    let breakdown = expenses
        .iter()
        .map(|record| share_of(record, total_expenses))
        .collect::<AnalysisResult<Vec<_>>>()?;
    let top_expenses = rank_top(&breakdown, TOP_EXPENSE_COUNT);
    let tips = tips_for(top_expenses.iter().map(|share| &share.category));

    tracing::debug!(
        %total_expenses,
        %net,
        categories = breakdown.len(),
        "analyzed expense session"
    );

    Ok(Report {
        monthly_income,
        goal_budget,
        total_expenses,
        net,
        net_status,
        portion,
        daily_average,
        weekly_average,
        goal,
        breakdown,
        top_expenses,
        tips,
    })
}

pub fn classify_net(net: Decimal) -> NetStatus {
    if net.is_zero() {
        NetStatus::Balanced
    } else if net < Decimal::ZERO {
        NetStatus::Deficit
    } else {
        NetStatus::Gain
    }
}

/// Share of income spent or saved. Zero income leaves the percentage undefined.
fn portion_of_income(
    status: NetStatus,
    net: Decimal,
    total_expenses: Decimal,
    monthly_income: Decimal,
) -> AnalysisResult<Option<Portion>> {
    let (kind, numerator) = match status {
        NetStatus::Balanced => return Ok(None),
        NetStatus::Deficit => (PortionKind::Spent, total_expenses),
        NetStatus::Gain => (PortionKind::Saved, net),
    };
    let percent = if monthly_income.is_zero() {
        None
    } else {
        Some(percent_of(numerator, monthly_income)?)
    };
    Ok(Some(Portion { kind, percent }))
}

/// Classifies net against the goal, checking the four outcomes in priority order.
pub fn compare_to_goal(net: Decimal, goal_budget: Decimal) -> AnalysisResult<GoalComparison> {
    let projected_annual = net
        .checked_mul(Decimal::from(MONTHS_PER_YEAR))
        .ok_or(AnalysisError::Overflow)?;
    let difference = net
        .checked_sub(goal_budget)
        .ok_or(AnalysisError::Overflow)?
        .abs();

    let outcome = if net == goal_budget {
        GoalOutcome::MetExactly
    } else if net > goal_budget {
        GoalOutcome::Exceeded
    } else if net >= Decimal::ZERO {
        GoalOutcome::ShortNonNegative
    } else {
        GoalOutcome::ShortDeficit
    };
    let projection_label = match outcome {
        GoalOutcome::ShortDeficit => ProjectionLabel::Deficit,
        _ => ProjectionLabel::Savings,
    };

    Ok(GoalComparison {
        outcome,
        difference,
        projected_annual,
        projection_label,
    })
}

fn share_of(record: &ExpenseRecord, total_expenses: Decimal) -> AnalysisResult<CategoryShare> {
    let percentage = if total_expenses > Decimal::ZERO {
        percent_of(record.amount, total_expenses)?
    } else {
        Decimal::ZERO
    };
    Ok(CategoryShare {
        category: record.category.clone(),
        amount: record.amount,
        percentage,
    })
}

/// Largest amounts first; `sort_by` is stable so ties keep entry order.
pub fn rank_top(shares: &[CategoryShare], count: usize) -> Vec<CategoryShare> {
    let mut ranked = shares.to_vec();
    ranked.sort_by(|a, b| b.amount.cmp(&a.amount));
    ranked.truncate(count);
    ranked
}

fn percent_of(part: Decimal, whole: Decimal) -> AnalysisResult<Decimal> {
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or(AnalysisError::Overflow)
}
