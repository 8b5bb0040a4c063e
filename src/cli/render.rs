//! Turns a [`Report`] into the lines shown at the end of a session.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::analysis::{
    CategoryShare, GoalOutcome, NetStatus, Portion, PortionKind, ProjectionLabel, Report,
};
use crate::currency::{
    format_amount, format_money, format_number, format_percent, CurrencyCode, DISPLAY_PRECISION,
};

const RULE_WIDTH: usize = 90;
const LABEL_WIDTH: usize = 38;
const PORTION_LABEL_WIDTH: usize = 40;
const CATEGORY_WIDTH: usize = 35;
const AMOUNT_WIDTH: usize = 10;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub currency: CurrencyCode,
    /// Drop emoji annotations.
    pub plain: bool,
    pub generated_on: Option<NaiveDate>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            currency: CurrencyCode::default(),
            plain: false,
            generated_on: None,
        }
    }
}

pub struct ReportRenderer<'a> {
    options: &'a RenderOptions,
}

impl<'a> ReportRenderer<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, report: &Report) -> Vec<String> {
        let mut lines = Vec::new();
        self.totals(report, &mut lines);
        self.summary(report, &mut lines);
        self.breakdown(report, &mut lines);
        lines
    }

    fn totals(&self, report: &Report, lines: &mut Vec<String>) {
        lines.push("=".repeat(RULE_WIDTH));
        lines.push("END-OF-MONTH EXPENSE RESULTS".to_string());
        if let Some(date) = self.options.generated_on {
            lines.push(format!("Generated on {}", date.format("%B %d, %Y")));
        }
        lines.push("=".repeat(RULE_WIDTH));
        lines.push(self.amount_line("Monthly Allowance", report.monthly_income));
        lines.push(self.amount_line("Total Expenses", report.total_expenses));
        lines.push(self.amount_line("Approx. daily expenditure", report.daily_average));
        lines.push(self.amount_line("Approx. weekly expenditure", report.weekly_average));
    }

    fn summary(&self, report: &Report, lines: &mut Vec<String>) {
        lines.push(String::new());
        lines.push("-".repeat(RULE_WIDTH));
        lines.push("SUMMARY".to_string());
        lines.push("-".repeat(RULE_WIDTH));

        if let Some(portion) = &report.portion {
            lines.push(portion_line(portion));
        }
        lines.push(self.amount_line(report.net_label(), report.net));
        match report.net_status {
            NetStatus::Balanced => {
                lines.push("You did not experience a net gain or deficit this month.".to_string())
            }
            NetStatus::Deficit => lines.push(self.annotate("❌", "Deficit alert!")),
            NetStatus::Gain => {}
        }

        lines.push(String::new());
        lines.push(self.amount_line("Goal Budget", report.goal_budget));

        let goal = &report.goal;
        let currency = &self.options.currency;
        match goal.outcome {
            GoalOutcome::MetExactly => lines
                .push("Congratulations! You are exactly meeting your set goal budget!".to_string()),
            GoalOutcome::Exceeded => lines.push(format!(
                "Congratulations! You have met your set goal budget and still have {} remaining!",
                format_money(currency, goal.difference)
            )),
            GoalOutcome::ShortNonNegative | GoalOutcome::ShortDeficit => lines.push(format!(
                "You are {} short of your goal budget.",
                format_money(currency, goal.difference)
            )),
        }
        let projection = match goal.projection_label {
            ProjectionLabel::Savings => "Projected savings after 12 months",
            ProjectionLabel::Deficit => "Projected deficit after 12 months",
        };
        lines.push(self.amount_line(projection, goal.projected_annual));
        if goal.outcome.is_short() {
            lines.push(self.annotate("⚠️", "Be careful, you're overspending!"));
        } else {
            lines.push(self.annotate("👍", "Great budgeting!"));
        }
    }

    fn breakdown(&self, report: &Report, lines: &mut Vec<String>) {
        lines.push(String::new());
        lines.push("-".repeat(RULE_WIDTH));
        lines.push(format!(
            "{:<width$} {:<15} {:>10}",
            "EXPENSE BREAKDOWN",
            "Cost",
            "Percent",
            width = PORTION_LABEL_WIDTH
        ));
        lines.push("-".repeat(RULE_WIDTH));
        for (index, share) in report.breakdown.iter().enumerate() {
            lines.push(self.share_line(index + 1, share));
        }

        lines.push(String::new());
        lines.push("Top 3 biggest expenses:".to_string());
        for (index, share) in report.top_expenses.iter().enumerate() {
            lines.push(self.share_line(index + 1, share));
        }

        if !report.tips.is_empty() {
            lines.push(String::new());
        }
        for tip in &report.tips {
            let icon = if self.options.plain { "" } else { tip.icon() };
            lines.push(format!("{icon}Tip! {}", tip.message()));
        }
    }

    fn amount_line(&self, label: &str, value: Decimal) -> String {
        format!(
            "{:<label_width$} {:>5} {:<amount_width$}",
            label,
            self.options.currency.as_str(),
            format_amount(value),
            label_width = LABEL_WIDTH,
            amount_width = AMOUNT_WIDTH
        )
        .trim_end()
        .to_string()
    }

    fn share_line(&self, position: usize, share: &CategoryShare) -> String {
        format!(
            "{}. {:<category_width$} {:>5} {:<amount_width$} {:>11}",
            position,
            share.category.as_str(),
            self.options.currency.as_str(),
            format_amount(share.amount),
            format_percent(share.percentage),
            category_width = CATEGORY_WIDTH,
            amount_width = AMOUNT_WIDTH
        )
    }

    fn annotate(&self, icon: &str, message: &str) -> String {
        if self.options.plain {
            message.to_string()
        } else {
            format!("{icon} {message}")
        }
    }
}

fn portion_line(portion: &Portion) -> String {
    let label = match portion.kind {
        PortionKind::Spent => "Portion of allowance spent",
        PortionKind::Saved => "Portion of allowance saved",
    };
    let value = match portion.percent {
        Some(percent) => format!("{} %", format_number(percent, DISPLAY_PRECISION)),
        None => "undefined (no allowance recorded)".to_string(),
    };
    format!("{:<width$} {}", label, value, width = PORTION_LABEL_WIDTH)
}

/// Pretty JSON form of the report.
pub fn render_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
