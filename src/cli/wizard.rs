//! Step-by-step collection of one session's income, goal, categories and amounts.

use crate::cli::io::{prompt_until, LineSource};
use crate::cli::output;
use crate::cli::screen::Screen;
use crate::cli::validators::{parse_amount, parse_period, parse_yes_no, validate_new_category};
use crate::cli::CliError;
use crate::currency::CurrencyCode;
use crate::domain::{CategoryList, CategoryListBuilder, ExpenseSet, InputPeriod, Session};

pub struct Wizard<'a> {
    screen: Screen,
    currency: &'a CurrencyCode,
}

impl<'a> Wizard<'a> {
    pub fn new(screen: Screen, currency: &'a CurrencyCode) -> Self {
        Self { screen, currency }
    }

    pub fn collect_session<S: LineSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> Result<Session, CliError> {
        self.screen.clear()?;
        output::info("Welcome to the Expense Tracker!");
        output::info(
            "This program will analyze your monthly finances based on your allowance, expenses, and goal budget.",
        );

        let period = prompt_until(
            source,
            "Do you want to input monthly or weekly expenses and allowance? (input m or w)",
            parse_period,
        )?;
        let monthly_income = prompt_until(
            source,
            &format!("Please input your {period} allowance in {}", self.currency),
            |raw| parse_amount(raw).and_then(|amount| period.to_monthly(amount)),
        )?;
        let goal_budget = prompt_until(
            source,
            &format!("Please input your end-of-month goal budget in {}", self.currency),
            parse_amount,
        )?;

        let categories = self.customize_categories(source)?;
        let expenses = self.collect_expenses(source, &categories, period)?;
        tracing::info!(
            %period,
            %monthly_income,
            %goal_budget,
            categories = expenses.len(),
            "collected session inputs"
        );

        Ok(Session::new(monthly_income, expenses, goal_budget))
    }

    /// Starts from the default categories and appends unique labels until the user declines.
    pub fn customize_categories<S: LineSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> Result<CategoryList, CliError> {
        let mut builder = CategoryListBuilder::with_defaults();
        loop {
            self.screen.clear()?;
            output::section("Current Expense Categories");
            for (index, category) in builder.current().iter().enumerate() {
                output::info(format!("{}. {}", index + 1, category));
            }
            output::blank_line();

            let add_more = prompt_until(
                source,
                "Would you like to add more categories? (Y/N)",
                parse_yes_no,
            )?;
            if !add_more {
                break;
            }
            let added = prompt_until(
                source,
                "Please input your custom expense category (non-empty, unique)",
                |raw| validate_new_category(raw, &builder),
            )?;
            builder.add(added.as_str())?;
            tracing::debug!(category = %added, "added custom category");
        }
        Ok(builder.build())
    }

    /// Asks for one amount per category, converting weekly figures to monthly.
    pub fn collect_expenses<S: LineSource + ?Sized>(
        &self,
        source: &mut S,
        categories: &CategoryList,
        period: InputPeriod,
    ) -> Result<ExpenseSet, CliError> {
        self.screen.clear()?;
        output::info("Great! You've entered all your expense categories.");
        output::info(
            "Now, input your expenses for each category. If a category doesn't apply to you, enter 0.",
        );
        output::blank_line();

        let mut expenses = ExpenseSet::new();
        for category in categories {
            let amount = prompt_until(
                source,
                &format!(
                    "Enter the {period} amount for {category} in {}",
                    self.currency
                ),
                |raw| parse_amount(raw).and_then(|amount| period.to_monthly(amount)),
            )?;
            expenses.insert(category.clone(), amount)?;
        }
        Ok(expenses)
    }
}
