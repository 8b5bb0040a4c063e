//! Saving tips attached to the biggest expense categories.

use serde::Serialize;

use crate::domain::category::{DefaultCategory, ExpenseCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tip {
    Transportation,
    School,
    Food,
    RentUtilities,
    /// Shared by personal and miscellaneous spending.
    Discretionary,
}

impl Tip {
    /// Maps a category to its tip; custom categories never get one.
    pub fn for_category(category: &ExpenseCategory) -> Option<Tip> {
        category.default_kind().map(Tip::for_default)
    }

    pub fn for_default(kind: DefaultCategory) -> Tip {
        match kind {
            DefaultCategory::Transportation => Tip::Transportation,
            DefaultCategory::School => Tip::School,
            DefaultCategory::Food => Tip::Food,
            DefaultCategory::RentUtilities => Tip::RentUtilities,
            DefaultCategory::Personal | DefaultCategory::Miscellaneous => Tip::Discretionary,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tip::Transportation => "🚗",
            Tip::School => "📚",
            Tip::Food => "🧑‍🍳",
            Tip::RentUtilities => "⚡️",
            Tip::Discretionary => "💡",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Tip::Transportation => "Walk, carpool, or commute to reduce transportation costs!",
            Tip::School => {
                "Buy used textbooks, use library resources, and borrow materials from classmates to reduce school-related expenses!"
            }
            Tip::Food => "Cook instead of ordering food to reduce food expenses!",
            Tip::RentUtilities => {
                "Find roommates to split rent and utilities, and conserve electricity and water!"
            }
            Tip::Discretionary => {
                "Avoid impulse purchases and avail of second-hand items to reduce unnecessary expenses!"
            }
        }
    }
}

/// Collects tips for the given categories in encounter order, without repeats.
pub fn tips_for<'a>(categories: impl IntoIterator<Item = &'a ExpenseCategory>) -> Vec<Tip> {
    let mut tips = Vec::new();
    for tip in categories.into_iter().filter_map(Tip::for_category) {
        if !tips.contains(&tip) {
            tips.push(tip);
        }
    }
    tips
}
