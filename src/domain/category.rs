//! Expense categories and the ordered list a session collects amounts for.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Label identifying one expense category within a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseCategory(String);

impl ExpenseCategory {
    /// Creates a category from a label, rejecting blank input.
    pub fn new(label: impl Into<String>) -> Result<Self, ValidationError> {
        let label = label.into();
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::new("Category name cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the built-in category this label names, if any.
    pub fn default_kind(&self) -> Option<DefaultCategory> {
        DefaultCategory::from_label(&self.0)
    }

}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<DefaultCategory> for ExpenseCategory {
    fn from(kind: DefaultCategory) -> Self {
        Self(kind.label().to_string())
    }
}

/// The six categories every session starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefaultCategory {
    Transportation,
    School,
    Food,
    RentUtilities,
    Miscellaneous,
    Personal,
}

impl DefaultCategory {
    pub const ALL: [DefaultCategory; 6] = [
        DefaultCategory::Transportation,
        DefaultCategory::School,
        DefaultCategory::Food,
        DefaultCategory::RentUtilities,
        DefaultCategory::Miscellaneous,
        DefaultCategory::Personal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DefaultCategory::Transportation => "Transportation fees",
            DefaultCategory::School => "School-related expenses",
            DefaultCategory::Food => "Food",
            DefaultCategory::RentUtilities => "Rent/Utilities",
            DefaultCategory::Miscellaneous => "Miscellaneous",
            DefaultCategory::Personal => "Personal expenses",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }
}

/// Immutable, ordered, duplicate-free list of categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryList {
    categories: Vec<ExpenseCategory>,
}

impl CategoryList {
    /// The list a session starts with when the user adds nothing.
    pub fn defaults() -> Self {
        CategoryListBuilder::with_defaults().build()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExpenseCategory> {
        self.categories.iter()
    }

}

impl<'a> IntoIterator for &'a CategoryList {
    type Item = &'a ExpenseCategory;
    type IntoIter = std::slice::Iter<'a, ExpenseCategory>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.iter()
    }
}

/// Accumulates validated categories before freezing them into a [`CategoryList`].
#[derive(Debug, Clone, Default)]
pub struct CategoryListBuilder {
    categories: Vec<ExpenseCategory>,
}

impl CategoryListBuilder {
    pub fn with_defaults() -> Self {
        Self {
            categories: DefaultCategory::ALL
                .into_iter()
                .map(ExpenseCategory::from)
                .collect(),
        }
    }

    /// Checks that a label is non-empty and not already listed, without adding it.
    pub fn check(&self, label: &str) -> Result<ExpenseCategory, ValidationError> {
        let category = ExpenseCategory::new(label).map_err(|_| invalid_category())?;
        if self.contains(category.as_str()) {
            return Err(invalid_category());
        }
        Ok(category)
    }

    pub fn add(&mut self, label: &str) -> Result<&ExpenseCategory, ValidationError> {
        let category = self.check(label)?;
        self.categories.push(category);
        Ok(&self.categories[self.categories.len() - 1])
    }

    fn contains(&self, label: &str) -> bool {
        self.categories.iter().any(|c| c.as_str() == label)
    }

    pub fn current(&self) -> &[ExpenseCategory] {
        &self.categories
    }

    pub fn build(self) -> CategoryList {
        CategoryList {
            categories: self.categories,
        }
    }
}

fn invalid_category() -> ValidationError {
    ValidationError::new("Invalid category. Category must be non-empty and not already exist.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_fixed_order() {
        let list = CategoryList::defaults();
        let labels: Vec<&str> = list.iter().map(ExpenseCategory::as_str).collect();
        assert_eq!(
            labels,
            vec![
                "Transportation fees",
                "School-related expenses",
                "Food",
                "Rent/Utilities",
                "Miscellaneous",
                "Personal expenses",
            ]
        );
    }

    #[test]
    fn builder_rejects_blank_and_duplicate_labels() {
        let mut builder = CategoryListBuilder::with_defaults();
        assert!(builder.add("   ").is_err());
        assert!(builder.add("Food").is_err());
        builder.add("  Gym ").expect("new label accepted");
        assert!(builder.add("Gym").is_err());

        let list = builder.build();
        assert_eq!(list.iter().count(), 7);
        assert_eq!(list.iter().last().map(|c| c.as_str()), Some("Gym"));
    }

    #[test]
    fn custom_labels_have_no_default_kind() {
        let gym = ExpenseCategory::new("Gym").unwrap();
        assert_eq!(gym.default_kind(), None);
        let food = ExpenseCategory::from(DefaultCategory::Food);
        assert_eq!(food.default_kind(), Some(DefaultCategory::Food));
    }
}
