#![allow(dead_code)]

use expense_tracker::domain::{ExpenseCategory, ExpenseSet};
use rust_decimal::Decimal;
use tempfile::TempDir;

/// Builds an expense set in the given order.
pub fn expense_set(entries: &[(&str, Decimal)]) -> ExpenseSet {
    let mut set = ExpenseSet::new();
    for (label, amount) in entries {
        set.insert(
            ExpenseCategory::new(*label).expect("valid label"),
            *amount,
        )
        .expect("unique, non-negative entry");
    }
    set
}

/// Creates an isolated configuration directory, optionally seeded with `config.json`.
pub fn config_dir(contents: Option<&str>) -> TempDir {
    let temp = TempDir::new().expect("create temp dir");
    if let Some(json) = contents {
        std::fs::write(temp.path().join("config.json"), json).expect("write config");
    }
    temp
}
