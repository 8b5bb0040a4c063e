#![doc(test(attr(deny(warnings))))]

//! Expense Tracker records a month's allowance and categorized expenses, then
//! reports net savings or deficit against a personal goal budget.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!(build = %utils::build_info::current(), "Expense Tracker tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
