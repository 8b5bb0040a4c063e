pub mod category;
pub mod expense;
pub mod session;

pub use category::{CategoryList, CategoryListBuilder, DefaultCategory, ExpenseCategory};
pub use expense::{ExpenseRecord, ExpenseSet, InputPeriod};
pub use session::Session;
