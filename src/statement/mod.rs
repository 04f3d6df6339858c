//! Financial statement domain model: income statement, balance sheet and
//! the combined statement with its derived child expense.

pub mod balance;
pub mod categories;
pub mod financial;
pub mod income;

pub use balance::BalanceSheet;
pub use categories::{CategoryDef, Section, PASSIVE_INCOME_KEYS, PER_CHILD_EXPENSE_KEY};
pub use financial::{FinancialStatement, DEFAULT_CHILD_UNIT_COST};
pub use income::IncomeStatement;
