use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{balance::BalanceSheet, categories::PER_CHILD_EXPENSE_KEY, income::IncomeStatement};

/// Monthly cost per child used when no configured value applies.
pub const DEFAULT_CHILD_UNIT_COST: f64 = 100.0;

/// Complete financial statement for one person: income statement plus
/// balance sheet, with pass-through mutations and aggregate reads.
///
/// The statement lives in memory for the duration of a session. Aggregates
/// are recomputed from current state on every call and returned exact;
/// rounding and separators belong to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialStatement {
    pub income_statement: IncomeStatement,
    pub balance_sheet: BalanceSheet,
    pub children: u32,
    pub child_unit_cost: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FinancialStatement {
    pub fn new() -> Self {
        Self::with_child_unit_cost(DEFAULT_CHILD_UNIT_COST)
    }

    pub fn with_child_unit_cost(child_unit_cost: f64) -> Self {
        let now = Utc::now();
        Self {
            income_statement: IncomeStatement::new(),
            balance_sheet: BalanceSheet::new(),
            children: 0,
            child_unit_cost,
            created_at: now,
            updated_at: now,
        }
    }

    /// Inserts or overwrites an income category.
    pub fn update_income(&mut self, key: impl Into<String>, amount: f64) {
        let key = key.into();
        debug!(category = %key, amount, "income updated");
        self.income_statement.set_income(key, amount);
        self.touch();
    }

    /// Inserts or overwrites an expense category.
    pub fn update_expense(&mut self, key: impl Into<String>, amount: f64) {
        let key = key.into();
        debug!(category = %key, amount, "expense updated");
        self.income_statement.set_expense(key, amount);
        self.touch();
    }

    /// Inserts or overwrites an asset category.
    pub fn update_asset(&mut self, key: impl Into<String>, amount: f64) {
        let key = key.into();
        debug!(category = %key, amount, "asset updated");
        self.balance_sheet.set_asset(key, amount);
        self.touch();
    }

    /// Inserts or overwrites a liability category.
    pub fn update_liability(&mut self, key: impl Into<String>, amount: f64) {
        let key = key.into();
        debug!(category = %key, amount, "liability updated");
        self.balance_sheet.set_liability(key, amount);
        self.touch();
    }

    /// Creates an income entry; an existing key is overwritten.
    pub fn add_income(&mut self, key: impl Into<String>, amount: f64) {
        self.update_income(key, amount);
    }

    /// Creates an expense entry; an existing key is overwritten.
    pub fn add_expense(&mut self, key: impl Into<String>, amount: f64) {
        self.update_expense(key, amount);
    }

    /// Changes an income entry only if the category exists. Returns
    /// whether a value was written.
    pub fn edit_income(&mut self, key: &str, amount: f64) -> bool {
        let changed = self.income_statement.edit_income(key, amount);
        if changed {
            self.touch();
        }
        changed
    }

    /// Changes an expense entry only if the category exists.
    pub fn edit_expense(&mut self, key: &str, amount: f64) -> bool {
        let changed = self.income_statement.edit_expense(key, amount);
        if changed {
            self.touch();
        }
        changed
    }

    /// Removes an income entry; a missing key is a no-op, never an error.
    pub fn remove_income(&mut self, key: &str) -> bool {
        let removed = self.income_statement.remove_income(key);
        if removed {
            self.touch();
        }
        removed
    }

    /// Removes an expense entry; a missing key is a no-op.
    pub fn remove_expense(&mut self, key: &str) -> bool {
        let removed = self.income_statement.remove_expense(key);
        if removed {
            self.touch();
        }
        removed
    }

    /// Removes an asset entry; a missing key is a no-op.
    pub fn remove_asset(&mut self, key: &str) -> bool {
        let removed = self.balance_sheet.remove_asset(key);
        if removed {
            self.touch();
        }
        removed
    }

    /// Removes a liability entry; a missing key is a no-op.
    pub fn remove_liability(&mut self, key: &str) -> bool {
        let removed = self.balance_sheet.remove_liability(key);
        if removed {
            self.touch();
        }
        removed
    }

    /// Records the number of children and materializes the derived expense
    /// `per_child_expense = child_unit_cost * count` as an ordinary expense
    /// entry, so every aggregate sees it without special cases. A count of
    /// zero writes an explicit zero entry.
    pub fn set_children(&mut self, count: u32) {
        debug!(count, unit_cost = self.child_unit_cost, "children set");
        self.children = count;
        self.income_statement
            .set_expense(PER_CHILD_EXPENSE_KEY, self.child_unit_cost * f64::from(count));
        self.touch();
    }

    pub fn total_income(&self) -> f64 {
        self.income_statement.total_income()
    }

    pub fn total_expenses(&self) -> f64 {
        self.income_statement.total_expenses()
    }

    pub fn passive_income(&self) -> f64 {
        self.income_statement.passive_income()
    }

    pub fn cash_flow(&self) -> f64 {
        self.income_statement.cash_flow()
    }

    pub fn total_assets(&self) -> f64 {
        self.balance_sheet.total_assets()
    }

    pub fn total_liabilities(&self) -> f64 {
        self.balance_sheet.total_liabilities()
    }

    pub fn net_worth(&self) -> f64 {
        self.balance_sheet.net_worth()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for FinancialStatement {
    fn default() -> Self {
        Self::new()
    }
}
