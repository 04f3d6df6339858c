use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::categories::PASSIVE_INCOME_KEYS;

/// Monthly income and expense side of a financial statement.
///
/// Amounts are keyed by category. An absent key reads as zero in every
/// aggregate, so mutations and reads are total: no key lookup, edit or
/// removal ever fails. Amounts may be negative; the model does not
/// validate or round.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncomeStatement {
    #[serde(default)]
    pub incomes: BTreeMap<String, f64>,
    #[serde(default)]
    pub expenses: BTreeMap<String, f64>,
}

impl IncomeStatement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites an income category.
    pub fn set_income(&mut self, key: impl Into<String>, amount: f64) {
        self.incomes.insert(key.into(), amount);
    }

    /// Inserts or overwrites an expense category.
    pub fn set_expense(&mut self, key: impl Into<String>, amount: f64) {
        self.expenses.insert(key.into(), amount);
    }

    /// Creates an income entry; an existing key is overwritten.
    pub fn add_income(&mut self, key: impl Into<String>, amount: f64) {
        self.set_income(key, amount);
    }

    /// Creates an expense entry; an existing key is overwritten.
    pub fn add_expense(&mut self, key: impl Into<String>, amount: f64) {
        self.set_expense(key, amount);
    }

    /// Changes an income entry only when the category already exists;
    /// otherwise leaves the statement untouched. Returns whether a value
    /// was written.
    pub fn edit_income(&mut self, key: &str, amount: f64) -> bool {
        match self.incomes.get_mut(key) {
            Some(value) => {
                *value = amount;
                true
            }
            None => false,
        }
    }

    /// Changes an expense entry only when the category already exists.
    pub fn edit_expense(&mut self, key: &str, amount: f64) -> bool {
        match self.expenses.get_mut(key) {
            Some(value) => {
                *value = amount;
                true
            }
            None => false,
        }
    }

    /// Removes an income entry. A missing key is a no-op, never an error;
    /// the return tells whether an entry existed.
    pub fn remove_income(&mut self, key: &str) -> bool {
        self.incomes.remove(key).is_some()
    }

    /// Removes an expense entry; a missing key is a no-op.
    pub fn remove_expense(&mut self, key: &str) -> bool {
        self.expenses.remove(key).is_some()
    }

    /// Sum of all income categories, recomputed on each call.
    pub fn total_income(&self) -> f64 {
        self.incomes.values().sum()
    }

    /// Sum of all expense categories, recomputed on each call.
    pub fn total_expenses(&self) -> f64 {
        self.expenses.values().sum()
    }

    /// Sum of the fixed passive-income categories. Categories without an
    /// entry contribute zero.
    pub fn passive_income(&self) -> f64 {
        PASSIVE_INCOME_KEYS
            .iter()
            .map(|key| self.incomes.get(*key).copied().unwrap_or(0.0))
            .sum()
    }

    /// Total income minus total expenses; negative when expenses dominate.
    pub fn cash_flow(&self) -> f64 {
        self.total_income() - self.total_expenses()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_statement_sums_to_zero() {
        let statement = IncomeStatement::new();
        assert_eq!(statement.total_income(), 0.0);
        assert_eq!(statement.total_expenses(), 0.0);
        assert_eq!(statement.passive_income(), 0.0);
        assert_eq!(statement.cash_flow(), 0.0);
    }

    #[test]
    fn set_income_overwrites_existing_amount() {
        let mut statement = IncomeStatement::new();
        statement.set_income("salary", 2500.0);
        statement.set_income("salary", 3000.0);
        assert_eq!(statement.total_income(), 3000.0);
    }

    #[test]
    fn passive_income_ignores_active_categories() {
        let mut statement = IncomeStatement::new();
        statement.set_income("salary", 3000.0);
        statement.set_income("interest_dividends", 200.0);
        statement.set_income("real_estate_income", 500.0);
        statement.set_income("business_income", 0.0);
        statement.set_income("other_passive_income", 100.0);
        assert_eq!(statement.total_income(), 3800.0);
        assert_eq!(statement.passive_income(), 800.0);
    }

    #[test]
    fn passive_income_treats_missing_categories_as_zero() {
        let mut statement = IncomeStatement::new();
        statement.set_income("interest_dividends", 150.0);
        assert_eq!(statement.passive_income(), 150.0);
    }

    #[test]
    fn edit_income_is_a_no_op_for_missing_keys() {
        let mut statement = IncomeStatement::new();
        assert!(!statement.edit_income("salary", 9000.0));
        assert!(statement.incomes.is_empty());
        statement.set_income("salary", 3000.0);
        assert!(statement.edit_income("salary", 3200.0));
        assert_eq!(statement.total_income(), 3200.0);
    }

    #[test]
    fn remove_income_tolerates_missing_keys() {
        let mut statement = IncomeStatement::new();
        statement.set_income("salary", 3000.0);
        assert!(!statement.remove_income("royalties"));
        assert_eq!(statement.total_income(), 3000.0);
        assert!(statement.remove_income("salary"));
        assert_eq!(statement.total_income(), 0.0);
    }

    #[test]
    fn cash_flow_may_be_negative() {
        let mut statement = IncomeStatement::new();
        statement.set_income("salary", 1000.0);
        statement.set_expense("taxes", 1500.0);
        assert_eq!(statement.cash_flow(), -500.0);
    }

    #[test]
    fn negative_amounts_are_accepted() {
        let mut statement = IncomeStatement::new();
        statement.set_income("business_income", -250.0);
        assert_eq!(statement.total_income(), -250.0);
        assert_eq!(statement.passive_income(), -250.0);
    }
}
