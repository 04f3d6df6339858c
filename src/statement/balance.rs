use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Asset and liability side of a financial statement.
///
/// Same contract as [`super::IncomeStatement`]: absent keys read as zero,
/// every operation is total, totals are recomputed on each call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BalanceSheet {
    #[serde(default)]
    pub assets: BTreeMap<String, f64>,
    #[serde(default)]
    pub liabilities: BTreeMap<String, f64>,
}

impl BalanceSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites an asset category.
    pub fn set_asset(&mut self, key: impl Into<String>, amount: f64) {
        self.assets.insert(key.into(), amount);
    }

    /// Inserts or overwrites a liability category.
    pub fn set_liability(&mut self, key: impl Into<String>, amount: f64) {
        self.liabilities.insert(key.into(), amount);
    }

    /// Removes an asset entry; a missing key is a no-op. Returns whether
    /// an entry existed.
    pub fn remove_asset(&mut self, key: &str) -> bool {
        self.assets.remove(key).is_some()
    }

    /// Removes a liability entry; a missing key is a no-op.
    pub fn remove_liability(&mut self, key: &str) -> bool {
        self.liabilities.remove(key).is_some()
    }

    pub fn total_assets(&self) -> f64 {
        self.assets.values().sum()
    }

    pub fn total_liabilities(&self) -> f64 {
        self.liabilities.values().sum()
    }

    /// Total assets minus total liabilities; negative when debt dominates.
    pub fn net_worth(&self) -> f64 {
        self.total_assets() - self.total_liabilities()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sheet_sums_to_zero() {
        let sheet = BalanceSheet::new();
        assert_eq!(sheet.total_assets(), 0.0);
        assert_eq!(sheet.total_liabilities(), 0.0);
        assert_eq!(sheet.net_worth(), 0.0);
    }

    #[test]
    fn net_worth_subtracts_liabilities() {
        let mut sheet = BalanceSheet::new();
        sheet.set_asset("savings", 5000.0);
        sheet.set_asset("real_estate", 20000.0);
        sheet.set_liability("mortgage", 15000.0);
        assert_eq!(sheet.total_assets(), 25000.0);
        assert_eq!(sheet.total_liabilities(), 15000.0);
        assert_eq!(sheet.net_worth(), 10000.0);
    }

    #[test]
    fn net_worth_may_be_negative() {
        let mut sheet = BalanceSheet::new();
        sheet.set_asset("savings", 1000.0);
        sheet.set_liability("school_loan", 2500.0);
        assert_eq!(sheet.net_worth(), -1500.0);
    }

    #[test]
    fn set_asset_overwrites_existing_amount() {
        let mut sheet = BalanceSheet::new();
        sheet.set_asset("stocks", 4000.0);
        sheet.set_asset("stocks", 5000.0);
        assert_eq!(sheet.total_assets(), 5000.0);
    }

    #[test]
    fn remove_tolerates_missing_keys() {
        let mut sheet = BalanceSheet::new();
        sheet.set_liability("car_loan", 3000.0);
        assert!(!sheet.remove_liability("boat_loan"));
        assert_eq!(sheet.total_liabilities(), 3000.0);
        assert!(sheet.remove_liability("car_loan"));
        assert_eq!(sheet.total_liabilities(), 0.0);
    }
}
