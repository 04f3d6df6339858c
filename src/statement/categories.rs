//! Fixed category vocabulary of the financial statement.
//!
//! Keys are stable snake_case identifiers used by the model; labels are the
//! human-facing names the CLI renders. Ad-hoc keys outside the catalog are
//! accepted everywhere and rendered by their raw key.

/// One entry of the category catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDef {
    pub key: &'static str,
    pub label: &'static str,
}

/// Statement sections a category can belong to.
///
/// `mortgage` exists as both an expense (the monthly payment) and a
/// liability (the outstanding principal), so label lookups are always
/// section-scoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Income,
    Expense,
    Asset,
    Liability,
}

impl Section {
    pub fn catalog(self) -> &'static [CategoryDef] {
        match self {
            Section::Income => INCOME_CATEGORIES,
            Section::Expense => EXPENSE_CATEGORIES,
            Section::Asset => ASSET_CATEGORIES,
            Section::Liability => LIABILITY_CATEGORIES,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Income => "Income",
            Section::Expense => "Expenses",
            Section::Asset => "Assets",
            Section::Liability => "Liabilities",
        }
    }

    /// Display label for a key, falling back to the key itself for ad-hoc
    /// categories.
    pub fn label_for<'a>(self, key: &'a str) -> &'a str {
        self.catalog()
            .iter()
            .find(|def| def.key == key)
            .map(|def| def.label)
            .unwrap_or(key)
    }
}

pub const INCOME_CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        key: "salary",
        label: "Salary",
    },
    CategoryDef {
        key: "interest_dividends",
        label: "Interest / Dividends",
    },
    CategoryDef {
        key: "real_estate_income",
        label: "Real estate income",
    },
    CategoryDef {
        key: "business_income",
        label: "Business income",
    },
    CategoryDef {
        key: "other_passive_income",
        label: "Other passive income",
    },
];

pub const EXPENSE_CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        key: "taxes",
        label: "Taxes",
    },
    CategoryDef {
        key: "mortgage",
        label: "Mortgage / Rent",
    },
    CategoryDef {
        key: "school_loan_payment",
        label: "School loan payment",
    },
    CategoryDef {
        key: "car_payment",
        label: "Car payment",
    },
    CategoryDef {
        key: "credit_card_payment",
        label: "Credit card payment",
    },
    CategoryDef {
        key: "retail_payment",
        label: "Retail payment",
    },
    CategoryDef {
        key: "per_child_expense",
        label: "Child expenses",
    },
    CategoryDef {
        key: "other_expenses",
        label: "Other expenses",
    },
    CategoryDef {
        key: "bank_loan_payment",
        label: "Bank loan payment",
    },
];

pub const ASSET_CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        key: "savings",
        label: "Savings",
    },
    CategoryDef {
        key: "real_estate",
        label: "Real estate",
    },
    CategoryDef {
        key: "stocks",
        label: "Stocks / Funds",
    },
    CategoryDef {
        key: "business",
        label: "Business",
    },
    CategoryDef {
        key: "gold",
        label: "Gold / Precious metals",
    },
    CategoryDef {
        key: "other_assets",
        label: "Other assets",
    },
];

pub const LIABILITY_CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        key: "mortgage",
        label: "Mortgage",
    },
    CategoryDef {
        key: "school_loan",
        label: "School loan",
    },
    CategoryDef {
        key: "car_loan",
        label: "Car loan",
    },
    CategoryDef {
        key: "credit_card",
        label: "Credit card debt",
    },
    CategoryDef {
        key: "retail_debt",
        label: "Retail debt",
    },
    CategoryDef {
        key: "bank_loan",
        label: "Bank loan",
    },
    CategoryDef {
        key: "other_liabilities",
        label: "Other liabilities",
    },
];

/// Income categories that count toward passive income. Fixed by the
/// methodology, not user state.
pub const PASSIVE_INCOME_KEYS: &[&str] = &[
    "interest_dividends",
    "real_estate_income",
    "business_income",
    "other_passive_income",
];

/// Expense category backing the per-child derived expense.
pub const PER_CHILD_EXPENSE_KEY: &str = "per_child_expense";

pub fn is_passive(key: &str) -> bool {
    PASSIVE_INCOME_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passive_keys_are_income_categories() {
        for key in PASSIVE_INCOME_KEYS {
            assert!(
                INCOME_CATEGORIES.iter().any(|def| def.key == *key),
                "{key} missing from income catalog"
            );
        }
    }

    #[test]
    fn salary_is_not_passive() {
        assert!(!is_passive("salary"));
        assert!(is_passive("real_estate_income"));
    }

    #[test]
    fn label_lookup_is_section_scoped() {
        assert_eq!(Section::Expense.label_for("mortgage"), "Mortgage / Rent");
        assert_eq!(Section::Liability.label_for("mortgage"), "Mortgage");
    }

    #[test]
    fn unknown_keys_fall_back_to_raw_key() {
        assert_eq!(Section::Income.label_for("consulting"), "consulting");
    }

    #[test]
    fn child_expense_key_is_in_catalog() {
        assert!(EXPENSE_CATEGORIES
            .iter()
            .any(|def| def.key == PER_CHILD_EXPENSE_KEY));
    }
}
