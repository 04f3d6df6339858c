use cashflow_core::statement::{
    FinancialStatement, IncomeStatement, DEFAULT_CHILD_UNIT_COST, PER_CHILD_EXPENSE_KEY,
};

fn populated_statement() -> FinancialStatement {
    let mut statement = FinancialStatement::new();

    statement.update_income("salary", 3000.0);
    statement.update_income("interest_dividends", 200.0);
    statement.update_income("real_estate_income", 500.0);
    statement.update_income("business_income", 0.0);
    statement.update_income("other_passive_income", 100.0);

    statement.update_expense("taxes", 400.0);
    statement.update_expense("mortgage", 800.0);
    statement.update_expense("school_loan_payment", 100.0);
    statement.update_expense("car_payment", 150.0);
    statement.update_expense("credit_card_payment", 50.0);
    statement.update_expense("retail_payment", 50.0);
    statement.update_expense("per_child_expense", 0.0);
    statement.update_expense("other_expenses", 300.0);
    statement.update_expense("bank_loan_payment", 100.0);

    statement.update_asset("savings", 5000.0);
    statement.update_asset("real_estate", 20000.0);
    statement.update_asset("stocks", 5000.0);
    statement.update_asset("business", 10000.0);
    statement.update_asset("gold", 1000.0);
    statement.update_asset("other_assets", 0.0);

    statement.update_liability("mortgage", 15000.0);
    statement.update_liability("school_loan", 2000.0);
    statement.update_liability("car_loan", 3000.0);
    statement.update_liability("credit_card", 1000.0);
    statement.update_liability("retail_debt", 500.0);
    statement.update_liability("bank_loan", 5000.0);
    statement.update_liability("other_liabilities", 0.0);

    statement
}

#[test]
fn aggregates_match_the_reference_household() {
    let statement = populated_statement();

    assert_eq!(statement.total_income(), 3800.0);
    assert_eq!(statement.passive_income(), 800.0);
    assert_eq!(statement.total_expenses(), 1950.0);
    assert_eq!(statement.cash_flow(), 1850.0);
    assert_eq!(statement.total_assets(), 41000.0);
    assert_eq!(statement.total_liabilities(), 26500.0);
    assert_eq!(statement.net_worth(), 14500.0);
}

#[test]
fn totals_follow_every_overwrite() {
    let mut statement = populated_statement();

    statement.update_income("salary", 3500.0);
    assert_eq!(statement.total_income(), 4300.0);

    statement.update_liability("mortgage", 14000.0);
    assert_eq!(statement.total_liabilities(), 25500.0);
    assert_eq!(statement.net_worth(), 15500.0);
}

#[test]
fn removing_a_missing_income_is_a_silent_no_op() {
    let mut statement = FinancialStatement::new();
    statement.update_income("interest_dividends", 200.0);

    assert!(!statement.remove_income("salary"));
    assert_eq!(statement.total_income(), 200.0);
    assert_eq!(statement.passive_income(), 200.0);
}

#[test]
fn editing_a_missing_category_changes_nothing() {
    let mut statement = FinancialStatement::new();
    statement.add_expense("taxes", 400.0);

    assert!(!statement.edit_expense("mortgage", 800.0));
    assert_eq!(statement.total_expenses(), 400.0);

    assert!(statement.edit_expense("taxes", 450.0));
    assert_eq!(statement.total_expenses(), 450.0);
}

#[test]
fn children_materialize_into_the_expense_map() {
    let mut statement = FinancialStatement::new();
    statement.set_children(3);

    assert_eq!(statement.children, 3);
    assert_eq!(
        statement
            .income_statement
            .expenses
            .get(PER_CHILD_EXPENSE_KEY)
            .copied(),
        Some(3.0 * DEFAULT_CHILD_UNIT_COST)
    );
    assert_eq!(statement.total_expenses(), 300.0);

    statement.set_children(0);
    assert_eq!(
        statement
            .income_statement
            .expenses
            .get(PER_CHILD_EXPENSE_KEY)
            .copied(),
        Some(0.0)
    );
    assert_eq!(statement.total_expenses(), 0.0);
}

#[test]
fn ad_hoc_categories_count_toward_totals() {
    let mut statement = FinancialStatement::new();
    statement.update_income("salary", 3000.0);
    statement.update_income("consulting", 150.0);

    assert_eq!(statement.total_income(), 3150.0);
    assert_eq!(statement.passive_income(), 0.0);
}

#[test]
fn negative_amounts_are_accepted_everywhere() {
    let mut statement = FinancialStatement::new();
    statement.update_expense("taxes", -100.0);
    statement.update_asset("savings", -2500.0);

    assert_eq!(statement.total_expenses(), -100.0);
    assert_eq!(statement.total_assets(), -2500.0);
    assert_eq!(statement.net_worth(), -2500.0);
}

#[test]
fn income_statement_passive_lookup_defaults_to_zero() {
    let mut income = IncomeStatement::new();
    income.set_income("interest_dividends", 200.0);

    // The other three passive categories are absent and contribute nothing.
    assert_eq!(income.passive_income(), 200.0);
    assert_eq!(income.total_income(), 200.0);
}
