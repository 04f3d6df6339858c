use std::path::Path;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

fn cashflow_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cashflow_cli").unwrap();
    cmd.env("CASHFLOW_CLI_SCRIPT", "1")
        .env("CASHFLOW_CORE_HOME", home);
    cmd
}

#[test]
fn script_mode_builds_a_statement() {
    let home = tempdir().unwrap();
    cashflow_cmd(home.path())
        .write_stdin(
            "income set salary 3000\n\
             income set interest_dividends 800\n\
             expense set taxes 1950\n\
             summary\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(contains("Total income"))
        .stdout(contains("3,800.00 USD"))
        .stdout(contains("Cash flow"))
        .stdout(contains("1,850.00 USD"));
}

#[test]
fn children_count_shows_up_as_an_expense() {
    let home = tempdir().unwrap();
    cashflow_cmd(home.path())
        .write_stdin("children 2\nsummary\nexit\n")
        .assert()
        .success()
        .stdout(contains("Children set to 2"))
        .stdout(contains("Child expenses"))
        .stdout(contains("200.00 USD"));
}

#[test]
fn removing_a_missing_category_warns_but_succeeds() {
    let home = tempdir().unwrap();
    cashflow_cmd(home.path())
        .write_stdin("income remove salary\nsummary\nexit\n")
        .assert()
        .success()
        .stdout(contains("No income category `salary` to remove"));
}

#[test]
fn unknown_commands_do_not_stop_the_script() {
    let home = tempdir().unwrap();
    cashflow_cmd(home.path())
        .write_stdin("frobnicate\nincome set salary 10\nsummary\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `frobnicate`"))
        .stdout(contains("10.00 USD"));
}

#[test]
fn comma_decimals_are_accepted_from_the_command_line() {
    let home = tempdir().unwrap();
    cashflow_cmd(home.path())
        .write_stdin("income set salary 1234,5\nsummary\nexit\n")
        .assert()
        .success()
        .stdout(contains("1,234.50 USD"));
}

#[test]
fn export_prints_the_statement_as_json() {
    let home = tempdir().unwrap();
    cashflow_cmd(home.path())
        .write_stdin("income set salary 3000\nexport\nexit\n")
        .assert()
        .success()
        .stdout(contains("\"income_statement\""))
        .stdout(contains("\"salary\": 3000.0"));
}

#[test]
fn configured_locale_changes_the_report_formatting() {
    let home = tempdir().unwrap();
    cashflow_cmd(home.path())
        .write_stdin(
            "config set locale ru-RU\n\
             income set salary 41000\n\
             summary\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(contains("41 000,00 USD"));
}

#[test]
fn configuration_persists_between_runs() {
    let home = tempdir().unwrap();

    cashflow_cmd(home.path())
        .write_stdin("config set currency EUR\nexit\n")
        .assert()
        .success()
        .stdout(contains("Currency set to EUR"));

    cashflow_cmd(home.path())
        .write_stdin("income set salary 5\nsummary\nexit\n")
        .assert()
        .success()
        .stdout(contains("5.00 EUR"));
}
