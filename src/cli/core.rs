//! Core CLI state, dispatch, and shell context helpers.

use std::io;

use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;

use crate::{
    config::{Config, ConfigManager},
    errors::{CliError, CoreError},
    locale::{self, LocaleConfig},
    statement::FinancialStatement,
};

use super::commands;
use super::io as cli_io;
use super::registry::{CommandEntry, CommandRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Session state shared by every command handler: the in-memory statement,
/// the loaded settings, and the command registry itself.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub statement: FinancialStatement,
    pub config: Config,
    pub config_manager: ConfigManager,
    pub locale: LocaleConfig,
    pub theme: ColorfulTheme,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new().map_err(CliError::from)?;
        Self::with_config_manager(mode, config_manager)
    }

    pub(crate) fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config = config_manager.load().map_err(CliError::from)?;
        let locale = LocaleConfig::named(&config.locale);
        let statement = FinancialStatement::with_child_unit_cost(config.child_unit_cost);

        Ok(Self {
            mode,
            registry,
            statement,
            config,
            config_manager,
            locale,
            theme: ColorfulTheme::default(),
            running: true,
        })
    }

    /// Interactive handlers may prompt; script mode never does.
    pub(crate) fn can_prompt(&self) -> bool {
        self.mode == CliMode::Interactive
    }

    pub(crate) fn prompt(&self) -> String {
        "cashflow> ".to_string()
    }

    /// One-line session header shown above the interactive menu.
    pub(crate) fn banner(&self) -> String {
        format!(
            "Cashflow — cash flow {} · net worth {}",
            self.format_amount(self.statement.cash_flow()),
            self.format_amount(self.statement.net_worth())
        )
    }

    /// Renders an amount with the session locale and configured currency.
    pub(crate) fn format_amount(&self, value: f64) -> String {
        locale::format_amount(&self.locale, &self.config.currency, value)
    }

    /// Re-derives the session locale after a configuration change.
    pub(crate) fn apply_locale(&mut self) {
        self.locale = LocaleConfig::named(&self.config.locale);
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager
            .save(&self.config)
            .map_err(CommandError::from)
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.handler(command) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{input}`. Run `help` for the command list."
        ));

        let closest = self
            .registry
            .names()
            .map(|name| (levenshtein(name, input), name))
            .min_by_key(|(distance, _)| *distance);
        if let Some((distance, name)) = closest {
            if distance <= 3 {
                cli_io::print_info(format!("Did you mean `{name}`?"));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit shell?", true).map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                self.print_error(&message);
                self.print_hint("See `help <command>` for usage.");
            }
            other => self.print_error(&other.to_string()),
        }
        Ok(())
    }

    pub(crate) fn print_error(&self, message: &str) {
        cli_io::print_error(message);
    }

    pub(crate) fn print_warning(&self, message: &str) {
        cli_io::print_warning(message);
    }

    pub(crate) fn print_hint(&self, message: &str) {
        cli_io::print_info(message);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

#[cfg(test)]
pub(crate) fn process_script(lines: &[&str]) -> Result<ShellContext, CliError> {
    let base = tempfile::tempdir().expect("temp dir").into_path();
    let manager = ConfigManager::with_base_dir(base).map_err(CliError::from)?;
    let mut app = ShellContext::with_config_manager(CliMode::Script, manager)?;
    for line in lines {
        match crate::cli::shell::dispatch_line(&mut app, line)? {
            LoopControl::Continue => {}
            LoopControl::Exit => break,
        }
    }
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::PER_CHILD_EXPENSE_KEY;

    #[test]
    fn quoted_categories_survive_tokenization() {
        let context = process_script(&["income set \"side hustle\" 250", "exit"]).unwrap();
        assert_eq!(
            context
                .statement
                .income_statement
                .incomes
                .get("side hustle")
                .copied(),
            Some(250.0)
        );
    }

    #[test]
    fn script_runner_populates_the_statement() {
        let context = process_script(&[
            "income set salary 3000",
            "income set interest_dividends 200",
            "expense set taxes 400",
            "asset set savings 5000",
            "liability set mortgage 15000",
            "exit",
        ])
        .unwrap();
        assert_eq!(context.statement.total_income(), 3200.0);
        assert_eq!(context.statement.total_expenses(), 400.0);
        assert_eq!(context.statement.total_assets(), 5000.0);
        assert_eq!(context.statement.total_liabilities(), 15000.0);
        assert_eq!(context.statement.net_worth(), -10000.0);
    }

    #[test]
    fn script_runner_accepts_comma_decimals() {
        let context = process_script(&["income set salary 1234,5", "exit"]).unwrap();
        assert_eq!(context.statement.total_income(), 1234.5);
    }

    #[test]
    fn children_command_materializes_the_expense() {
        let context = process_script(&["children 2", "exit"]).unwrap();
        assert_eq!(context.statement.children, 2);
        assert_eq!(
            context
                .statement
                .income_statement
                .expenses
                .get(PER_CHILD_EXPENSE_KEY)
                .copied(),
            Some(200.0)
        );
    }

    #[test]
    fn children_input_coerces_like_amounts() {
        let context = process_script(&["children nonsense", "exit"]).unwrap();
        assert_eq!(context.statement.children, 0);
        assert_eq!(context.statement.total_expenses(), 0.0);

        let context = process_script(&["children 2,0", "exit"]).unwrap();
        assert_eq!(context.statement.children, 2);
        assert_eq!(context.statement.total_expenses(), 200.0);
    }

    #[test]
    fn removing_a_missing_category_keeps_the_session_alive() {
        let context = process_script(&[
            "income set salary 3000",
            "income remove royalties",
            "exit",
        ])
        .unwrap();
        assert_eq!(context.statement.total_income(), 3000.0);
    }

    #[test]
    fn unknown_commands_do_not_abort_the_script() {
        let context = process_script(&["frobnicate", "income set salary 10", "exit"]).unwrap();
        assert_eq!(context.statement.total_income(), 10.0);
    }

    #[test]
    fn edit_only_touches_existing_categories() {
        let context = process_script(&[
            "income add salary 3000",
            "income edit salary 3500",
            "income edit bonus 9999",
            "exit",
        ])
        .unwrap();
        assert_eq!(context.statement.total_income(), 3500.0);
    }

    #[test]
    fn config_set_updates_locale_and_unit_cost() {
        let context = process_script(&[
            "config set locale ru-RU",
            "config set child_unit_cost 250",
            "children 2",
            "exit",
        ])
        .unwrap();
        assert_eq!(context.locale.language_tag, "ru-RU");
        assert_eq!(context.config.child_unit_cost, 250.0);
        assert_eq!(context.statement.total_expenses(), 500.0);
    }
}
