use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::locale::{self, LocaleConfig};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change preferences",
        "config [show|set <locale|currency|child_unit_cost> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        return show_config(context);
    }

    match args[0].to_lowercase().as_str() {
        "set" => {
            if args.len() < 3 {
                return Err(CommandError::InvalidArguments(
                    "usage: config set <locale|currency|child_unit_cost> <value>".into(),
                ));
            }
            let value = args[2..].join(" ");
            set_config_value(context, args[1], value.trim())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown config subcommand `{}`. usage: config [show|set <key> <value>]",
            other
        ))),
    }
}

fn show_config(context: &mut ShellContext) -> CommandResult {
    output::section("Configuration");
    output::info(format!("  Locale          : {}", context.config.locale));
    output::info(format!("  Currency        : {}", context.config.currency));
    output::info(format!(
        "  Child unit cost : {}",
        context.format_amount(context.config.child_unit_cost)
    ));
    output::info(format!(
        "  Config file     : {}",
        context.config_manager.path().display()
    ));
    output::info(format!(
        "  Known locales   : {}",
        LocaleConfig::preset_tags().join(", ")
    ));
    Ok(())
}

fn set_config_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    match key.to_lowercase().as_str() {
        "locale" => {
            let tags = LocaleConfig::preset_tags();
            let Some(tag) = tags.iter().find(|tag| tag.eq_ignore_ascii_case(value)) else {
                return Err(CommandError::InvalidArguments(format!(
                    "unknown locale `{}`. Available: {}",
                    value,
                    tags.join(", ")
                )));
            };
            context.config.locale = (*tag).to_string();
            context.apply_locale();
            context.persist_config()?;
            io::print_success(format!("Locale set to {}.", tag));
            Ok(())
        }
        "currency" => {
            let code = value.to_uppercase();
            if code.is_empty() {
                return Err(CommandError::InvalidArguments(
                    "usage: config set currency <code>".into(),
                ));
            }
            context.config.currency = code.clone();
            context.persist_config()?;
            io::print_success(format!("Currency set to {}.", code));
            Ok(())
        }
        "child_unit_cost" | "child-unit-cost" => {
            let amount = locale::parse_amount(value);
            context.config.child_unit_cost = amount;
            context.statement.child_unit_cost = amount;
            if context.statement.children > 0 {
                let children = context.statement.children;
                context.statement.set_children(children);
            }
            context.persist_config()?;
            io::print_success(format!(
                "Child unit cost set to {}.",
                context.format_amount(amount)
            ));
            Ok(())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown config key `{}`. Available: locale, currency, child_unit_cost",
            other
        ))),
    }
}
