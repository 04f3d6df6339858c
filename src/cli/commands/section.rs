//! Category commands for the four statement sections.

use std::collections::BTreeMap;

use dialoguer::Select;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::menus::{
    menu_error_to_command_error, Picker, PickerItem, PickerOutcome, SECTION_MENU_HINT,
};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::locale::parse_amount;
use crate::statement::{FinancialStatement, Section};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "income",
            "Manage income categories",
            "income <set|add|edit|remove|list> [category] [amount]",
            cmd_income,
        ),
        CommandEntry::new(
            "expense",
            "Manage expense categories",
            "expense <set|add|edit|remove|list> [category] [amount]",
            cmd_expense,
        ),
        CommandEntry::new(
            "asset",
            "Manage assets",
            "asset <set|remove|list> [category] [amount]",
            cmd_asset,
        ),
        CommandEntry::new(
            "liability",
            "Manage liabilities",
            "liability <set|remove|list> [category] [amount]",
            cmd_liability,
        ),
    ]
}

fn cmd_income(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    run_section(context, Section::Income, args)
}

fn cmd_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    run_section(context, Section::Expense, args)
}

fn cmd_asset(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    run_section(context, Section::Asset, args)
}

fn cmd_liability(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    run_section(context, Section::Liability, args)
}

fn run_section(context: &mut ShellContext, section: Section, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        if context.can_prompt() {
            return run_section_menu(context, section);
        }
        return Err(CommandError::InvalidArguments(usage(section)));
    }

    let Some((action, rest)) = args.split_first() else {
        return Err(CommandError::InvalidArguments(usage(section)));
    };
    dispatch_action(context, section, action, rest)
}

fn dispatch_action(
    context: &mut ShellContext,
    section: Section,
    action: &str,
    args: &[&str],
) -> CommandResult {
    match action.to_ascii_lowercase().as_str() {
        "set" => handle_set(context, section, args),
        "add" if supports_guarded_edits(section) => handle_add(context, section, args),
        "edit" if supports_guarded_edits(section) => handle_edit(context, section, args),
        "remove" => handle_remove(context, section, args),
        "list" => handle_list(context, section),
        other => Err(unknown_action(section, other)),
    }
}

/// The income statement keeps the original create/edit split; the balance
/// sheet only ever overwrites.
fn supports_guarded_edits(section: Section) -> bool {
    matches!(section, Section::Income | Section::Expense)
}

fn command_name(section: Section) -> &'static str {
    match section {
        Section::Income => "income",
        Section::Expense => "expense",
        Section::Asset => "asset",
        Section::Liability => "liability",
    }
}

fn noun(section: Section) -> &'static str {
    match section {
        Section::Income => "income category",
        Section::Expense => "expense category",
        Section::Asset => "asset",
        Section::Liability => "liability",
    }
}

fn usage(section: Section) -> String {
    if supports_guarded_edits(section) {
        format!(
            "usage: {} <set|add|edit|remove|list> [category] [amount]",
            command_name(section)
        )
    } else {
        format!(
            "usage: {} <set|remove|list> [category] [amount]",
            command_name(section)
        )
    }
}

fn unknown_action(section: Section, action: &str) -> CommandError {
    CommandError::InvalidArguments(format!(
        "unknown {} action `{}`. {}",
        command_name(section),
        action,
        usage(section)
    ))
}

pub(crate) fn section_map(statement: &FinancialStatement, section: Section) -> &BTreeMap<String, f64> {
    match section {
        Section::Income => &statement.income_statement.incomes,
        Section::Expense => &statement.income_statement.expenses,
        Section::Asset => &statement.balance_sheet.assets,
        Section::Liability => &statement.balance_sheet.liabilities,
    }
}

pub(crate) fn section_total(statement: &FinancialStatement, section: Section) -> f64 {
    match section {
        Section::Income => statement.total_income(),
        Section::Expense => statement.total_expenses(),
        Section::Asset => statement.total_assets(),
        Section::Liability => statement.total_liabilities(),
    }
}

fn apply_set(statement: &mut FinancialStatement, section: Section, key: &str, amount: f64) {
    match section {
        Section::Income => statement.update_income(key, amount),
        Section::Expense => statement.update_expense(key, amount),
        Section::Asset => statement.update_asset(key, amount),
        Section::Liability => statement.update_liability(key, amount),
    }
}

fn apply_edit(statement: &mut FinancialStatement, section: Section, key: &str, amount: f64) -> bool {
    match section {
        Section::Income => statement.edit_income(key, amount),
        Section::Expense => statement.edit_expense(key, amount),
        Section::Asset | Section::Liability => false,
    }
}

fn apply_remove(statement: &mut FinancialStatement, section: Section, key: &str) -> bool {
    match section {
        Section::Income => statement.remove_income(key),
        Section::Expense => statement.remove_expense(key),
        Section::Asset => statement.remove_asset(key),
        Section::Liability => statement.remove_liability(key),
    }
}

fn handle_set(context: &mut ShellContext, section: Section, args: &[&str]) -> CommandResult {
    let Some((category, amount)) = resolve_category_amount(context, section, args)? else {
        return Ok(());
    };
    apply_set(&mut context.statement, section, &category, amount);
    io::print_success(format!(
        "Set {} `{}` to {}.",
        noun(section),
        category,
        context.format_amount(amount)
    ));
    Ok(())
}

fn handle_add(context: &mut ShellContext, section: Section, args: &[&str]) -> CommandResult {
    let Some((category, amount)) = resolve_category_amount(context, section, args)? else {
        return Ok(());
    };
    if matches!(section, Section::Income) {
        context.statement.add_income(&category, amount);
    } else {
        context.statement.add_expense(&category, amount);
    }
    io::print_success(format!(
        "Set {} `{}` to {}.",
        noun(section),
        category,
        context.format_amount(amount)
    ));
    Ok(())
}

fn handle_edit(context: &mut ShellContext, section: Section, args: &[&str]) -> CommandResult {
    let Some((category, amount)) = resolve_category_amount(context, section, args)? else {
        return Ok(());
    };
    if apply_edit(&mut context.statement, section, &category, amount) {
        io::print_success(format!(
            "Updated {} `{}` to {}.",
            noun(section),
            category,
            context.format_amount(amount)
        ));
    } else {
        io::print_warning(format!("No {} `{}` to edit.", noun(section), category));
    }
    Ok(())
}

fn handle_remove(context: &mut ShellContext, section: Section, args: &[&str]) -> CommandResult {
    let Some(category) = resolve_category(context, section, args)? else {
        return Ok(());
    };
    if apply_remove(&mut context.statement, section, &category) {
        io::print_success(format!("Removed {} `{}`.", noun(section), category));
    } else {
        io::print_warning(format!("No {} `{}` to remove.", noun(section), category));
    }
    Ok(())
}

fn handle_list(context: &mut ShellContext, section: Section) -> CommandResult {
    output::section(section.title());
    let map = section_map(&context.statement, section);
    if map.is_empty() {
        output::info("  (no entries)");
    } else {
        let width = map
            .keys()
            .map(|key| section.label_for(key).len())
            .max()
            .unwrap_or(0);
        for (key, amount) in map {
            output::info(format!(
                "  {:<width$}  {:>14}",
                section.label_for(key),
                context.format_amount(*amount),
                width = width
            ));
        }
    }
    output::info(format!(
        "  Total: {}",
        context.format_amount(section_total(&context.statement, section))
    ));
    Ok(())
}

fn run_section_menu(context: &mut ShellContext, section: Section) -> CommandResult {
    let title = format!(
        "{} · total {}",
        section.title(),
        context.format_amount(section_total(&context.statement, section))
    );

    let mut items = vec![PickerItem::new("set", format!("Set a {}", noun(section)))];
    if supports_guarded_edits(section) {
        items.push(PickerItem::new(
            "edit",
            format!("Edit an existing {}", noun(section)),
        ));
    }
    items.push(PickerItem::new(
        "remove",
        format!("Remove a {}", noun(section)),
    ));
    items.push(PickerItem::new("list", "List current entries"));

    let outcome = Picker::list(title, SECTION_MENU_HINT, items)
        .run()
        .map_err(menu_error_to_command_error)?;
    match outcome {
        PickerOutcome::Chosen(action) => dispatch_action(context, section, &action, &[]),
        _ => Ok(()),
    }
}

/// Resolves `[category] [amount]` positionally, prompting for whatever is
/// missing when the session is interactive. `None` means the user backed out.
fn resolve_category_amount(
    context: &ShellContext,
    section: Section,
    args: &[&str],
) -> Result<Option<(String, f64)>, CommandError> {
    if args.is_empty() {
        if !context.can_prompt() {
            return Err(CommandError::InvalidArguments(usage(section)));
        }
        let Some(category) = prompt_category(context, section)? else {
            return Ok(None);
        };
        let amount = io::prompt_amount(&context.theme, "Amount")?;
        return Ok(Some((category, amount)));
    }

    if args.len() == 1 {
        if !context.can_prompt() {
            return Err(CommandError::InvalidArguments(usage(section)));
        }
        let amount = io::prompt_amount(&context.theme, "Amount")?;
        return Ok(Some((args[0].to_string(), amount)));
    }

    let Some((amount_token, category_tokens)) = args.split_last() else {
        return Err(CommandError::InvalidArguments(usage(section)));
    };
    Ok(Some((category_tokens.join(" "), parse_amount(amount_token))))
}

fn resolve_category(
    context: &ShellContext,
    section: Section,
    args: &[&str],
) -> Result<Option<String>, CommandError> {
    if args.is_empty() {
        if !context.can_prompt() {
            return Err(CommandError::InvalidArguments(usage(section)));
        }
        return prompt_category(context, section);
    }
    Ok(Some(args.join(" ")))
}

/// Offers the section's well-known categories plus a free-text escape hatch.
fn prompt_category(
    context: &ShellContext,
    section: Section,
) -> Result<Option<String>, CommandError> {
    let catalog = section.catalog();
    let mut items: Vec<String> = catalog.iter().map(|def| def.label.to_string()).collect();
    items.push("Other (type a key)".to_string());

    let choice = Select::with_theme(&context.theme)
        .with_prompt(format!("{} category", section.title()))
        .items(&items)
        .default(0)
        .interact_opt()?;

    let Some(index) = choice else {
        return Ok(None);
    };
    if index < catalog.len() {
        return Ok(Some(catalog[index].key.to_string()));
    }

    let key = io::prompt_text(&context.theme, "Category key")?;
    let key = key.trim().to_string();
    if key.is_empty() {
        io::print_info("Operation cancelled.");
        return Ok(None);
    }
    Ok(Some(key))
}
