//! Whole-statement commands: the summary report, JSON export, and the
//! household children count.

use crate::cli::commands::section::section_map;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::locale::parse_amount;
use crate::statement::{Section, PER_CHILD_EXPENSE_KEY};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "children",
            "Set the number of children in the household",
            "children <count>",
            cmd_children,
        ),
        CommandEntry::new(
            "summary",
            "Show the full financial statement",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new(
            "export",
            "Print the statement as JSON",
            "export",
            cmd_export,
        ),
    ]
}

fn cmd_children(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let token = match args.first() {
        Some(token) => (*token).to_string(),
        None => {
            if !context.can_prompt() {
                return Err(CommandError::InvalidArguments("usage: children <count>".into()));
            }
            io::prompt_text(&context.theme, "Number of children")?
        }
    };

    // Same tolerant coercion as amounts: junk reads as 0, fractions
    // truncate, negatives clamp to 0.
    let count = parse_amount(&token).max(0.0) as u32;

    context.statement.set_children(count);
    let materialized = context
        .statement
        .income_statement
        .expenses
        .get(PER_CHILD_EXPENSE_KEY)
        .copied()
        .unwrap_or(0.0);
    io::print_success(format!(
        "Children set to {}. Child expenses are now {}.",
        count,
        context.format_amount(materialized)
    ));
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    for section in [
        Section::Income,
        Section::Expense,
        Section::Asset,
        Section::Liability,
    ] {
        print_section(context, section);
    }

    output::section("Overview");
    let rows = [
        ("Total income", context.statement.total_income()),
        ("Passive income", context.statement.passive_income()),
        ("Total expenses", context.statement.total_expenses()),
        ("Cash flow", context.statement.cash_flow()),
        ("Total assets", context.statement.total_assets()),
        ("Total liabilities", context.statement.total_liabilities()),
        ("Net worth", context.statement.net_worth()),
    ];
    for (label, value) in rows {
        output::info(format!(
            "  {:<17} {:>16}",
            label,
            context.format_amount(value)
        ));
    }
    if context.statement.children > 0 {
        output::info(format!("  {:<17} {:>16}", "Children", context.statement.children));
    }

    output::separator();
    output::info(format!(
        "Updated {}",
        context.statement.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));
    Ok(())
}

fn print_section(context: &ShellContext, section: Section) {
    output::section(section.title());
    let map = section_map(&context.statement, section);
    if map.is_empty() {
        output::info("  (no entries)");
        return;
    }

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

fn cmd_export(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let json = serde_json::to_string_pretty(&context.statement)?;
    output::info(json);
    Ok(())
}
