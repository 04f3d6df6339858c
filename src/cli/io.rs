//! Prompt and message helpers used by interactive command handlers.

use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::cli::core::CommandError;
use crate::cli::output::{print, MessageKind};
use crate::locale::parse_amount;

pub fn print_info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn print_success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn print_warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn print_error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

/// Yes/no confirmation with a default answer.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}

/// Free-form text input; an empty answer is allowed and returned as-is.
pub fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> Result<String, CommandError> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(CommandError::from)
}

/// Amount input through the tolerant numeric coercion: comma decimals are
/// accepted and junk becomes 0.
pub fn prompt_amount(theme: &ColorfulTheme, prompt: &str) -> Result<f64, CommandError> {
    let text = prompt_text(theme, prompt)?;
    Ok(parse_amount(&text))
}
