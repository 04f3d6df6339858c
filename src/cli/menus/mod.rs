//! Full-screen menus for the interactive shell, all built on one shared
//! raw-mode list picker.

pub mod picker;

pub use picker::{MenuError, Picker, PickerItem, PickerOutcome};

use crate::cli::core::CommandError;
use crate::cli::registry::CommandRegistry;

pub const MAIN_MENU_HINT: &str =
    "Use ↑/↓ to navigate · Enter to run · ESC to return · Type a command at any time";
pub const SECTION_MENU_HINT: &str = "Use ↑/↓ to navigate · Enter to select · ESC to go back";

pub fn menu_error_to_command_error(err: MenuError) -> CommandError {
    match err {
        MenuError::Interrupted | MenuError::EndOfInput => CommandError::ExitRequested,
        MenuError::Io(io_err) => CommandError::Io(io_err),
    }
}

/// Rows for the top-level menu, one per registered command, with the
/// command word and its description lined up in columns.
pub fn main_menu_items(registry: &CommandRegistry) -> Vec<PickerItem> {
    let width = registry
        .list()
        .map(|entry| entry.name.len())
        .max()
        .unwrap_or(0);
    registry
        .list()
        .map(|entry| {
            PickerItem::new(
                entry.name,
                format!("{:<width$}  {}", entry.name, entry.description, width = width),
            )
        })
        .collect()
}

pub enum PrefixMatch {
    Unique(String),
    Ambiguous,
    None,
}

/// Resolves a typed prefix against the registered command names. An exact
/// name wins even when longer commands share the prefix.
pub fn resolve_command_prefix(input: &str, catalog: &[&str]) -> PrefixMatch {
    let needle = input.to_ascii_lowercase();
    if needle.is_empty() {
        return PrefixMatch::None;
    }

    let mut matches = catalog
        .iter()
        .copied()
        .filter(|name| name.starts_with(needle.as_str()));
    let Some(first) = matches.next() else {
        return PrefixMatch::None;
    };
    if matches.next().is_none() {
        return PrefixMatch::Unique(first.to_string());
    }
    if catalog.iter().any(|name| *name == needle) {
        return PrefixMatch::Unique(needle);
    }
    PrefixMatch::Ambiguous
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &[&str] = &["income", "expense", "export", "exit", "summary"];

    #[test]
    fn unique_prefix_resolves() {
        match resolve_command_prefix("sum", CATALOG) {
            PrefixMatch::Unique(command) => assert_eq!(command, "summary"),
            _ => panic!("expected unique match"),
        }
    }

    #[test]
    fn ambiguous_prefix_is_reported() {
        assert!(matches!(
            resolve_command_prefix("ex", CATALOG),
            PrefixMatch::Ambiguous
        ));
    }

    #[test]
    fn exact_name_wins_over_longer_candidates() {
        match resolve_command_prefix("exit", CATALOG) {
            PrefixMatch::Unique(command) => assert_eq!(command, "exit"),
            _ => panic!("expected unique match"),
        }
    }

    #[test]
    fn unknown_prefix_passes_through() {
        assert!(matches!(
            resolve_command_prefix("zzz", CATALOG),
            PrefixMatch::None
        ));
    }
}
