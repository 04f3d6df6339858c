use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub fn print_overview(registry: &CommandRegistry) {
    output::section("Commands");
    let width = registry
        .list()
        .map(|entry| entry.name.len())
        .max()
        .unwrap_or(0);
    for entry in registry.list() {
        io::print_info(format!(
            "  {:<width$}  {}",
            entry.name,
            entry.description,
            width = width
        ));
    }
    io::print_info("`help <command>` shows usage; `menu` opens the menu.");
}

pub fn print_command(entry: &CommandEntry) {
    output::section(entry.name);
    io::print_info(format!("  {}", entry.description));
    io::print_info(format!("  Usage: {}", entry.usage));
}
