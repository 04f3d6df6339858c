use crate::cli::core::{CommandError, CommandResult, LoopControl, ShellContext};
use crate::cli::help;
use crate::cli::io;
use crate::cli::menus::{
    self, menu_error_to_command_error, Picker, PickerOutcome, PrefixMatch,
};
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("menu", "Open the interactive menu", "menu", cmd_menu),
        CommandEntry::new("help", "Show available commands", "help [command]", cmd_help),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_menu(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if !context.can_prompt() {
        return Err(CommandError::InvalidArguments(
            "menu is only available in interactive mode".into(),
        ));
    }

    let mut notice: Option<String> = None;
    let line = loop {
        let mut picker = Picker::with_type_ahead(
            context.banner(),
            menus::MAIN_MENU_HINT,
            menus::main_menu_items(&context.registry),
        );
        if let Some(text) = notice.take() {
            picker.set_notice(text);
        }
        match picker.run().map_err(menu_error_to_command_error)? {
            PickerOutcome::Dismissed => return Ok(()),
            PickerOutcome::Chosen(command) => break command,
            PickerOutcome::Typed(text) => {
                // A full command line with arguments is dispatched as-is;
                // a single word first resolves against the command names.
                if text.contains(char::is_whitespace) {
                    break text;
                }
                match menus::resolve_command_prefix(&text, &context.command_names()) {
                    PrefixMatch::Unique(command) => break command,
                    PrefixMatch::None => break text,
                    PrefixMatch::Ambiguous => {
                        notice =
                            Some(format!("Ambiguous command prefix `{text}`. Keep typing."));
                    }
                }
            }
        }
    };

    let tokens = match shell_words::split(&line) {
        Ok(tokens) => tokens,
        Err(err) => {
            context.print_warning(&err.to_string());
            return Ok(());
        }
    };
    let Some((command, rest)) = tokens.split_first() else {
        return Ok(());
    };
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();
    match context.dispatch(&command.to_lowercase(), command, &args)? {
        LoopControl::Exit => Err(CommandError::ExitRequested),
        LoopControl::Continue => Ok(()),
    }
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first().map(|name| name.to_lowercase()) {
        if let Some(entry) = context.command(&name) {
            help::print_command(entry);
        } else {
            context.suggest_command(args[0]);
        }
        return Ok(());
    }

    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output_section(format!("Cashflow Core {}", meta.version));
    io::print_info(format!("  CLI version : {}", build_info::CLI_VERSION));
    io::print_info(format!(
        "  Build hash  : {} ({})",
        meta.git_hash, meta.git_status
    ));
    io::print_info(format!("  Built at    : {}", meta.timestamp));
    io::print_info(format!("  Target      : {}", meta.target));
    io::print_info(format!("  Profile     : {}", meta.profile));
    io::print_info(format!("  Rustc       : {}", meta.rustc));
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
