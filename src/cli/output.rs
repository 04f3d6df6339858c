//! Styled terminal output shared by the shell and the command handlers.

use std::fmt;
use std::sync::{OnceLock, RwLock};

use colored::Colorize;

const RULE: &str = "----------------------------------------";

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
    Separator,
}

impl MessageKind {
    fn tag(self) -> &'static str {
        match self {
            MessageKind::Success => "[ok] ",
            MessageKind::Warning => "[!] ",
            MessageKind::Error => "[x] ",
            MessageKind::Info | MessageKind::Section | MessageKind::Separator => "",
        }
    }

    fn paint(self, text: String) -> String {
        match self {
            MessageKind::Success => text.bright_green().to_string(),
            MessageKind::Warning => text.bright_yellow().to_string(),
            MessageKind::Error => text.bright_red().to_string(),
            MessageKind::Section => text.bold().to_string(),
            MessageKind::Info | MessageKind::Separator => text,
        }
    }
}

/// Process-wide rendering switches. Script mode turns on `plain_mode` so
/// piped output stays free of ANSI styling.
#[derive(Clone, Copy, Debug, Default)]
pub struct OutputPreferences {
    pub plain_mode: bool,
    pub quiet_mode: bool,
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

fn prefs_cell() -> &'static RwLock<OutputPreferences> {
    PREFERENCES.get_or_init(RwLock::default)
}

pub fn set_preferences(prefs: OutputPreferences) {
    if let Ok(mut guard) = prefs_cell().write() {
        *guard = prefs;
    }
}

fn current() -> OutputPreferences {
    prefs_cell().read().map(|guard| *guard).unwrap_or_default()
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let prefs = current();
    if prefs.quiet_mode && kind == MessageKind::Separator {
        return;
    }

    let body = match kind {
        MessageKind::Section => format!("=== {} ===", message.to_string().trim()),
        MessageKind::Separator => RULE.to_string(),
        _ => format!("{}{}", kind.tag(), message),
    };
    let rendered = if prefs.plain_mode {
        body
    } else {
        kind.paint(body)
    };

    match kind {
        MessageKind::Section | MessageKind::Separator => println!("\n{rendered}"),
        _ => println!("{rendered}"),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

pub fn separator() {
    print(MessageKind::Separator, "");
}
