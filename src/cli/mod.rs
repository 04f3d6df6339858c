//! Interactive shell and script-mode command pipeline.

pub mod commands;
pub mod core;
pub mod help;
pub mod io;
pub mod menus;
pub mod output;
pub mod registry;
pub mod shell;

pub use shell::run_cli;
