#![doc(test(attr(deny(warnings))))]

//! Cashflow Core models a personal financial statement (income statement
//! plus balance sheet) and powers the interactive `cashflow_cli` shell
//! built on top of it.

pub mod cli;
pub mod config;
pub mod errors;
pub mod locale;
pub mod statement;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Cashflow Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
