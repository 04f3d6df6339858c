//! Locale-aware amount parsing and rendering.
//!
//! The statement model works on exact `f64` values; this module owns the
//! text edge. Coercion is deliberately total: user input that cannot be
//! read as a number becomes 0.0, matching the tolerant data-entry contract
//! of the statement itself.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

/// Built-in presets selectable from configuration.
pub static LOCALE_PRESETS: Lazy<Vec<LocaleConfig>> = Lazy::new(|| {
    vec![
        LocaleConfig::default(),
        LocaleConfig {
            language_tag: "ru-RU".into(),
            decimal_separator: ',',
            grouping_separator: ' ',
        },
        LocaleConfig {
            language_tag: "de-DE".into(),
            decimal_separator: ',',
            grouping_separator: '.',
        },
    ]
});

impl LocaleConfig {
    /// Resolves a preset by language tag; unknown tags fall back to the
    /// default locale.
    pub fn named(tag: &str) -> Self {
        LOCALE_PRESETS
            .iter()
            .find(|preset| preset.language_tag.eq_ignore_ascii_case(tag))
            .cloned()
            .unwrap_or_default()
    }

    pub fn preset_tags() -> Vec<&'static str> {
        LOCALE_PRESETS
            .iter()
            .map(|preset| preset.language_tag.as_str())
            .collect()
    }
}

/// Coerces user-entered text to an amount.
///
/// Whitespace (including grouping spaces) is stripped. Either `.` or `,`
/// is accepted as the decimal mark; when both appear, the rightmost one
/// is the decimal mark and the other is grouping. A lone `,` reads as a
/// decimal mark. Empty and non-numeric input coerce to 0.0. Never an
/// error.
pub fn parse_amount(text: &str) -> f64 {
    let cleaned: String = text.chars().filter(|ch| !ch.is_whitespace()).collect();
    if cleaned.is_empty() {
        return 0.0;
    }
    let normalized = match (cleaned.rfind('.'), cleaned.rfind(',')) {
        (Some(dot), Some(comma)) if comma > dot => cleaned.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => cleaned.replace(',', ""),
        (None, Some(_)) => cleaned.replace(',', "."),
        _ => cleaned,
    };
    normalized.parse::<f64>().unwrap_or(0.0)
}

/// Renders a value with fixed `precision` decimals, the locale's decimal
/// mark, and grouping separators every three integer digits.
pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let fixed = format!("{value:.prec$}", prec = precision as usize);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (fixed.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut out = String::with_capacity(fixed.len() + digits.len() / 3);
    out.push_str(sign);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (digits.len() - idx) % 3 == 0 {
            out.push(locale.grouping_separator);
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push(locale.decimal_separator);
        out.push_str(frac);
    }
    out
}

/// Two-decimal amount with a trailing currency code, e.g. `3 800,00 USD`.
pub fn format_amount(locale: &LocaleConfig, currency: &str, value: f64) -> String {
    format!("{} {}", format_number(locale, value, 2), currency)
}
