//! Masking of secret values before they reach log output

pub mod rules;

use rules::{SECRET_KEY_NAME, VALUE_RULES};

const KEY_NAME_REPLACEMENT: &str = "[SECRET_REDACTED]";

/// Return a loggable form of `value`.
///
/// Value rules run first so a Stripe key keeps its specific marker even when
/// its key name would also trigger the generic one.
pub fn mask_value(key: &str, value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    if let Some(rule) = VALUE_RULES.iter().find(|rule| rule.pattern.is_match(value)) {
        return rule.replacement.to_string();
    }

    if SECRET_KEY_NAME.is_match(key) {
        return KEY_NAME_REPLACEMENT.to_string();
    }

    value.to_string()
}
