//! Redaction rules
//!
//! ORDER MATTERS: live keys before test keys, both before restricted keys, so
//! the first matching rule names the most specific kind of credential.

use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Clone)]
pub struct RedactionRule {
    pub name: &'static str,
    pub pattern: Regex,
    pub replacement: &'static str,
}

pub static VALUE_RULES: Lazy<Vec<RedactionRule>> = Lazy::new(|| {
    vec![
        // ── Stripe ───────────────────────────────────────────────────────────────
        RedactionRule {
            name: "stripe_key",
            pattern: Regex::new(r"^sk_live_[A-Za-z0-9]{16,}$").expect("valid regex"),
            replacement: "[STRIPE_SECRET_KEY_REDACTED]",
        },
        RedactionRule {
            name: "stripe_test_key",
            pattern: Regex::new(r"^sk_test_[A-Za-z0-9]{16,}$").expect("valid regex"),
            replacement: "[STRIPE_TEST_KEY_REDACTED]",
        },
        RedactionRule {
            name: "stripe_restricted_key",
            pattern: Regex::new(r"^rk_(?:live|test)_[A-Za-z0-9]{16,}$").expect("valid regex"),
            replacement: "[STRIPE_RESTRICTED_KEY_REDACTED]",
        },
    ]
});

/// Key names whose values are masked whatever they look like.
pub static SECRET_KEY_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(secret|token|password|private)").expect("valid regex"));
