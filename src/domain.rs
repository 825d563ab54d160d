//! Core types for the generated environment file
//!
//! A [`ConfigDocument`] is an ordered list of [`ConfigSection`]s, each holding
//! ordered [`ConfigEntry`] pairs under a heading comment. Documents are built
//! fresh for every run and dropped once the file has been written.

use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

/// Relative path of the file written by the CLI.
pub const ENV_FILE_NAME: &str = ".env";

/// Line printed to stdout after a successful write.
pub const CONFIRMATION_MESSAGE: &str = "Successfully wrote CLEAN .env file";

pub const STRIPE_SECRET_KEY: &str = "sk_test_51SVaSlPZSF0DdZdsot1wVuhubYr7zLtyV5JK522shbflJf2vlEzVoqiLJbuiERzF5yXTRqVKnccTxyCi46f1msHA00RGpWkXvN";
pub const STRIPE_PUBLISHABLE_KEY: &str = "pk_test_51SVaSlPZSF0DdZdshpYD2a9pkPDYjL0CvmkdnNaAl6GQDgPQS86z85t75Fq23rxQx1ywv2eKpYDYYxUD3mTWsO2I00BbEfPiXO";
pub const STRIPE_PRICE_ID: &str = "price_1SX7EjPZSF0DdZds7Xj6bP3w";
pub const CALENDLY_LINK: &str = "https://calendly.com/dr-kishanbhalani-web/c-p-examination-coaching";
pub const DOMAIN: &str = "http://localhost:3000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("Duplicate key '{0}' in environment document")]
    DuplicateKey(String),

    #[error("Value for '{0}' spans multiple lines")]
    MultilineValue(String),

    #[error("Invalid key {0:?}: keys must be non-empty and contain no '=', whitespace or line breaks")]
    InvalidKey(String),
}

/// The values written to the environment file.
///
/// `Default` yields the compiled-in constants. Other value sources (see
/// [`crate::config::ValueSource`]) deserialize into this record; fields they
/// omit keep their built-in value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EnvValues {
    pub stripe_secret_key: String,
    pub stripe_publishable_key: String,
    pub stripe_price_id: String,
    pub calendly_link: String,
    pub domain: String,
}

impl Default for EnvValues {
    fn default() -> Self {
        Self {
            stripe_secret_key: STRIPE_SECRET_KEY.to_string(),
            stripe_publishable_key: STRIPE_PUBLISHABLE_KEY.to_string(),
            stripe_price_id: STRIPE_PRICE_ID.to_string(),
            calendly_link: CALENDLY_LINK.to_string(),
            domain: DOMAIN.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
}

impl ConfigEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSection {
    pub heading: String,
    pub entries: Vec<ConfigEntry>,
}

impl ConfigSection {
    pub fn new(heading: impl Into<String>) -> Self {
        Self { heading: heading.into(), entries: Vec::new() }
    }

    pub fn entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push(ConfigEntry::new(key, value));
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    sections: Vec<ConfigSection>,
}

impl ConfigDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the standard three-section layout from `values`.
    pub fn from_values(values: &EnvValues) -> Result<Self, DocumentError> {
        let mut doc = Self::new();
        doc.push_section(
            ConfigSection::new("Stripe Configuration")
                .entry("STRIPE_SECRET_KEY", &values.stripe_secret_key)
                .entry("STRIPE_PUBLISHABLE_KEY", &values.stripe_publishable_key)
                .entry("STRIPE_PRICE_ID", &values.stripe_price_id),
        )?;
        doc.push_section(
            ConfigSection::new("Calendly Configuration").entry("CALENDLY_LINK", &values.calendly_link),
        )?;
        doc.push_section(
            ConfigSection::new("Domain Configuration (for Stripe redirect)")
                .entry("DOMAIN", &values.domain),
        )?;
        Ok(doc)
    }

    /// Appends a section, rejecting anything that would break the
    /// one-`KEY=VALUE`-per-line format or define a key twice.
    pub fn push_section(&mut self, section: ConfigSection) -> Result<(), DocumentError> {
        {
            let mut seen: HashSet<&str> = self.entries().map(|e| e.key.as_str()).collect();
            for entry in &section.entries {
                if !is_valid_key(&entry.key) {
                    return Err(DocumentError::InvalidKey(entry.key.clone()));
                }
                if entry.value.contains(['\n', '\r']) {
                    return Err(DocumentError::MultilineValue(entry.key.clone()));
                }
                if !seen.insert(entry.key.as_str()) {
                    return Err(DocumentError::DuplicateKey(entry.key.clone()));
                }
            }
        }

        self.sections.push(section);
        Ok(())
    }

    pub fn sections(&self) -> &[ConfigSection] {
        &self.sections
    }

    pub fn entries(&self) -> impl Iterator<Item = &ConfigEntry> {
        self.sections.iter().flat_map(|s| s.entries.iter())
    }
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && !key.contains('=') && !key.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_builtin_constants() {
        let values = EnvValues::default();
        assert_eq!(values.domain, "http://localhost:3000");
        assert_eq!(values.stripe_price_id, STRIPE_PRICE_ID);
        assert!(values.stripe_secret_key.starts_with("sk_test_"));
        assert!(values.stripe_publishable_key.starts_with("pk_test_"));
    }

    #[test]
    fn from_values_keeps_section_and_entry_order() {
        let doc = ConfigDocument::from_values(&EnvValues::default()).expect("document");
        let headings: Vec<&str> = doc.sections().iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(
            headings,
            vec![
                "Stripe Configuration",
                "Calendly Configuration",
                "Domain Configuration (for Stripe redirect)"
            ]
        );
        let keys: Vec<&str> = doc.entries().map(|e| e.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "STRIPE_SECRET_KEY",
                "STRIPE_PUBLISHABLE_KEY",
                "STRIPE_PRICE_ID",
                "CALENDLY_LINK",
                "DOMAIN"
            ]
        );
    }

    #[test]
    fn duplicate_key_across_sections_is_rejected() {
        let mut doc = ConfigDocument::new();
        doc.push_section(ConfigSection::new("A").entry("DOMAIN", "a")).expect("first");
        let err = doc.push_section(ConfigSection::new("B").entry("DOMAIN", "b")).unwrap_err();
        assert_eq!(err, DocumentError::DuplicateKey("DOMAIN".to_string()));
        assert_eq!(doc.sections().len(), 1);
    }

    #[test]
    fn duplicate_key_within_section_is_rejected() {
        let mut doc = ConfigDocument::new();
        let section = ConfigSection::new("A").entry("K", "1").entry("K", "2");
        assert_eq!(doc.push_section(section), Err(DocumentError::DuplicateKey("K".to_string())));
    }

    #[test]
    fn multiline_value_is_rejected() {
        let values = EnvValues { domain: "http://a\nEVIL=1".to_string(), ..EnvValues::default() };
        let err = ConfigDocument::from_values(&values).unwrap_err();
        assert_eq!(err, DocumentError::MultilineValue("DOMAIN".to_string()));

        let mut doc = ConfigDocument::new();
        let carriage = ConfigSection::new("A").entry("K", "a\rb");
        assert!(matches!(doc.push_section(carriage), Err(DocumentError::MultilineValue(_))));
    }

    #[test]
    fn malformed_keys_are_rejected() {
        for key in ["", "A=B", "HAS SPACE", "LINE\nBREAK"] {
            let mut doc = ConfigDocument::new();
            let result = doc.push_section(ConfigSection::new("A").entry(key, "v"));
            assert_eq!(result, Err(DocumentError::InvalidKey(key.to_string())), "key {key:?}");
        }
    }

    #[test]
    fn values_are_not_validated_beyond_line_format() {
        let values = EnvValues {
            stripe_secret_key: String::new(),
            domain: "not a url = at all".to_string(),
            ..EnvValues::default()
        };
        assert!(ConfigDocument::from_values(&values).is_ok());
    }
}
