//! Value source loading

use crate::domain::EnvValues;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Table name accepted as a nested section in value files.
const SECTION_NAME: &str = "clean-env";

pub trait ValueSource {
    /// Short human-readable description, used in logs.
    fn describe(&self) -> String;

    fn load(&self) -> Result<EnvValues>;
}

/// The compiled-in constants.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinValues;

impl ValueSource for BuiltinValues {
    fn describe(&self) -> String {
        "built-in values".to_string()
    }

    fn load(&self) -> Result<EnvValues> {
        Ok(EnvValues::default())
    }
}

/// Values read from a TOML or YAML file. Fields the file omits keep their
/// built-in value.
#[derive(Debug, Clone)]
pub struct FileValues {
    path: PathBuf,
}

impl FileValues {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ValueSource for FileValues {
    fn describe(&self) -> String {
        format!("value file {}", self.path.display())
    }

    fn load(&self) -> Result<EnvValues> {
        load_values(&self.path)
    }
}

pub fn load_values(path: &Path) -> Result<EnvValues> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed reading value file: {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    match ext.as_str() {
        "toml" => parse_toml_values(&content, path),
        "yaml" | "yml" => parse_yaml_values(&content, path),
        other => anyhow::bail!(
            "Unsupported value file extension '.{}' for file {}",
            other,
            path.display()
        ),
    }
}

/// Parse TOML values, accepting either top-level fields or a `[clean-env]` table.
fn parse_toml_values(content: &str, path: &Path) -> Result<EnvValues> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", path.display()))?;

    let values = match raw.get(SECTION_NAME) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    values.try_into().with_context(|| format!("Invalid TOML values: {}", path.display()))
}

/// Parse YAML values, accepting either top-level fields or a `clean-env:` mapping.
fn parse_yaml_values(content: &str, path: &Path) -> Result<EnvValues> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", path.display()))?;

    let values = match raw.get(SECTION_NAME) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(values)
        .with_context(|| format!("Invalid YAML values: {}", path.display()))
}
