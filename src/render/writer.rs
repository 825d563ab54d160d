//! Writing the rendered environment file to disk.

use crate::domain::{ConfigDocument, DocumentError, EnvValues};
use crate::redact::mask_value;
use crate::render::render_document;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Renders a fixed set of values and persists them as an environment file.
#[derive(Debug, Clone, Default)]
pub struct ConfigWriter {
    values: EnvValues,
}

impl ConfigWriter {
    pub fn new(values: EnvValues) -> Self {
        Self { values }
    }

    pub fn render(&self) -> Result<String, DocumentError> {
        let doc = ConfigDocument::from_values(&self.values)?;
        for entry in doc.entries() {
            tracing::debug!(
                key = %entry.key,
                len = entry.value.len(),
                value = %mask_value(&entry.key, &entry.value),
                "Rendering entry"
            );
        }
        Ok(render_document(&doc))
    }

    pub fn write(&self, path: &Path, content: &str) -> Result<()> {
        write_env_file(path, content)
    }
}

/// Create or truncate `path` and write `content` to it.
///
/// The file handle is dropped on every return path. No backup is taken and
/// the write is not atomic: on failure the file may be absent or partial.
pub fn write_env_file(path: &Path, content: &str) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to open {} for writing", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed writing {}", path.display()))?;
    file.flush().with_context(|| format!("Failed flushing {}", path.display()))?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote environment file");
    Ok(())
}
