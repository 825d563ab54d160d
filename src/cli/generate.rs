//! The run-once generate flow

use anyhow::Result;
use std::path::Path;

use crate::config::{BuiltinValues, ValueSource};
use crate::domain::{CONFIRMATION_MESSAGE, ENV_FILE_NAME};
use crate::render::ConfigWriter;

pub fn run() -> Result<()> {
    let source = BuiltinValues;
    tracing::debug!("Loading {}", source.describe());

    let writer = ConfigWriter::new(source.load()?);
    let content = writer.render()?;
    writer.write(Path::new(ENV_FILE_NAME), &content)?;

    println!("{}", CONFIRMATION_MESSAGE);
    Ok(())
}
