//! Output rendering and writing (`KEY=VALUE` environment files)

pub mod dotenv;
pub mod writer;

pub use dotenv::render_document;
pub use writer::{write_env_file, ConfigWriter};
