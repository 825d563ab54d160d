//! `KEY=VALUE` rendering.

use crate::domain::ConfigDocument;

/// Render `doc` as an environment file.
///
/// Each section is a `# heading` line followed by its entries; sections are
/// separated by one blank line. Every line, including the last, ends in `\n`.
pub fn render_document(doc: &ConfigDocument) -> String {
    let mut out = String::new();

    for (i, section) in doc.sections().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("# {}\n", section.heading));
        for entry in &section.entries {
            out.push_str(&format!("{}={}\n", entry.key, entry.value));
        }
    }

    out
}
