use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::core::FileRecord;

pub const JSON_FILE_NAME: &str = "data.json";

/// Overwrite `path` with every record as a pretty JSON array.
///
/// Uses 2-space indentation and adds a trailing newline.
pub fn write_json(path: &Path, records: &[FileRecord]) -> Result<()> {
    let content = serde_json::to_string_pretty(records).context("Failed to serialize JSON")?;
    fs::write(path, format!("{}\n", content))
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
