use std::{
    fs::OpenOptions,
    io::Write,
    path::Path,
};

use anyhow::{Context, Result};

use crate::core::{Phase, PendingCounts};

pub const CSV_FILE_NAME: &str = "data.csv";

pub fn csv_header() -> String {
    let mut columns = vec!["date".to_string()];
    columns.extend(Phase::ALL.iter().map(|phase| phase.key()));
    columns.join(",")
}

pub fn csv_row(timestamp: i64, counts: &PendingCounts) -> String {
    let mut fields = vec![timestamp.to_string()];
    fields.extend(counts.0.iter().map(usize::to_string));
    fields.join(",")
}

/// Append one burndown row, writing the header first if the file is new.
///
/// Existing rows are never touched.
pub fn append_csv(path: &Path, timestamp: i64, counts: &PendingCounts) -> Result<()> {
    let is_new = !path.exists();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;

    let mut content = String::new();
    if is_new {
        content.push_str(&csv_header());
        content.push('\n');
    }
    content.push_str(&csv_row(timestamp, counts));
    content.push('\n');

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
