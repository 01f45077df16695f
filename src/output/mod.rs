//! Report files written after every run.
//!
//! - `csv`: appended burndown time series (`data.csv`)
//! - `json`: snapshot of every file record (`data.json`)
//! - `table`: fixed-width text table (`data.txt`)

pub mod csv;
pub mod json;
pub mod table;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::info;

use crate::core::{FileRecord, PendingCounts};

/// Paths of the files written by [`write_reports`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub csv: PathBuf,
    pub json: PathBuf,
    pub table: PathBuf,
}

impl ReportPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            csv: dir.join(csv::CSV_FILE_NAME),
            json: dir.join(json::JSON_FILE_NAME),
            table: dir.join(table::TABLE_FILE_NAME),
        }
    }
}

/// Write all three reports into `output_dir`, creating it if needed.
pub fn write_reports(
    output_dir: &Path,
    records: &[FileRecord],
    counts: &PendingCounts,
    timestamp: i64,
) -> Result<ReportPaths> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

    let paths = ReportPaths::in_dir(output_dir);
    csv::append_csv(&paths.csv, timestamp, counts)?;
    json::write_json(&paths.json, records)?;
    table::write_table(&paths.table, records)?;

    info!(dir = %output_dir.display(), files = records.len(), "reports written");
    Ok(paths)
}
