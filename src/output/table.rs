use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::core::{FileRecord, Phase};

pub const TABLE_FILE_NAME: &str = "data.txt";

const NAME_WIDTH: usize = 40;
const STATUS_WIDTH: usize = 12;
const NAME_TITLE: &str = "File Name";

fn format_row(name: &str, cells: &[String]) -> String {
    let mut row = format!("{:<width$}", name, width = NAME_WIDTH);
    for cell in cells {
        row.push_str(&format!(" {:>width$}", cell, width = STATUS_WIDTH));
    }
    row.push('\n');
    row
}

/// Fixed-width table: a title row, then one row per file.
pub fn render_table(records: &[FileRecord]) -> String {
    let titles: Vec<String> = Phase::ALL.iter().map(|p| p.title().to_string()).collect();
    let mut table = format_row(NAME_TITLE, &titles);
    for record in records {
        let cells: Vec<String> = record.statuses().map(|(_, s)| s.to_string()).collect();
        table.push_str(&format_row(&record.filename, &cells));
    }
    table
}

pub fn write_table(path: &Path, records: &[FileRecord]) -> Result<()> {
    fs::write(path, render_table(records))
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
