use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::{Pattern, glob};
use tracing::debug;

use super::{
    phase::Phase,
    record::{FileRecord, Status},
};

/// Extension of the config option modules carrying marker comments.
pub const SCANNED_EXTENSION: &str = "py";

/// Pending marker count per phase, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PendingCounts(pub [usize; Phase::COUNT]);

impl PendingCounts {
    pub fn get(&self, phase: Phase) -> usize {
        self.0[phase.index()]
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
}

/// Result of scanning the source root.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// One record per file, sorted by file name.
    pub records: Vec<FileRecord>,
    /// Files still carrying each phase's marker, in column order.
    pub pending: [Vec<String>; Phase::COUNT],
    /// Files with no marker left.
    pub done: Vec<String>,
}

impl ScanResult {
    pub fn counts(&self) -> PendingCounts {
        PendingCounts(std::array::from_fn(|i| self.pending[i].len()))
    }

    pub fn pending_files(&self, phase: Phase) -> &[String] {
        &self.pending[phase.index()]
    }
}

/// Scan every `*.py` file directly under `source_root` for marker comments.
///
/// A file is pending for a phase when one of its lines is exactly
/// `# needs:<tag>`. Any unreadable file aborts the scan.
pub fn scan_markers(source_root: &Path) -> Result<ScanResult> {
    if !source_root.is_dir() {
        bail!("Source root does not exist: {}", source_root.display());
    }

    let mut result = ScanResult::default();
    for path in list_source_files(source_root)? {
        let bytes =
            fs::read(&path).with_context(|| format!("Failed to read file: {}", path.display()))?;
        let content = String::from_utf8_lossy(&bytes);
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .with_context(|| format!("Invalid file path: {}", path.display()))?;

        let record = scan_content(&filename, &content);
        for (phase, status) in record.statuses() {
            if status.is_pending() {
                result.pending[phase.index()].push(filename.clone());
            }
        }
        if record.is_done() {
            result.done.push(filename.clone());
        }
        debug!(file = %filename, done = record.is_done(), "scanned");
        result.records.push(record);
    }

    Ok(result)
}

/// Build the record for one file from its text.
pub fn scan_content(filename: &str, content: &str) -> FileRecord {
    let lines: HashSet<&str> = content.lines().collect();
    let mut record = FileRecord::new(filename);
    for phase in Phase::ALL {
        if lines.contains(phase.marker_line().as_str()) {
            record.set_status(phase, Status::Pending);
        }
    }
    record
}

fn list_source_files(source_root: &Path) -> Result<Vec<PathBuf>> {
    let root = Pattern::escape(&source_root.to_string_lossy());
    let pattern = format!("{}/*.{}", root, SCANNED_EXTENSION);
    let mut files = glob(&pattern)
        .with_context(|| format!("Invalid source pattern: {}", pattern))?
        .collect::<Result<Vec<_>, _>>()
        .context("Cannot access source file")?;
    files.retain(|path| path.is_file());
    files.sort();
    Ok(files)
}
