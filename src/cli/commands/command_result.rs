use std::path::PathBuf;

use crate::{core::PendingCounts, output::ReportPaths};

#[derive(Debug)]
pub enum CommandResult {
    Burndown(BurndownSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct BurndownSummary {
    pub source_root: PathBuf,
    /// Number of scanned files.
    pub file_count: usize,
    /// Files with no marker left.
    pub done_count: usize,
    /// Pending markers per phase, as appended to data.csv.
    pub counts: PendingCounts,
    /// `None` when the review service was skipped.
    pub reviews: Option<ReviewSummary>,
    pub paths: ReportPaths,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewSummary {
    /// Open changes inspected.
    pub changes: usize,
    /// (file, phase) markers removed by at least one open change.
    pub resolved: usize,
    /// Removals naming an unscanned file or an unknown phase.
    pub unmatched: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub config_path: PathBuf,
}
