//! Extraction of removed marker comments from unified diffs.

use std::str::Lines;

use regex::Regex;

use crate::core::{ResolutionEvent, scanner::SCANNED_EXTENSION};

/// Compiled line patterns for one path prefix.
#[derive(Debug, Clone)]
pub struct DiffPatterns {
    file: Regex,
    marker: Regex,
}

impl DiffPatterns {
    /// `path_prefix` is the repository directory holding the scanned files,
    /// e.g. `nova/conf/`. Files are named by their path below the prefix, so
    /// `nova/conf/sub/api.py` becomes `sub/api.py` and never matches a
    /// scanned top-level file. An empty prefix accepts any path and keeps
    /// only the base name.
    pub fn new(path_prefix: &str) -> Result<Self, regex::Error> {
        let file = if path_prefix.is_empty() {
            Regex::new(&format!(r"^--- a/(?:.*/)?([^/]*\.{})$", SCANNED_EXTENSION))?
        } else {
            Regex::new(&format!(
                r"^--- a/{}(.*\.{})$",
                regex::escape(path_prefix),
                SCANNED_EXTENSION
            ))?
        };
        let marker = Regex::new(r"^-# needs:(.*)$")?;
        Ok(Self { file, marker })
    }

    fn file_name<'l>(&self, line: &'l str) -> Option<&'l str> {
        self.file
            .captures(line)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }

    fn removed_tag<'l>(&self, line: &'l str) -> Option<&'l str> {
        self.marker
            .captures(line)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim_end())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ScanState {
    /// Before the first matching file header, or inside a file we don't track.
    Outside,
    Tracking(String),
}

/// Single-pass iterator over the marker removals in one review's diff.
pub struct DiffScanner<'a> {
    lines: Lines<'a>,
    number: u64,
    patterns: &'a DiffPatterns,
    state: ScanState,
}

impl<'a> DiffScanner<'a> {
    pub fn new(number: u64, diff: &'a str, patterns: &'a DiffPatterns) -> Self {
        Self {
            lines: diff.lines(),
            number,
            patterns,
            state: ScanState::Outside,
        }
    }
}

impl Iterator for DiffScanner<'_> {
    type Item = ResolutionEvent;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            if let Some(name) = self.patterns.file_name(line) {
                self.state = ScanState::Tracking(name.to_string());
                continue;
            }
            if line.starts_with("diff --git ") || is_old_file_header(line) {
                self.state = ScanState::Outside;
                continue;
            }
            if let ScanState::Tracking(filename) = &self.state
                && let Some(tag) = self.patterns.removed_tag(line)
            {
                return Some(ResolutionEvent {
                    number: self.number,
                    filename: filename.clone(),
                    tag: tag.to_string(),
                });
            }
        }
        None
    }
}

fn is_old_file_header(line: &str) -> bool {
    line.starts_with("--- a/") || line == "--- /dev/null"
}

/// Collect every marker removal in `diff`, attributed to review `number`.
pub fn extract_resolutions(
    number: u64,
    diff: &str,
    patterns: &DiffPatterns,
) -> Vec<ResolutionEvent> {
    DiffScanner::new(number, diff, patterns).collect()
}
