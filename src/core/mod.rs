//! Marker scanning and review attribution.
//!
//! - `phase`: the five remediation phases and their marker comments
//! - `record`: per-file statuses and resolution events
//! - `scanner`: local `# needs:` marker scan
//! - `merge`: attribution of resolution events to records

pub mod merge;
pub mod phase;
pub mod record;
pub mod scanner;

pub use merge::{MergeResult, merge_resolutions};
pub use phase::Phase;
pub use record::{DONE_MARK, FileRecord, ResolutionEvent, Status};
pub use scanner::{PendingCounts, ScanResult, scan_markers};
