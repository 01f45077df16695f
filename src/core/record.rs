use std::fmt;

use serde::{Serialize, Serializer, ser::SerializeMap};

use super::phase::Phase;

/// Mark shown for a phase with no marker left in the file.
pub const DONE_MARK: &str = "\u{2713}"; // ✓

/// Label shown for a phase whose marker is still present.
pub const PENDING_LABEL: &str = "TODO";

/// State of a single phase for a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The marker comment is present and no open review removes it.
    Pending,
    /// The marker comment is absent.
    Done,
    /// An open review removes the marker comment.
    Resolved { review: u64 },
}

impl Status {
    pub fn is_pending(self) -> bool {
        matches!(self, Status::Pending)
    }

    /// True once the marker is gone locally or an open review removes it.
    pub fn is_settled(self) -> bool {
        !self.is_pending()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pending => f.write_str(PENDING_LABEL),
            Status::Done => f.write_str(DONE_MARK),
            Status::Resolved { review } => write!(f, "{}", review),
        }
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Status::Pending => serializer.serialize_str(PENDING_LABEL),
            Status::Done => serializer.serialize_str(DONE_MARK),
            Status::Resolved { review } => serializer.serialize_u64(*review),
        }
    }
}

/// Per-file burndown record: one status per phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub filename: String,
    statuses: [Status; Phase::COUNT],
}

impl FileRecord {
    /// A record with every phase done.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            statuses: [Status::Done; Phase::COUNT],
        }
    }

    pub fn status(&self, phase: Phase) -> Status {
        self.statuses[phase.index()]
    }

    pub fn set_status(&mut self, phase: Phase, status: Status) {
        self.statuses[phase.index()] = status;
    }

    /// Statuses in column order.
    pub fn statuses(&self) -> impl Iterator<Item = (Phase, Status)> + '_ {
        Phase::ALL.into_iter().map(|phase| (phase, self.status(phase)))
    }

    pub fn is_done(&self) -> bool {
        self.statuses.iter().all(|s| *s == Status::Done)
    }
}

impl Serialize for FileRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Phase::COUNT + 1))?;
        map.serialize_entry("filename", &self.filename)?;
        for (phase, status) in self.statuses() {
            map.serialize_entry(&phase.key(), &status)?;
        }
        map.end()
    }
}

/// Evidence from a review diff that a marker comment was removed from a file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResolutionEvent {
    pub number: u64,
    pub filename: String,
    /// Raw tag captured after `needs:`; may name an unknown phase.
    pub tag: String,
}
