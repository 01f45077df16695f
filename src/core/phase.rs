use std::fmt;

/// Prefix shared by every marker key, e.g. `needs:fix_opt_description`.
pub const MARKER_PREFIX: &str = "needs:";

/// A remediation phase tracked by a `# needs:<tag>` marker comment.
///
/// Variant order is the column order of every report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    FixOptDescription,
    CheckDeprecationStatus,
    CheckOptGroupAndType,
    FixOptDescriptionIndentation,
    FixOptRegistrationConsistency,
}

impl Phase {
    pub const COUNT: usize = 5;

    pub const ALL: [Phase; Phase::COUNT] = [
        Phase::FixOptDescription,
        Phase::CheckDeprecationStatus,
        Phase::CheckOptGroupAndType,
        Phase::FixOptDescriptionIndentation,
        Phase::FixOptRegistrationConsistency,
    ];

    /// Tag as written after `needs:` in a marker comment.
    pub fn tag(self) -> &'static str {
        match self {
            Phase::FixOptDescription => "fix_opt_description",
            Phase::CheckDeprecationStatus => "check_deprecation_status",
            Phase::CheckOptGroupAndType => "check_opt_group_and_type",
            Phase::FixOptDescriptionIndentation => "fix_opt_description_indentation",
            Phase::FixOptRegistrationConsistency => "fix_opt_registration_consistency",
        }
    }

    /// Column title used by the text table.
    pub fn title(self) -> &'static str {
        match self {
            Phase::FixOptDescription => "Description",
            Phase::CheckDeprecationStatus => "Deprecation",
            Phase::CheckOptGroupAndType => "Group/Type",
            Phase::FixOptDescriptionIndentation => "Indentation",
            Phase::FixOptRegistrationConsistency => "Consistency",
        }
    }

    /// Key used in JSON records and as the CSV column name.
    pub fn key(self) -> String {
        format!("{}{}", MARKER_PREFIX, self.tag())
    }

    /// The exact source line that flags this phase as pending.
    pub fn marker_line(self) -> String {
        format!("# {}", self.key())
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_tag(tag: &str) -> Option<Phase> {
        Phase::ALL.into_iter().find(|phase| phase.tag() == tag)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
