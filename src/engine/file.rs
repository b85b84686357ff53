//! File path checking
//!
//! Plain case-insensitive substring search. Paths are not normalized,
//! resolved, or split on separators.

use crate::output::Decision;

/// Prefix of every warning message
pub const WARNING_PREFIX: &str = "Writing to system directory: ";

/// A lowercased pattern ready for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needle {
    pub rule_id: String,
    pub lowered: String,
}

impl Needle {
    pub fn new(rule_id: impl Into<String>, pattern: &str) -> Self {
        Self {
            rule_id: rule_id.into(),
            lowered: pattern.to_lowercase(),
        }
    }
}

/// Check a file path against the needles; the first hit wins
pub fn check_path(file_path: &str, needles: &[Needle]) -> Decision {
    let lowered = file_path.to_lowercase();

    for needle in needles {
        if !needle.lowered.is_empty() && lowered.contains(needle.lowered.as_str()) {
            return Decision::warn(
                needle.rule_id.as_str(),
                format!("{}{}", WARNING_PREFIX, file_path),
            );
        }
    }

    Decision::allow("file path passed all checks")
}
