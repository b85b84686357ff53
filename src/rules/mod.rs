//! Sensitive path rules for edit-guard
//!
//! Defines the directory substrings that mark a system-critical location.

pub mod system;

/// A sensitive path rule
#[derive(Debug, Clone)]
pub struct Rule {
    /// Unique identifier for this rule
    pub id: &'static str,

    /// Literal substring matched case-insensitively against the path
    pub pattern: &'static str,
}

impl Rule {
    /// Create a new rule
    pub const fn new(id: &'static str, pattern: &'static str) -> Self {
        Self { id, pattern }
    }
}

/// Tools whose target path is checked
pub const GUARDED_TOOLS: &[&str] = &["Edit", "Write"];
