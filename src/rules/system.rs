//! System directory rules
//!
//! Patterns are raw text, not paths: `/etc/` does not match `/etc` and
//! `\Windows\` does not match `C:/Windows/`.

use crate::rules::Rule;

/// Built-in system directories, checked in order
pub const SYSTEM_DIRECTORY_RULES: &[Rule] = &[
    Rule::new("unix-etc", "/etc/"),
    Rule::new("unix-usr", "/usr/"),
    Rule::new("windows-dir", r"\Windows\"),
    Rule::new("windows-program-files", r"\Program Files\"),
];
