//! JSONL audit logging for edit-guard
//!
//! Records every invocation to a JSONL file when enabled in config.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::hook::Outcome;
use crate::input::GuardRequest;
use crate::output::Decision;

/// Log level for audit entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Allowed,
    Warn,
    Error,
}

/// An audit log entry
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    /// Timestamp of the decision
    pub timestamp: DateTime<Utc>,

    /// Log level (ALLOWED, WARN, ERROR)
    pub level: LogLevel,

    /// Tool that was invoked (empty if the request could not be read)
    pub tool: String,

    /// Rule ID that matched (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,

    /// Summary of the input
    pub input_summary: String,

    /// Reason for the decision
    pub reason: String,
}

impl AuditEntry {
    /// Create a new audit entry from a request and its outcome
    pub fn new(request: Option<&GuardRequest>, outcome: &Outcome) -> Self {
        let (level, rule_id, reason) = match outcome {
            Outcome::Checked(Decision::Allow { reason }) => (LogLevel::Allowed, None, reason.clone()),
            Outcome::Checked(Decision::Warn { rule_id, reason }) => {
                (LogLevel::Warn, Some(rule_id.clone()), reason.clone())
            }
            Outcome::Failed { message } => (LogLevel::Error, None, message.clone()),
        };

        Self {
            timestamp: Utc::now(),
            level,
            tool: request.map(|r| r.tool_name().to_string()).unwrap_or_default(),
            rule_id,
            input_summary: request
                .map(GuardRequest::summary)
                .unwrap_or_else(|| "unreadable input".to_string()),
            reason,
        }
    }
}

/// Audit logger
#[derive(Default)]
pub struct AuditLogger {
    writer: Option<BufWriter<File>>,
}

impl AuditLogger {
    /// Create a new audit logger
    ///
    /// A log that cannot be opened is reported on stderr and leaves the
    /// logger disabled.
    pub fn new(path: Option<&Path>) -> Self {
        match path {
            Some(p) => Self::open(p).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to open audit log {}: {}", p.display(), e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Open (or create) the log file for appending
    pub fn open(path: &Path) -> Result<Self, std::io::Error> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: Some(BufWriter::new(file)),
        })
    }

    /// Log an audit entry
    pub fn log(&mut self, entry: &AuditEntry) -> Result<(), std::io::Error> {
        if let Some(ref mut writer) = self.writer {
            let json = serde_json::to_string(entry)?;
            writeln!(writer, "{}", json)?;
            writer.flush()?;
        }
        Ok(())
    }

    /// Log the outcome of one invocation
    pub fn log_outcome(
        &mut self,
        request: Option<&GuardRequest>,
        outcome: &Outcome,
    ) -> Result<(), std::io::Error> {
        let entry = AuditEntry::new(request, outcome);
        self.log(&entry)
    }

    /// Check if logging is enabled
    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }
}
