//! Output formatting for guard hook responses
//!
//! Responses are single-line JSON objects. They are rendered with `": "` and
//! `", "` separators and ASCII-only string escapes, the format hook
//! consumers already parse.

use serde::Serialize;
use serde_json::ser::Formatter;
use std::io;

/// Response status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Allowed,
    Warning,
}

/// A JSON response written to stdout or stderr
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookOutput {
    pub status: Status,

    /// Warning text (warning responses only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Input failure detail (failure responses only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Classification of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Nothing to report
    Allow { reason: String },

    /// Path hit a sensitive rule; still allowed
    Warn { rule_id: String, reason: String },
}

impl Decision {
    /// Create an allow decision
    pub fn allow(reason: impl Into<String>) -> Self {
        Decision::Allow {
            reason: reason.into(),
        }
    }

    /// Create a warn decision
    pub fn warn(rule_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Decision::Warn {
            rule_id: rule_id.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is an allow decision
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow { .. })
    }

    /// Check if this is a warn decision
    pub fn is_warn(&self) -> bool {
        matches!(self, Decision::Warn { .. })
    }

    /// Get the rule ID if applicable
    pub fn rule_id(&self) -> Option<&str> {
        match self {
            Decision::Allow { .. } => None,
            Decision::Warn { rule_id, .. } => Some(rule_id),
        }
    }

    /// Get the reason
    pub fn reason(&self) -> &str {
        match self {
            Decision::Allow { reason } => reason,
            Decision::Warn { reason, .. } => reason,
        }
    }
}

impl HookOutput {
    /// `{"status": "allowed"}`
    pub fn allowed() -> Self {
        HookOutput {
            status: Status::Allowed,
            message: None,
            error: None,
        }
    }

    /// `{"status": "warning", "message": ...}`
    pub fn warning(message: impl Into<String>) -> Self {
        HookOutput {
            status: Status::Warning,
            message: Some(message.into()),
            error: None,
        }
    }

    /// `{"status": "allowed", "error": ...}`
    pub fn failure(error: impl Into<String>) -> Self {
        HookOutput {
            status: Status::Allowed,
            message: None,
            error: Some(error.into()),
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> String {
        let mut ser = serde_json::Serializer::with_formatter(Vec::new(), SpacedFormatter);
        if self.serialize(&mut ser).is_err() {
            return "{}".to_string();
        }
        String::from_utf8(ser.into_inner()).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Compact JSON with spaced separators and `\uXXXX` escapes for non-ASCII
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if ch.is_ascii() && ch != '\x7f' {
                continue;
            }
            writer.write_all(fragment[start..idx].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}
