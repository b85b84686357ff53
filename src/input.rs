//! Input parsing for the guard hook
//!
//! The host framework sends a single JSON object on stdin. Only `tool` and
//! the target path are read; every other field is ignored.

use serde_json::Value;
use std::fmt;
use std::io::{self, Read};

/// Keys that may carry the target path, in lookup order
pub const PATH_KEYS: &[&str] = &["file", "filePath"];

/// A parsed hook request
///
/// Fields keep whatever JSON type the caller sent. A non-string `tool` is
/// simply never guarded; a non-string path only matters once the engine
/// needs to inspect it.
#[derive(Debug, Clone, PartialEq)]
pub struct GuardRequest {
    /// Name of the tool being invoked (e.g., "Edit", "Write", "Read"),
    /// `None` when the field holds a non-string value
    pub tool: Option<String>,

    /// Selected target path value
    pub path: Value,

    /// Key the path value came from
    pub path_key: &'static str,
}

impl Default for GuardRequest {
    fn default() -> Self {
        Self {
            tool: Some(String::new()),
            path: Value::String(String::new()),
            path_key: PATH_KEYS[PATH_KEYS.len() - 1],
        }
    }
}

/// Error reading or decoding a request
#[derive(Debug)]
pub enum InputError {
    /// Failed to read the input stream
    Io(io::Error),
    /// Input exceeded the configured size limit
    TooLarge(usize),
    /// Input is not valid JSON
    Json(serde_json::Error),
    /// Input is valid JSON but not an object
    NotAnObject,
    /// A known field holds a value of the wrong type
    InvalidField { field: String, found: &'static str },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Io(e) => write!(f, "failed to read input: {}", e),
            InputError::TooLarge(len) => write!(f, "input too large: {} bytes", len),
            InputError::Json(e) => write!(f, "{}", e),
            InputError::NotAnObject => write!(f, "expected a JSON object"),
            InputError::InvalidField { field, found } => {
                write!(f, "field '{}' must be a string, found {}", field, found)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(e) => Some(e),
            InputError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(e: io::Error) -> Self {
        InputError::Io(e)
    }
}

impl From<serde_json::Error> for InputError {
    fn from(e: serde_json::Error) -> Self {
        InputError::Json(e)
    }
}

impl GuardRequest {
    /// Parse a request from a JSON string
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Extract a request from an already decoded JSON value
    ///
    /// The first candidate key with a truthy value wins; otherwise the last
    /// candidate is taken as-is, defaulting to an empty string.
    pub fn from_value(value: &Value) -> Result<Self, InputError> {
        let obj = value.as_object().ok_or(InputError::NotAnObject)?;

        let tool = match obj.get("tool") {
            None => Some(String::new()),
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => None,
        };

        let mut selected = None;
        for (i, key) in PATH_KEYS.iter().enumerate() {
            let candidate = obj.get(*key);
            if i + 1 == PATH_KEYS.len() || candidate.is_some_and(is_truthy) {
                let candidate = candidate
                    .cloned()
                    .unwrap_or_else(|| Value::String(String::new()));
                selected = Some((*key, candidate));
                break;
            }
        }
        let (path_key, path) = selected.unwrap_or_else(|| {
            let default = Self::default();
            (default.path_key, default.path)
        });

        Ok(Self {
            tool,
            path,
            path_key,
        })
    }

    /// Tool name as text, empty for a non-string tool
    pub fn tool_name(&self) -> &str {
        self.tool.as_deref().unwrap_or("")
    }

    /// The path as a string, or an error if the caller sent another type
    pub fn path_str(&self) -> Result<&str, InputError> {
        self.path.as_str().ok_or_else(|| InputError::InvalidField {
            field: self.path_key.to_string(),
            found: type_name(&self.path),
        })
    }

    /// Get a summary of the request for logging
    pub fn summary(&self) -> String {
        let path = match &self.path {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        if path.is_empty() {
            self.tool_name().to_string()
        } else {
            format!("{}: {}", self.tool_name(), path)
        }
    }
}

/// Read a whole request from `reader`, rejecting anything over `max_bytes`
/// when a limit is set
pub fn read_request<R: Read>(
    reader: R,
    max_bytes: Option<usize>,
) -> Result<GuardRequest, InputError> {
    let mut input = String::with_capacity(256);

    match max_bytes {
        Some(max_bytes) => {
            // Read up to limit + 1 to detect overflow
            reader
                .take(max_bytes as u64 + 1)
                .read_to_string(&mut input)?;

            if input.len() > max_bytes {
                return Err(InputError::TooLarge(input.len()));
            }
        }
        None => {
            let mut reader = reader;
            reader.read_to_string(&mut input)?;
        }
    }

    GuardRequest::from_json(&input)
}

/// JSON truthiness: null, false, zero and empty values are falsy
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
