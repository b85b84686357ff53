//! Configuration loading for edit-guard
//!
//! Supports TOML configuration with embedded defaults. The defaults are the
//! complete hook behavior; a config file only extends it.

use serde::Deserialize;
use std::path::PathBuf;

use crate::rules::GUARDED_TOOLS;

/// General configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable audit logging
    pub audit_log: bool,

    /// Path to audit log file
    pub audit_path: Option<String>,

    /// Largest request accepted on stdin; unlimited when unset
    pub max_input_bytes: Option<usize>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            audit_log: false,
            audit_path: Some("~/.claude/edit-guard/audit.jsonl".to_string()),
            max_input_bytes: None,
        }
    }
}

/// Sensitive path configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct PathsConfig {
    /// Substrings checked after the built-in system directories
    pub extra_patterns: Vec<String>,
}

/// Tool selection
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Tool names whose path is checked (exact match)
    pub guarded: Vec<String>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            guarded: GUARDED_TOOLS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub paths: PathsConfig,
    pub tools: ToolsConfig,
}

impl Config {
    /// Load from a specific path
    pub fn load_from(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Expand ~ in path strings
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Get the audit log path (expanded), if audit logging is on
    pub fn audit_path(&self) -> Option<PathBuf> {
        if !self.general.audit_log {
            return None;
        }
        self.general.audit_path.as_ref().map(|p| Self::expand_path(p))
    }
}

/// Embedded default configuration
pub const DEFAULT_CONFIG_TOML: &str = r#"
[general]
audit_log = false
audit_path = "~/.claude/edit-guard/audit.jsonl"
# max_input_bytes = 10485760

[paths]
extra_patterns = []

[tools]
guarded = ["Edit", "Write"]
"#;
