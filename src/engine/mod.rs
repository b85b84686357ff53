//! Guard engine for edit-guard
//!
//! Decides whether a request is worth a warning. It never blocks.

pub mod file;

use crate::config::Config;
use crate::input::{GuardRequest, InputError};
use crate::output::Decision;
use crate::rules::system::SYSTEM_DIRECTORY_RULES;

use file::Needle;

/// The main guard engine
pub struct GuardEngine {
    config: Config,
    needles: Vec<Needle>,
}

impl GuardEngine {
    /// Create a new guard engine with the given configuration
    pub fn new(config: Config) -> Self {
        let builtin = SYSTEM_DIRECTORY_RULES
            .iter()
            .map(|r| Needle::new(r.id, r.pattern));

        let extra = config
            .paths
            .extra_patterns
            .iter()
            .enumerate()
            .map(|(i, p)| Needle::new(format!("custom-{}", i + 1), p));

        let needles = builtin.chain(extra).collect();

        Self { config, needles }
    }

    /// Check whether a tool's path is inspected at all
    pub fn is_guarded(&self, tool: Option<&str>) -> bool {
        tool.is_some_and(|tool| self.config.tools.guarded.iter().any(|t| t == tool))
    }

    /// Main entry point: check a request and return a decision
    ///
    /// The path is only read for guarded tools, so a malformed path on any
    /// other tool is never an error.
    pub fn check(&self, request: &GuardRequest) -> Result<Decision, InputError> {
        if !self.is_guarded(request.tool.as_deref()) {
            return Ok(Decision::allow("tool not guarded"));
        }

        let path = request.path_str()?;
        Ok(file::check_path(path, &self.needles))
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for GuardEngine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
