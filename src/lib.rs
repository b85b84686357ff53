//! edit-guard - Pre-execution hook for agent file edits
//!
//! Reads one tool request as JSON, warns on stderr when an `Edit` or
//! `Write` targets a system directory, and always answers
//! `{"status": "allowed"}`. It is a tripwire, not a security boundary.
//!
//! # Features
//!
//! - **System directory check**: case-insensitive substring match on the path
//! - **Never blocks**: every request is allowed and the exit code is 0
//! - **Optional config**: extra patterns, guarded tools, audit log
//! - **Audit logging**: JSONL log of all decisions
//!
//! # Example
//!
//! ```
//! use edit_guard::{GuardEngine, GuardRequest};
//!
//! let engine = GuardEngine::default();
//!
//! let input = r#"{"tool":"Edit","file":"/etc/passwd"}"#;
//! let request = GuardRequest::from_json(input).unwrap();
//!
//! let decision = engine.check(&request).unwrap();
//! assert!(decision.is_warn());
//! ```

pub mod audit;
pub mod config;
pub mod engine;
pub mod hook;
pub mod input;
pub mod output;
pub mod rules;

// Re-exports for convenience
pub use config::Config;
pub use engine::GuardEngine;
pub use hook::Outcome;
pub use input::{GuardRequest, InputError};
pub use output::{Decision, HookOutput};
