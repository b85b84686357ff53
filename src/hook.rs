//! Hook protocol handling
//!
//! One request in, one decision out. Stdout gets the allowed response on
//! every path that parsed its input; stderr gets the warning or the failure
//! detail. A failure leaves stdout empty.

use std::io::{self, Read, Write};

use crate::audit::AuditLogger;
use crate::engine::GuardEngine;
use crate::input::{read_request, GuardRequest, InputError};
use crate::output::{Decision, HookOutput};

/// Result of processing one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The request was read and classified
    Checked(Decision),

    /// The request could not be read or decoded
    Failed { message: String },
}

impl Outcome {
    fn failed(e: InputError) -> Self {
        Outcome::Failed {
            message: e.to_string(),
        }
    }

    /// Check if input processing failed
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }
}

/// Read one request from `reader` and classify it
///
/// The input size limit comes from the engine's config and is off unless
/// set there.
pub fn evaluate<R: Read>(engine: &GuardEngine, reader: R) -> (Option<GuardRequest>, Outcome) {
    let max_bytes = engine.config().general.max_input_bytes;

    let request = match read_request(reader, max_bytes) {
        Ok(request) => request,
        Err(e) => return (None, Outcome::failed(e)),
    };

    let outcome = match engine.check(&request) {
        Ok(decision) => Outcome::Checked(decision),
        Err(e) => Outcome::failed(e),
    };
    (Some(request), outcome)
}

/// Write the responses for `outcome` to the two streams
pub fn respond<O: Write, E: Write>(
    outcome: &Outcome,
    mut stdout: O,
    mut stderr: E,
) -> io::Result<()> {
    match outcome {
        Outcome::Checked(decision) => {
            if let Decision::Warn { reason, .. } = decision {
                writeln!(stderr, "{}", HookOutput::warning(reason.as_str()).to_json())?;
                stderr.flush()?;
            }
            writeln!(stdout, "{}", HookOutput::allowed().to_json())?;
            stdout.flush()
        }
        Outcome::Failed { message } => {
            writeln!(stderr, "{}", HookOutput::failure(message.as_str()).to_json())?;
            stderr.flush()
        }
    }
}

/// Run the hook once: read, classify, log, respond
///
/// Stream and audit errors are reported at most as a stderr line; nothing
/// here can make the process fail.
pub fn run<R: Read, O: Write, E: Write>(
    engine: &GuardEngine,
    logger: &mut AuditLogger,
    reader: R,
    stdout: O,
    mut stderr: E,
) -> Outcome {
    let (request, outcome) = evaluate(engine, reader);

    if let Err(e) = logger.log_outcome(request.as_ref(), &outcome) {
        let _ = writeln!(stderr, "Warning: Failed to write audit log: {}", e);
    }

    let _ = respond(&outcome, stdout, &mut stderr);

    outcome
}
