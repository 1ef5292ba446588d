//! Outcome of steps whose failure must never fail the invocation.
//!
//! Fatal failures travel as `anyhow::Result`. Best-effort failures are plain
//! values of [`BestEffort`], so they cannot be `?`-propagated by accident.

use std::fmt;
use std::process::Output;

/// Result of a single best-effort step.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum BestEffort {
    /// The step did what it was asked to.
    Done,
    /// The step failed; the failure is reported and then ignored.
    Ignored(String),
}

impl BestEffort {
    /// Classify the result of an external command.
    ///
    /// A spawn error, a timeout and a nonzero exit all become `Ignored`, with
    /// the last non-empty stderr line as the reason when there is one.
    pub fn from_output(result: anyhow::Result<Output>) -> Self {
        match result {
            Ok(output) if output.status.success() => Self::Done,
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let reason = stderr
                    .lines()
                    .map(str::trim)
                    .rfind(|l| !l.is_empty())
                    .map_or_else(|| exit_description(&output), str::to_string);
                Self::Ignored(reason)
            }
            Err(e) => Self::Ignored(format!("{e:#}")),
        }
    }

    /// Classify a plain fallible step.
    pub fn from_result<T>(result: anyhow::Result<T>) -> Self {
        match result {
            Ok(_) => Self::Done,
            Err(e) => Self::Ignored(format!("{e:#}")),
        }
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

impl fmt::Display for BestEffort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Done => f.write_str("ok"),
            Self::Ignored(reason) => write!(f, "ignored ({reason})"),
        }
    }
}

fn exit_description(output: &Output) -> String {
    match output.status.code() {
        Some(code) => format!("exited with status {code}"),
        None => "terminated by signal".to_string(),
    }
}
