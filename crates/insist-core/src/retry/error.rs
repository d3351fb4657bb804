//! Fatal errors from the attempt driver.

use std::fmt;
use std::io;

/// Error that aborts the retry loop regardless of the attempt budget.
#[derive(Debug)]
pub enum RunError {
    /// The child command could not be started at all (not found, not
    /// executable). Never retried.
    Launch { command: String, source: io::Error },
    /// Waiting on a spawned child failed at the OS level.
    Wait { command: String, source: io::Error },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Launch { command, source } => {
                write!(f, "cannot run {:?}: {}", command, source)
            }
            RunError::Wait { command, source } => {
                write!(f, "failed waiting for {:?}: {}", command, source)
            }
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::Launch { source, .. } | RunError::Wait { source, .. } => Some(source),
        }
    }
}
