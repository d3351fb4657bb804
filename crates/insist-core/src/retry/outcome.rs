//! Classification of child exit statuses and the final run result.

use std::process::ExitStatus;

/// Final result of the retry loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunResult {
    /// The loop finished on its own: 0 on success, otherwise the exit code
    /// of the last attempt.
    Completed(i32),
    /// The user interrupted the run; no further attempts were made.
    Interrupted,
}

/// Outcome of a single attempt whose child actually ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    Success,
    Failure { exit_code: i32 },
}

impl AttemptOutcome {
    /// Classify a child exit status. A signal-terminated child has no exit
    /// code; report it as `128 + signal` the way shells do.
    pub fn from_status(status: ExitStatus) -> Self {
        if status.success() {
            return AttemptOutcome::Success;
        }

        let exit_code = match status.code() {
            Some(code) => code,
            None => signal_exit_code(&status),
        };

        AttemptOutcome::Failure { exit_code }
    }
}

#[cfg(unix)]
fn signal_exit_code(status: &ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status.signal().map(|sig| 128 + sig).unwrap_or(1)
}

#[cfg(not(unix))]
fn signal_exit_code(_status: &ExitStatus) -> i32 {
    1
}
