//! Attempt loop: run the child until success, exhaustion, or interrupt.

use rand::Rng;
use tokio::process::Command;
use tokio::signal;
use tokio::time;

use super::error::RunError;
use super::outcome::{AttemptOutcome, RunResult};
use crate::config::RetryConfig;

/// 1-based attempt number exported to the child.
pub const ENV_ATTEMPT: &str = "INSIST_ATTEMPT";
/// Attempt budget exported to the child; negative means unbounded.
pub const ENV_MAX_TRIES: &str = "INSIST_MAX_TRIES";

/// Exit code when the budget permits zero attempts. The command never ran,
/// so there is no child exit code to propagate, and exiting 0 would falsely
/// signal success.
pub const EXIT_NO_ATTEMPTS: i32 = 1;

/// Runs `command` with `args` until it exits 0, the attempt budget is
/// exhausted, or the user hits Ctrl-C.
///
/// The child inherits the parent's standard streams, so its output is
/// visible unmodified on every attempt. After a failed attempt that is not
/// the last, the driver asks the schedule for a delay and sleeps. Both the
/// child wait and the sleep are raced against Ctrl-C; an interrupt returns
/// [`RunResult::Interrupted`] promptly, without another attempt and without
/// being treated as a command failure.
///
/// A launch failure (command not found or not executable) is reported as
/// [`RunError::Launch`] immediately, independent of the budget.
pub async fn run<R: Rng>(
    command: &str,
    args: &[String],
    config: &RetryConfig,
    rng: &mut R,
) -> Result<RunResult, RunError> {
    if config.tries == 0 {
        tracing::warn!("attempt budget is zero; not running the command");
        return Ok(RunResult::Completed(EXIT_NO_ATTEMPTS));
    }

    let mut attempt: u64 = 0;
    loop {
        let mut child = Command::new(command)
            .args(args)
            .env(ENV_ATTEMPT, (attempt + 1).to_string())
            .env(ENV_MAX_TRIES, config.tries.to_string())
            .spawn()
            .map_err(|source| RunError::Launch {
                command: command.to_string(),
                source,
            })?;

        let status = tokio::select! {
            status = child.wait() => status.map_err(|source| RunError::Wait {
                command: command.to_string(),
                source,
            })?,
            _ = signal::ctrl_c() => return Ok(RunResult::Interrupted),
        };

        let exit_code = match AttemptOutcome::from_status(status) {
            AttemptOutcome::Success => return Ok(RunResult::Completed(0)),
            AttemptOutcome::Failure { exit_code } => exit_code,
        };

        tracing::info!(
            "command exited with code {} on attempt {}",
            exit_code,
            attempt + 1
        );

        let last = !config.is_unbounded() && attempt + 1 >= config.tries as u64;
        if last {
            return Ok(RunResult::Completed(exit_code));
        }

        let total = config.delay_for(attempt, rng).total();
        if !total.is_zero() {
            tracing::info!(
                "waiting {:.3}s before attempt {}",
                total.as_secs_f64(),
                attempt + 2
            );
            tokio::select! {
                _ = time::sleep(total) => {}
                _ = signal::ctrl_c() => return Ok(RunResult::Interrupted),
            }
        }

        attempt += 1;
    }
}
