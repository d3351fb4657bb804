//! Retry schedule and attempt driver.
//!
//! This module encapsulates the backoff schedule (an exponentially growing
//! fixed delay plus uniform random jitter) and the loop that runs the child
//! command until it succeeds, the attempt budget runs out, or the user
//! interrupts. The schedule is pure; only the driver touches processes,
//! timers, and signals.

mod error;
mod outcome;
mod policy;
mod run;

pub use error::RunError;
pub use outcome::{AttemptOutcome, RunResult};
pub use policy::RetryDelay;
pub use run::{run, ENV_ATTEMPT, ENV_MAX_TRIES, EXIT_NO_ATTEMPTS};
