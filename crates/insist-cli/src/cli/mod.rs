//! Command-line surface for the insist retry wrapper.

use clap::Parser;
use insist_core::config::{self, JitterBounds, RetryConfig};

/// Retry a command with exponential backoff and jitter.
#[derive(Debug, Parser)]
#[command(name = "insist")]
#[command(version, about = "Retry a command with exponential backoff and jitter.", long_about = None)]
pub struct Cli {
    /// Multiplier applied to the delay on every failed attempt (1 = no backoff).
    #[arg(
        short = 'b',
        long,
        default_value = "1",
        value_name = "FACTOR",
        value_parser = config::parse_backoff
    )]
    pub backoff: f64,

    /// Constant or initial exponential delay in seconds.
    #[arg(
        short = 'd',
        long,
        default_value = "0",
        value_name = "SECONDS",
        value_parser = config::parse_delay
    )]
    pub delay: f64,

    /// Additional random delay: maximum seconds or "min,max" seconds.
    #[arg(
        short = 'j',
        long,
        default_value = "0,0",
        value_name = "RANGE",
        value_parser = config::parse_jitter
    )]
    pub jitter: JitterBounds,

    /// Ceiling on the fixed/exponential delay in seconds.
    #[arg(
        short = 'm',
        long,
        default_value = "86400",
        value_name = "SECONDS",
        value_parser = config::parse_delay
    )]
    pub max_delay: f64,

    /// Maximum number of attempts (negative for infinite).
    #[arg(
        short = 't',
        long,
        default_value_t = 3,
        value_name = "N",
        allow_negative_numbers = true
    )]
    pub tries: i64,

    /// Retry without an attempt limit (same as --tries -1).
    #[arg(short = 'f', long, conflicts_with = "tries")]
    pub forever: bool,

    /// Announce failed attempts and waits.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Command to run, followed by its arguments (passed through verbatim).
    #[arg(
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "COMMAND"
    )]
    pub command: Vec<String>,
}

impl Cli {
    pub fn command(&self) -> &str {
        &self.command[0]
    }

    pub fn child_args(&self) -> &[String] {
        &self.command[1..]
    }

    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig {
            backoff: self.backoff,
            delay: self.delay,
            max_delay: self.max_delay,
            jitter: self.jitter,
            tries: if self.forever { -1 } else { self.tries },
        }
    }
}
