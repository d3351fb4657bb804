//! Core engine for the `insist` retry wrapper.
//!
//! `insist` re-runs a child command until it exits 0, an attempt budget is
//! exhausted, or the user interrupts it, sleeping between attempts according
//! to an exponential-backoff schedule with optional uniform jitter.
//!
//! This crate holds everything except argument parsing: the validated
//! [`config::RetryConfig`], the backoff schedule, and the attempt driver in
//! [`retry`].

pub mod config;
pub mod logging;
pub mod retry;
