//! Logging init: stderr subscriber with a verbosity-controlled filter.

use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr. `verbose` raises the default level from
/// `warn` to `info` so failed attempts and waits are announced; the
/// `INSIST_LOG` env filter overrides both.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "info" } else { "warn" };
    let env_filter = EnvFilter::try_from_env("INSIST_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .init();
}
