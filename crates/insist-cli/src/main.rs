use clap::Parser;
use insist_core::logging;
use insist_core::retry::{self, RunResult};

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging before the first attempt.
    logging::init_logging(cli.verbose);

    let config = cli.retry_config();
    tracing::debug!("retry config: {:?}", config);
    let mut rng = rand::rng();

    match retry::run(cli.command(), cli.child_args(), &config, &mut rng).await {
        Ok(RunResult::Completed(code)) => std::process::exit(code),
        Ok(RunResult::Interrupted) => exit_interrupted(),
        Err(err) => {
            eprintln!("insist error: {:#}", anyhow::Error::new(err));
            std::process::exit(255);
        }
    }
}

/// Terminate with interrupt semantics so callers observe a Ctrl-C, not a
/// synthetic failure exit code.
fn exit_interrupted() -> ! {
    // Restore the default SIGINT disposition and re-raise, so the process
    // dies by signal the way an unhandled Ctrl-C would.
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGINT, libc::SIG_DFL);
        libc::raise(libc::SIGINT);
    }
    std::process::exit(130);
}
