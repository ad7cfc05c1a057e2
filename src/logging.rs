//! Structured logging setup for the `pathladder` binary
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the binary (or to a test that wants to see them).

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable consulted after `RUST_LOG`
pub const LOG_ENV: &str = "PATHLADDER_LOG";

/// Initialize structured logging based on CLI arguments
///
/// `verbose` maps to `pathladder=debug`, otherwise `pathladder=warn`. An
/// explicit `log_level` wins over both, and `RUST_LOG` / `PATHLADDER_LOG` win
/// over everything. Events go to stderr.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, log_level)));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

fn default_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("pathladder={level}"),
        (true, None) => "pathladder=debug".to_string(),
        (false, None) => "pathladder=warn".to_string(),
    }
}
