//! Console logging setup.

use postwright_error::{ConfigError, PostwrightResult};
use tracing_subscriber::EnvFilter;

/// Install a console subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `level` when set, so stdout carries only
/// command output.
///
/// # Errors
///
/// Fails when neither `RUST_LOG` nor `level` is a valid filter directive.
pub fn init_logging(level: &str) -> PostwrightResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level)?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// `RUST_LOG` when set, otherwise `level`.
pub(crate) fn env_filter(level: &str) -> PostwrightResult<EnvFilter> {
    EnvFilter::try_from_default_env().or_else(|_| parse_level(level))
}

fn parse_level(level: &str) -> PostwrightResult<EnvFilter> {
    EnvFilter::try_new(level).map_err(|e| {
        ConfigError::new(format!("Invalid log filter '{}': {}", level, e)).into()
    })
}
