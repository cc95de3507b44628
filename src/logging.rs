//! Tracing subscriber initialization.
//!
//! Events go to standard error. `RUST_LOG` selects the level; without it only
//! warnings and errors are shown, so a normal run stays quiet.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// # Returns
/// * `Err` if a subscriber was already installed
pub fn init() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|_| anyhow::anyhow!("tracing subscriber already initialized"))
}
