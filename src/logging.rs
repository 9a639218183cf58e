//! Log output for the command line tool.

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

/// Install a subscriber which writes log lines to stderr.
///
/// `RUST_LOG` takes precedence; otherwise each `-v` raises the
/// level one step from warnings only.
pub(crate) fn init(verbosity: u64) -> anyhow::Result<()> {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Could not set up logging: {}", e))
}
