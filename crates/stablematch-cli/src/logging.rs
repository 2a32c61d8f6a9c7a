//! `tracing` subscriber setup.

use stablematch_types::{LogFormat, constants};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Logs go to stderr, filtered by `RUST_LOG`.
///
/// Calling this twice is harmless: the second install is ignored.
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(constants::DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    if installed.is_err() {
        tracing::debug!("Global subscriber already installed");
    }
}
