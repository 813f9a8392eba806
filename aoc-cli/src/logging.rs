//! Tracing subscriber setup

use crate::config::Config;
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to stderr so answers on stdout stay clean.
///
/// `RUST_LOG` wins when set; otherwise the level follows the `-v` count.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(config.verbose >= 2)
        .with_thread_ids(config.verbose >= 3)
        .with_line_number(config.verbose >= 3)
        .init();

    debug!("aoc started with verbosity level: {}", config.verbose);
    trace!(?config, "resolved configuration");
}
