//! Stderr logging for the CLI. Stdout is reserved for command output.

pub use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Initialize a logger at the given level; `RUST_LOG` directives take precedence.
pub fn setup_logger(level: LevelFilter) {
    let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();
    tracing_subscriber::fmt().with_writer(std::io::stderr).with_env_filter(filter).init();
}
