//! Subscriber setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber on stderr, filtered by `RUST_LOG` (default `info`).
///
/// Stdout stays free for program output such as the label report.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}
