use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// Honors `RUST_LOG` and defaults to `info`. Events go to stderr so that
/// stdout carries only the evaluated quotes.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
