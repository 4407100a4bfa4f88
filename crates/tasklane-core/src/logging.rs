use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Filtering is controlled by `RUST_LOG`; defaults to `info` for the
/// tasklane crates. Safe to call once at startup by whichever frontend
/// embeds the board engine.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tasklane=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
