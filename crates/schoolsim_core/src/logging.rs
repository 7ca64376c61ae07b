//! Logging setup for simulation consumers.

/// Initialize the tracing subscriber for logging.
pub fn init_logging() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::INFO)
            .finish(),
    )
    .ok();
}
