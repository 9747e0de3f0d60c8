//! Logging bootstrap for the demo binary, grounded on the teacher's
//! `init_logging` but trimmed to a single console layer: this build is
//! synchronous and single-threaded, so there is no background writer task
//! whose shutdown needs a `WorkerGuard` to flush.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a `tracing-subscriber` registry with an env-configurable filter
/// (`RUST_LOG`, defaulting to `info`) and a compact console layer.
pub fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
        .from_env_lossy();

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .init();
}
