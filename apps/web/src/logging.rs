use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes structured logging. `RUST_LOG` wins over the configured level.
pub fn init_tracing(rust_log: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{crate_name}={rust_log},seed={rust_log},tower_http={rust_log}",
                crate_name = env!("CARGO_PKG_NAME")
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
