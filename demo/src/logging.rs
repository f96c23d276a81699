//! Tracing setup for the demo binary.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt};

static TRACING_INSTALLED: Once = Once::new();

/// Installs the fmt subscriber and routes panics through tracing.
///
/// `RUST_LOG` wins over `level` when it is set. Calling this more than once
/// has no effect.
pub fn init(level: &str) {
    TRACING_INSTALLED.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level))
            .unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .without_time()
            .with_target(false)
            .try_init();

        std::panic::set_hook(Box::new(tracing_panic::panic_hook));
    });
}
