//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Reach tracing/logging system.
///
/// Reads the `REACH_LOG` environment variable for per-subsystem log levels.
/// Format: `REACH_LOG=reach_engine=debug,reach_runtime=info`
///
/// Falls back to `reach=info` if `REACH_LOG` is not set or is invalid.
///
/// This function is idempotent; calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("REACH_LOG")
            .unwrap_or_else(|_| EnvFilter::new("reach=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .with(filter)
            .init();
    });
}
