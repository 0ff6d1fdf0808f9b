//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the jsurls tracing/logging system.
///
/// Reads the `JSURLS_LOG` environment variable for per-module log levels.
/// Format: `JSURLS_LOG=jsurls_analysis::symbols=debug,jsurls_analysis=info`
///
/// Falls back to `jsurls=info` if `JSURLS_LOG` is not set or is invalid.
/// Idempotent.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("JSURLS_LOG")
            .unwrap_or_else(|_| EnvFilter::new("jsurls=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
