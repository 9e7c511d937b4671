//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Filter used when neither `CLASHGATE_LOG` nor an explicit directive is set.
pub const DEFAULT_FILTER: &str = "clashgate_analysis=info,clashgate_cli=info";

/// Initialize the clashgate tracing/logging system.
///
/// Reads `CLASHGATE_LOG` for per-crate log levels, e.g.
/// `CLASHGATE_LOG=clashgate_analysis=debug`. Falls back to [`DEFAULT_FILTER`]
/// if the variable is unset or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    init_tracing_with(None);
}

/// Same as [`init_tracing`], but an explicit directive (e.g. from a
/// `--log-level` flag) wins over the environment.
pub fn init_tracing_with(directive: Option<&str>) {
    INIT.call_once(|| {
        let filter = directive
            .and_then(|d| EnvFilter::try_new(d).ok())
            .or_else(|| EnvFilter::try_from_env(LOG_ENV_VAR).ok())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
