//! Optional log output for the `quadrant_report` CLI and other hosts.
//!
//! Fetches, classification counts, failed refreshes and discarded stale
//! results are reported as `tracing` events. Nothing is printed unless a
//! subscriber is installed.

/// Installs a stderr subscriber so JSON written to stdout stays clean.
///
/// `RUST_LOG` selects the level, defaulting to `info`. Returns `false` without
/// the `telemetry` feature or when another subscriber already won.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
