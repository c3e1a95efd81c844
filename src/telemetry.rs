//! Opt-in log output for the selection notice.
//!
//! `sel_trace` reports an empty result with an `info` event on the
//! `plot_style` target instead of printing it. Nothing is shown until a
//! subscriber is installed: hosts with their own `tracing` setup just need
//! `plot_style=info` in their filter, others can call [`init_default_tracing`]
//! with the `telemetry` feature enabled.

/// Filter used when `RUST_LOG` is unset: crate notices at `info`, everything
/// else at `warn`.
pub const DEFAULT_TRACING_DIRECTIVE: &str = "warn,plot_style=info";

/// Installs a compact stderr subscriber filtered by `RUST_LOG`, falling back
/// to [`DEFAULT_TRACING_DIRECTIVE`].
///
/// Returns `false` when the `telemetry` feature is off or a global subscriber
/// is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_TRACING_DIRECTIVE));
        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .is_ok();
        if installed {
            tracing::debug!(directive = DEFAULT_TRACING_DIRECTIVE, "plot-style tracing ready");
        }
        return installed;
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
