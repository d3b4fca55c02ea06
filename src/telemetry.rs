//! Telemetry helpers for applications embedding `chart-axis`.
//!
//! Axis renderers emit `tracing` events (`trace` per render pass, `debug` when a
//! pass is skipped). This module keeps subscriber setup explicit and opt-in:
//! consumers can call `init_default_tracing` or wire their own subscriber.

/// Installs a compact fmt subscriber for axis render events.
///
/// The filter comes from `RUST_LOG` and falls back to `info`. Use
/// `RUST_LOG=chart_axis=debug` to see why a pass drew nothing (for example
/// `skip y-axis labels: disabled` or `skip limit lines: missing axis, viewport
/// or transformer`), and `trace` for per-pass primitive counts.
///
/// Returns `false` without the `telemetry` feature or when the host already set
/// a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::init_default_tracing;

    #[test]
    fn second_initialization_is_rejected() {
        let _ = init_default_tracing();
        assert!(!init_default_tracing());
    }
}
