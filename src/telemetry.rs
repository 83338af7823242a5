//! Optional subscriber bootstrap for hosts of `chart-layout`.
//!
//! Events emitted under the `chart_layout` target:
//! - `layout_pass` span (`debug`) around every [`layout`](crate::layout::layout) call,
//!   closed by a "layout pass complete" event carrying anchor and size.
//! - "measured stack layout" / "measured table layout" (`debug`) with item,
//!   line, row and column counts.
//! - "measured item" and "wrapping to a new line" (`trace`) per child.
//! - "table cell overwritten, last write wins" (`debug`).
//! - "stack used before measure" / "table used before measure" (`warn`).

/// Filter used when `RUST_LOG` is unset or invalid.
#[cfg_attr(not(feature = "telemetry"), allow(dead_code))]
const FALLBACK_FILTER: &str = "chart_layout=info";

/// Installs a compact global `tracing` subscriber for the events above.
///
/// Returns `false` when the `telemetry` feature is off or another global
/// subscriber already won.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
