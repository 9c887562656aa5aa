//! Logging facilities for the mechanical counter.
//!
//! The counter uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in the host application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("mechanical_counter=debug")
//!         .init();
//! }
//! ```
//!
//! State transitions (start, stop, goal changes) are logged at `debug`,
//! per-frame progress at `trace`.

/// Span names used for tracing.
pub mod span_names {
    /// Performance measurement span.
    pub const PERF: &str = "mechanical_counter::perf";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core target.
    pub const CORE: &str = "mechanical_counter_core";
    /// Signal emission target.
    pub const SIGNAL: &str = "mechanical_counter_core::signal";
    /// Frame clock target.
    pub const CLOCK: &str = "mechanical_counter_core::clock";
    /// Counter state machine target.
    pub const COUNTER: &str = "mechanical_counter::counter";
    /// Value interpolator target.
    pub const INTERPOLATOR: &str = "mechanical_counter::interpolator";
}

/// Performance tracing span guard.
///
/// The span stays entered until the guard is dropped.
///
/// ```
/// use mechanical_counter_core::PerfSpan;
///
/// {
///     let _span = PerfSpan::new("compute_columns");
///     // measured work
/// }
/// ```
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::trace_span!(target: span_names::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_share_crate_prefix() {
        assert!(targets::SIGNAL.starts_with(targets::CORE));
        assert!(targets::CLOCK.starts_with(targets::CORE));
        assert!(targets::COUNTER.starts_with("mechanical_counter::"));
        assert_eq!(span_names::PERF, "mechanical_counter::perf");
    }

    #[test]
    fn test_perf_span() {
        let _span = PerfSpan::new("test_operation");
    }
}
