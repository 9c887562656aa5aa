//! Scaled-integer value interpolation.
//!
//! A [`ValueInterpolator`] moves an integer from a start bound to an end
//! bound over a fixed duration, shaped by an [`Easing`] curve. It owns no
//! timer: the host's animation clock feeds it elapsed time one frame at a
//! time through [`ValueInterpolator::advance`].

use std::time::Duration;

use mechanical_counter_core::logging::targets;

use super::easing::Easing;

/// Lifecycle of an interpolator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolatorState {
    /// Created but not started.
    #[default]
    Idle,
    /// Delivering progress on every advance.
    Running,
    /// Reached its end bound through normal progression.
    Finished,
    /// Cancelled before reaching its end bound.
    Cancelled,
}

/// What an interpolator reports for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolatorEvent {
    /// An intermediate value.
    Progress(u64),
    /// The end bound was reached. Reported exactly once, never after a cancel.
    Finished(u64),
}

impl InterpolatorEvent {
    /// The value carried by the event.
    pub fn value(&self) -> u64 {
        match *self {
            InterpolatorEvent::Progress(value) | InterpolatorEvent::Finished(value) => value,
        }
    }
}

/// Drives an integer from `from` to `to` over `duration`.
///
/// Values are monotonic: they never move back towards `from`, whatever the
/// curve does numerically.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use mechanical_counter::widget::animation::{Easing, InterpolatorEvent, ValueInterpolator};
///
/// let mut anim = ValueInterpolator::new(0, 1000, Duration::from_millis(100), Easing::linear());
/// anim.start();
/// assert_eq!(anim.advance(Duration::from_millis(50)), Some(InterpolatorEvent::Progress(500)));
/// assert_eq!(anim.advance(Duration::from_millis(50)), Some(InterpolatorEvent::Finished(1000)));
/// assert_eq!(anim.advance(Duration::from_millis(50)), None);
/// ```
#[derive(Debug, Clone)]
pub struct ValueInterpolator {
    from: u64,
    to: u64,
    duration: Duration,
    easing: Easing,
    /// Time consumed since start.
    elapsed: Duration,
    /// Last value reached.
    value: u64,
    state: InterpolatorState,
}

impl ValueInterpolator {
    /// Create an idle interpolator.
    pub fn new(from: u64, to: u64, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            elapsed: Duration::ZERO,
            value: from,
            state: InterpolatorState::Idle,
        }
    }

    /// Start bound.
    #[inline]
    pub fn from(&self) -> u64 {
        self.from
    }

    /// End bound.
    #[inline]
    pub fn to(&self) -> u64 {
        self.to
    }

    /// Total duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Easing curve.
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Time consumed since start.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Last value reached.
    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> InterpolatorState {
        self.state
    }

    /// Check if the interpolator is delivering progress.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == InterpolatorState::Running
    }

    /// Start delivering progress.
    ///
    /// Returns `false` if the interpolator was already started; an
    /// interpolator runs at most once.
    pub fn start(&mut self) -> bool {
        if self.state != InterpolatorState::Idle {
            return false;
        }
        tracing::debug!(
            target: targets::INTERPOLATOR,
            from = self.from,
            to = self.to,
            duration_ms = self.duration.as_millis() as u64,
            easing = ?self.easing.kind(),
            "interpolator started"
        );
        self.state = InterpolatorState::Running;
        true
    }

    /// Cancel the interpolator.
    ///
    /// The last reached value is kept. Returns `false` (and does nothing) if
    /// the interpolator was not running.
    pub fn cancel(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        tracing::debug!(target: targets::INTERPOLATOR, value = self.value, "interpolator cancelled");
        self.state = InterpolatorState::Cancelled;
        true
    }

    /// Consume `delta` of frame time and report the new value.
    ///
    /// Returns `None` unless running. The frame that reaches the full
    /// duration reports [`InterpolatorEvent::Finished`] with the end bound.
    pub fn advance(&mut self, delta: Duration) -> Option<InterpolatorEvent> {
        if !self.is_running() {
            return None;
        }

        self.elapsed = self.elapsed.saturating_add(delta);
        let raw_progress = if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        };

        if raw_progress >= 1.0 {
            self.value = self.to;
            self.state = InterpolatorState::Finished;
            tracing::debug!(target: targets::INTERPOLATOR, value = self.value, "interpolator finished");
            return Some(InterpolatorEvent::Finished(self.value));
        }

        let eased = f64::from(self.easing.ease(raw_progress as f32));
        let sampled = self.sample(eased);
        // Hold monotonicity against rounding in the curve.
        self.value = if self.to >= self.from {
            sampled.max(self.value)
        } else {
            sampled.min(self.value)
        };
        tracing::trace!(target: targets::INTERPOLATOR, value = self.value, raw_progress, "interpolator progress");
        Some(InterpolatorEvent::Progress(self.value))
    }

    /// Value at an eased fraction, truncated towards `from`.
    fn sample(&self, eased: f64) -> u64 {
        let (low, high) = if self.to >= self.from {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        };
        let covered = (eased.clamp(0.0, 1.0) * (high - low) as f64).trunc() as u64;
        let covered = covered.min(high - low);
        if self.to >= self.from {
            self.from + covered
        } else {
            self.from - covered
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::animation::EasingKind;

    fn linear(from: u64, to: u64, ms: u64) -> ValueInterpolator {
        ValueInterpolator::new(from, to, Duration::from_millis(ms), Easing::linear())
    }

    #[test]
    fn test_not_started_delivers_nothing() {
        let mut anim = linear(0, 1000, 100);
        assert_eq!(anim.state(), InterpolatorState::Idle);
        assert_eq!(anim.advance(Duration::from_millis(10)), None);
        assert_eq!(anim.value(), 0);
    }

    #[test]
    fn test_first_frame_is_start_bound() {
        let mut anim = linear(3000, 9000, 100);
        assert!(anim.start());
        assert!(!anim.start());
        assert_eq!(anim.advance(Duration::ZERO), Some(InterpolatorEvent::Progress(3000)));
    }

    #[test]
    fn test_counts_down() {
        let mut anim = linear(500_000, 0, 1000);
        anim.start();
        assert_eq!(
            anim.advance(Duration::from_millis(250)),
            Some(InterpolatorEvent::Progress(375_000))
        );
        assert_eq!(
            anim.advance(Duration::from_millis(750)),
            Some(InterpolatorEvent::Finished(0))
        );
        assert_eq!(anim.state(), InterpolatorState::Finished);
    }

    #[test]
    fn test_finished_reported_once() {
        let mut anim = linear(0, 10, 10);
        anim.start();
        let mut finished = 0;
        for _ in 0..20 {
            if let Some(InterpolatorEvent::Finished(value)) = anim.advance(Duration::from_millis(1)) {
                assert_eq!(value, 10);
                finished += 1;
            }
        }
        assert_eq!(finished, 1);
    }

    #[test]
    fn test_cancel_keeps_value_and_suppresses_finish() {
        let mut anim = linear(0, 1000, 100);
        anim.start();
        anim.advance(Duration::from_millis(40));
        assert!(anim.cancel());
        assert!(!anim.cancel());
        assert_eq!(anim.value(), 400);
        assert_eq!(anim.advance(Duration::from_millis(100)), None);
        assert_eq!(anim.state(), InterpolatorState::Cancelled);
    }

    #[test]
    fn test_cancel_idle_is_noop() {
        let mut anim = linear(0, 1000, 100);
        assert!(!anim.cancel());
        assert_eq!(anim.state(), InterpolatorState::Idle);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut anim = linear(0, 1000, 0);
        anim.start();
        assert_eq!(anim.advance(Duration::ZERO), Some(InterpolatorEvent::Finished(1000)));
    }

    #[test]
    fn test_same_bounds() {
        let mut anim = linear(7000, 7000, 100);
        anim.start();
        assert_eq!(anim.advance(Duration::from_millis(50)), Some(InterpolatorEvent::Progress(7000)));
    }

    #[test]
    fn test_monotonic_with_every_curve() {
        for kind in EasingKind::ALL {
            for (from, to) in [(0u64, 9_999_000u64), (9_999_000, 0), (1_000, 2_000)] {
                let mut anim =
                    ValueInterpolator::new(from, to, Duration::from_millis(3000), Easing::new(kind, 1.5));
                anim.start();
                let mut previous = from;
                while let Some(event) = anim.advance(Duration::from_millis(7)) {
                    let value = event.value();
                    if to >= from {
                        assert!(value >= previous && value <= to);
                    } else {
                        assert!(value <= previous && value >= to);
                    }
                    previous = value;
                }
                assert_eq!(previous, to);
            }
        }
    }
}
