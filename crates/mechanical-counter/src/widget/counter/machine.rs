//! The counter state machine.
//!
//! [`MechanicalCounter`] owns the counted value, the goal, and at most one
//! in-flight [`ValueInterpolator`]. Hosts feed it frames and read back the
//! column transitions to draw.
//!
//! # Lifecycle
//!
//! The counter is `Idle` until an animation starts, `Running` while one is
//! in flight, and returns to `Idle` when the goal is reached or the
//! animation is stopped. Every settled count is announced once through
//! [`MechanicalCounter::counted`].

use std::time::{Duration, Instant};

use mechanical_counter_core::logging::targets;
use mechanical_counter_core::{CounterError, FrameClock, PerfSpan, Result, Signal};

use super::config::{CounterAttributes, CounterConfig, RotationMode};
use super::digits::{ColumnTransition, CountDirection, DigitTransitionComputer, SCALE};
use super::geometry::{CounterLayout, GlyphMetrics};
use crate::widget::animation::{Easing, InterpolatorEvent, ValueInterpolator};

/// Whether a counter has an animation in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CounterState {
    /// No animation in flight.
    #[default]
    Idle,
    /// An animation is moving the value towards the goal.
    Running,
}

/// An odometer-style counter that animates from its value to a goal.
///
/// # Signals
///
/// - `needs_redraw()`: Emitted after every tick and every change that
///   affects what is drawn.
/// - `counted(u64)`: Emitted once per completed or stopped animation, with
///   the settled value.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use mechanical_counter::widget::animation::Easing;
/// use mechanical_counter::widget::counter::{CounterConfig, MechanicalCounter};
///
/// let config = CounterConfig::new()
///     .with_duration(Duration::from_millis(200))
///     .with_easing(Easing::linear());
/// let mut counter = MechanicalCounter::new(config).unwrap();
///
/// assert!(counter.set_goal(42));
/// while counter.is_running() {
///     counter.advance(Duration::from_millis(16));
/// }
/// assert_eq!(counter.current_value(), 42);
/// ```
#[derive(Debug)]
pub struct MechanicalCounter {
    config: CounterConfig,
    /// Integer part of the scaled progress.
    current_value: u64,
    goal: u64,
    /// Animated value × 1000.
    scaled_progress: u64,
    /// The in-flight animation. Replaced wholesale on every restart.
    animation: Option<ValueInterpolator>,
    clock: FrameClock,
    metrics: Option<GlyphMetrics>,

    /// Signal emitted when the counter needs to be redrawn.
    pub needs_redraw: Signal<()>,

    /// Signal emitted when a count settles.
    pub counted: Signal<u64>,
}

static_assertions::assert_impl_all!(MechanicalCounter: Send, Sync);

impl MechanicalCounter {
    /// Create an idle counter at zero with a goal of zero.
    pub fn new(config: CounterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            current_value: 0,
            goal: 0,
            scaled_progress: 0,
            animation: None,
            clock: FrameClock::new(),
            metrics: None,
            needs_redraw: Signal::new(),
            counted: Signal::new(),
        })
    }

    /// Create a counter from declarative attributes and assign the initial goal.
    ///
    /// With auto-start enabled (the default) the counter is already running
    /// when returned.
    pub fn from_attributes(attributes: &CounterAttributes) -> Result<Self> {
        let mut counter = Self::new(attributes.to_config()?)?;
        counter.set_goal(attributes.goal);
        Ok(counter)
    }

    // =========================================================================
    // State
    // =========================================================================

    /// The configuration.
    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    /// The value currently displayed, without its fractional flip.
    pub fn current_value(&self) -> u64 {
        self.current_value
    }

    /// The value the counter is heading to.
    pub fn goal(&self) -> u64 {
        self.goal
    }

    /// The animated value × 1000.
    pub fn scaled_progress(&self) -> u64 {
        self.scaled_progress
    }

    /// Check if an animation is in flight.
    pub fn is_running(&self) -> bool {
        self.animation.is_some()
    }

    /// The current lifecycle state.
    pub fn state(&self) -> CounterState {
        if self.is_running() {
            CounterState::Running
        } else {
            CounterState::Idle
        }
    }

    /// The in-flight animation, if any.
    pub fn animation(&self) -> Option<&ValueInterpolator> {
        self.animation.as_ref()
    }

    /// Direction from the current value towards the goal.
    pub fn direction(&self) -> CountDirection {
        CountDirection::between(self.current_value, self.goal)
    }

    // =========================================================================
    // Control
    // =========================================================================

    /// Assign a new goal.
    ///
    /// Negative goals are stored as their absolute value. Any in-flight
    /// animation is cancelled without a `counted` notification. If the goal
    /// differs from the current value and auto-start is enabled, a new
    /// animation starts from the current value.
    ///
    /// Returns `true` if an animation was started.
    pub fn set_goal(&mut self, goal: i64) -> bool {
        self.goal = goal.unsigned_abs();
        if let Some(mut animation) = self.animation.take() {
            animation.cancel();
            tracing::debug!(
                target: targets::COUNTER,
                value = self.current_value,
                goal = self.goal,
                "goal changed, in-flight animation cancelled"
            );
        }

        if self.goal != self.current_value && self.config.auto_start() {
            self.start();
            true
        } else {
            false
        }
    }

    /// Start animating from the current value to the goal.
    ///
    /// If an animation is already in flight the counter is [`reset`](Self::reset)
    /// instead; there is never more than one animation.
    pub fn start(&mut self) {
        if self.is_running() {
            self.reset();
            return;
        }

        let from = self.current_value.saturating_mul(SCALE);
        let to = self.goal.saturating_mul(SCALE);
        let mut animation =
            ValueInterpolator::new(from, to, self.config.duration(), self.config.easing());
        animation.start();
        self.clock.reset();
        self.animation = Some(animation);
        tracing::debug!(
            target: targets::COUNTER,
            from = self.current_value,
            goal = self.goal,
            direction = ?self.direction(),
            "counter started"
        );
    }

    /// Stop the in-flight animation and announce the current value.
    ///
    /// The value stays wherever the animation left it. Returns `false` (and
    /// emits nothing) if the counter was idle.
    pub fn stop(&mut self) -> bool {
        let Some(mut animation) = self.animation.take() else {
            return false;
        };
        animation.cancel();
        tracing::debug!(
            target: targets::COUNTER,
            value = self.current_value,
            goal = self.goal,
            "counter stopped"
        );
        self.counted.emit(self.current_value);
        true
    }

    /// Stop, then start again from the current value.
    pub fn reset(&mut self) {
        self.stop();
        self.start();
    }

    // =========================================================================
    // Ticks
    // =========================================================================

    /// Apply one animation sample.
    ///
    /// Hosts that drive their own animator call this directly with the
    /// scaled value; otherwise [`advance`](Self::advance) calls it. When the
    /// sample reaches the goal the progress settles on the goal exactly and
    /// the counter stops.
    pub fn on_tick(&mut self, scaled_progress: u64) {
        self.current_value = scaled_progress / SCALE;
        let arrived = self.current_value == self.goal;
        self.scaled_progress = if arrived {
            self.goal.saturating_mul(SCALE)
        } else {
            scaled_progress
        };
        tracing::trace!(
            target: targets::COUNTER,
            scaled_progress = self.scaled_progress,
            value = self.current_value,
            "tick"
        );

        self.needs_redraw.emit(());
        if arrived {
            self.stop();
        }
    }

    /// Advance the in-flight animation by `delta`.
    ///
    /// Returns `true` if a tick was applied.
    pub fn advance(&mut self, delta: Duration) -> bool {
        let Some(event) = self.animation.as_mut().and_then(|animation| animation.advance(delta))
        else {
            return false;
        };

        self.on_tick(event.value());
        if matches!(event, InterpolatorEvent::Finished(_)) && self.is_running() {
            // The end bound saturated below the goal; nothing more will come.
            self.stop();
        }
        true
    }

    /// Advance the animation to the frame at `now`.
    ///
    /// The first frame after a start applies the animation's origin.
    pub fn frame(&mut self, now: Instant) -> bool {
        let delta = self.clock.tick(now);
        self.advance(delta)
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Set the number of displayed columns.
    pub fn set_column_count(&mut self, column_count: u32) -> Result<()> {
        let previous = self.config.column_count();
        self.config.set_column_count(column_count)?;
        if previous != column_count {
            self.needs_redraw.emit(());
        }
        Ok(())
    }

    /// Set the duration used by the next animation.
    pub fn set_duration(&mut self, duration: Duration) -> Result<()> {
        self.config.set_duration(duration)
    }

    /// Set the rotation mode.
    pub fn set_rotation_mode(&mut self, rotation_mode: RotationMode) {
        if self.config.rotation_mode() != rotation_mode {
            self.config.set_rotation_mode(rotation_mode);
            self.needs_redraw.emit(());
        }
    }

    /// Set the easing used by the next animation.
    pub fn set_easing(&mut self, easing: Easing) -> Result<()> {
        self.config.set_easing(easing)
    }

    /// Set whether assigning a goal starts the animation.
    pub fn set_auto_start(&mut self, auto_start: bool) {
        self.config.set_auto_start(auto_start);
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// A transition computer for the current configuration.
    pub fn transition_computer(&self) -> DigitTransitionComputer {
        DigitTransitionComputer::new(self.config.column_count(), self.config.rotation_mode())
    }

    /// Column transitions for the current frame, least significant first.
    pub fn columns(&self) -> Vec<ColumnTransition> {
        let _span = PerfSpan::new("columns");
        self.transition_computer().compute(self.scaled_progress, self.direction())
    }

    /// Supply measured glyph metrics.
    pub fn set_glyph_metrics(&mut self, metrics: GlyphMetrics) {
        if self.metrics != Some(metrics) {
            self.metrics = Some(metrics);
            self.needs_redraw.emit(());
        }
    }

    /// Measure the digit glyphs and keep the result.
    pub fn measure_glyphs<F>(&mut self, measure: F) -> Result<()>
    where
        F: FnMut(u8) -> (f32, f32),
    {
        let metrics = GlyphMetrics::measure(measure)?;
        self.set_glyph_metrics(metrics);
        Ok(())
    }

    /// The supplied glyph metrics, if any.
    pub fn glyph_metrics(&self) -> Option<GlyphMetrics> {
        self.metrics
    }

    /// Layout of the columns.
    ///
    /// Fails with [`CounterError::MetricsUnavailable`] until glyph metrics
    /// have been supplied.
    pub fn layout(&self) -> Result<CounterLayout> {
        let metrics = self.metrics.ok_or(CounterError::MetricsUnavailable)?;
        Ok(CounterLayout::new(metrics, self.config.column_count()))
    }
}
