//! Counter configuration.
//!
//! [`CounterConfig`] is the typed configuration of one counter.
//! [`CounterAttributes`] is the declarative form a host reads from an
//! attribute file, with integer codes for the enumerations and defaults for
//! every missing entry.

use std::time::Duration;

use mechanical_counter_core::logging::targets;
use mechanical_counter_core::{CounterError, Result};
use serde::Deserialize;

use crate::widget::animation::{Easing, EasingKind};

/// How digits move while the counter flips.
///
/// `AlwaysUp`/`AlwaysDown` keep the motion direction fixed whatever the
/// counting direction. `MoreUp`/`MoreDown` describe motion when counting up
/// and reverse it when counting down, like a physical wheel turned back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RotationMode {
    /// Digits always travel upwards.
    AlwaysUp,
    /// Digits always travel downwards.
    AlwaysDown,
    /// Digits travel upwards when counting up, downwards when counting down.
    #[default]
    MoreUp,
    /// Digits travel downwards when counting up, upwards when counting down.
    MoreDown,
}

impl RotationMode {
    /// All modes, in code order.
    pub const ALL: [RotationMode; 4] = [
        RotationMode::AlwaysUp,
        RotationMode::AlwaysDown,
        RotationMode::MoreUp,
        RotationMode::MoreDown,
    ];

    /// The numeric code of this mode.
    pub fn code(self) -> i32 {
        match self {
            RotationMode::AlwaysUp => 0,
            RotationMode::AlwaysDown => 1,
            RotationMode::MoreUp => 2,
            RotationMode::MoreDown => 3,
        }
    }

    /// Decode a numeric code, returning `None` for unknown codes.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.code() == code)
    }

    /// Decode a numeric code, falling back to [`RotationMode::MoreUp`] for
    /// unknown codes.
    pub fn from_code_or_default(code: i32) -> Self {
        Self::from_code(code).unwrap_or_else(|| {
            tracing::warn!(target: targets::COUNTER, code, "unknown rotation mode code, using default");
            Self::default()
        })
    }
}

/// Configuration of a counter.
///
/// Built with [`CounterConfig::new`] and the `with_*` builders, then checked
/// by [`CounterConfig::validate`] when handed to a counter.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use mechanical_counter::widget::counter::{CounterConfig, RotationMode};
///
/// let config = CounterConfig::new()
///     .with_column_count(6)
///     .with_duration(Duration::from_millis(1500))
///     .with_rotation_mode(RotationMode::AlwaysDown);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterConfig {
    column_count: u32,
    duration: Duration,
    rotation_mode: RotationMode,
    easing: Easing,
    auto_start: bool,
}

impl CounterConfig {
    /// Default number of displayed columns.
    pub const DEFAULT_COLUMN_COUNT: u32 = 4;
    /// Default animation duration.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

    /// Create a configuration with default settings:
    /// 4 columns, 3 seconds, [`RotationMode::MoreUp`], decelerate easing,
    /// auto-start enabled.
    pub fn new() -> Self {
        Self {
            column_count: Self::DEFAULT_COLUMN_COUNT,
            duration: Self::DEFAULT_DURATION,
            rotation_mode: RotationMode::default(),
            easing: Easing::default(),
            auto_start: true,
        }
    }

    /// Number of displayed columns.
    #[inline]
    pub fn column_count(&self) -> u32 {
        self.column_count
    }

    /// Animation duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Rotation mode.
    #[inline]
    pub fn rotation_mode(&self) -> RotationMode {
        self.rotation_mode
    }

    /// Easing curve.
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Whether assigning a goal starts the animation.
    #[inline]
    pub fn auto_start(&self) -> bool {
        self.auto_start
    }

    /// Set column count using builder pattern.
    pub fn with_column_count(mut self, column_count: u32) -> Self {
        self.column_count = column_count;
        self
    }

    /// Set duration using builder pattern.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set rotation mode using builder pattern.
    pub fn with_rotation_mode(mut self, rotation_mode: RotationMode) -> Self {
        self.rotation_mode = rotation_mode;
        self
    }

    /// Set easing using builder pattern.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set auto-start using builder pattern.
    pub fn with_auto_start(mut self, auto_start: bool) -> Self {
        self.auto_start = auto_start;
        self
    }

    /// Set the column count, rejecting zero.
    pub fn set_column_count(&mut self, column_count: u32) -> Result<()> {
        check_column_count(column_count)?;
        self.column_count = column_count;
        Ok(())
    }

    /// Set the duration, rejecting zero.
    pub fn set_duration(&mut self, duration: Duration) -> Result<()> {
        check_duration(duration)?;
        self.duration = duration;
        Ok(())
    }

    /// Set the rotation mode.
    pub fn set_rotation_mode(&mut self, rotation_mode: RotationMode) {
        self.rotation_mode = rotation_mode;
    }

    /// Set the easing, rejecting unusable factors.
    pub fn set_easing(&mut self, easing: Easing) -> Result<()> {
        check_easing(easing)?;
        self.easing = easing;
        Ok(())
    }

    /// Set whether assigning a goal starts the animation.
    pub fn set_auto_start(&mut self, auto_start: bool) {
        self.auto_start = auto_start;
    }

    /// Check every invariant of the configuration.
    pub fn validate(&self) -> Result<()> {
        check_column_count(self.column_count)?;
        check_duration(self.duration)?;
        check_easing(self.easing)
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn check_column_count(column_count: u32) -> Result<()> {
    if column_count == 0 {
        return Err(CounterError::invalid_config("column_count", "must be at least 1"));
    }
    Ok(())
}

fn check_duration(duration: Duration) -> Result<()> {
    if duration.is_zero() {
        return Err(CounterError::invalid_config("duration", "must be positive"));
    }
    Ok(())
}

fn check_easing(easing: Easing) -> Result<()> {
    if !easing.is_valid() {
        return Err(CounterError::invalid_config(
            "easing",
            format!("factor must be finite and positive, got {}", easing.factor()),
        ));
    }
    Ok(())
}

/// Declarative counter attributes.
///
/// Field names and defaults follow the counter's attribute set; enumerations
/// are integer codes decoded with the `from_code_or_default` policies.
///
/// ```
/// use mechanical_counter::widget::counter::{CounterAttributes, RotationMode};
///
/// let attrs = CounterAttributes::from_toml_str("goal = 250\ndirection = 1\n").unwrap();
/// let config = attrs.to_config().unwrap();
/// assert_eq!(attrs.goal, 250);
/// assert_eq!(config.rotation_mode(), RotationMode::AlwaysDown);
/// assert_eq!(config.column_count(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CounterAttributes {
    /// Initial goal. Negative values are normalized by the counter.
    pub goal: i64,
    /// Whether assigning a goal starts the animation.
    pub auto_start: bool,
    /// Animation duration in milliseconds.
    pub duration: u64,
    /// Number of displayed columns.
    pub digit_number: u32,
    /// Rotation mode code (see [`RotationMode::code`]).
    pub direction: i32,
    /// Easing curve code (see [`EasingKind::code`]).
    pub mode: i32,
    /// Easing factor.
    pub mode_factor: f32,
}

impl Default for CounterAttributes {
    fn default() -> Self {
        Self {
            goal: 1000,
            auto_start: true,
            duration: 3000,
            digit_number: CounterConfig::DEFAULT_COLUMN_COUNT,
            direction: RotationMode::MoreUp.code(),
            mode: EasingKind::Decelerate.code(),
            mode_factor: 1.0,
        }
    }
}

impl CounterAttributes {
    /// Parse attributes from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Build and validate the typed configuration.
    pub fn to_config(&self) -> Result<CounterConfig> {
        let config = CounterConfig::new()
            .with_column_count(self.digit_number)
            .with_duration(Duration::from_millis(self.duration))
            .with_rotation_mode(RotationMode::from_code_or_default(self.direction))
            .with_easing(Easing::new(
                EasingKind::from_code_or_default(self.mode),
                self.mode_factor,
            ))
            .with_auto_start(self.auto_start);
        config.validate()?;
        Ok(config)
    }
}
