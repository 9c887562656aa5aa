//! Easing curves for counter animations.
//!
//! An easing curve maps the linear elapsed fraction of an animation (0.0 to
//! 1.0) to the fraction of the value range that should have been covered.
//! The counter supports the four classic view-animation curves; accelerate
//! and decelerate take a factor that sharpens the curve.

use std::f32::consts::PI;

use mechanical_counter_core::logging::targets;

/// Available easing curves.
///
/// Each curve has a stable numeric code used by attribute files; see
/// [`EasingKind::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EasingKind {
    /// Starts slow and speeds up.
    Accelerate,
    /// Starts fast and slows down.
    #[default]
    Decelerate,
    /// Constant speed.
    Linear,
    /// Slow start and end, fast middle.
    AccelerateDecelerate,
}

impl EasingKind {
    /// All curves, in code order.
    pub const ALL: [EasingKind; 4] = [
        EasingKind::Accelerate,
        EasingKind::Decelerate,
        EasingKind::Linear,
        EasingKind::AccelerateDecelerate,
    ];

    /// The numeric code of this curve.
    pub fn code(self) -> i32 {
        match self {
            EasingKind::Accelerate => 0,
            EasingKind::Decelerate => 1,
            EasingKind::Linear => 2,
            EasingKind::AccelerateDecelerate => 3,
        }
    }

    /// Decode a numeric code, returning `None` for unknown codes.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Decode a numeric code, falling back to [`EasingKind::Decelerate`] for
    /// unknown codes.
    pub fn from_code_or_default(code: i32) -> Self {
        Self::from_code(code).unwrap_or_else(|| {
            tracing::warn!(target: targets::COUNTER, code, "unknown easing code, using default");
            Self::default()
        })
    }

    /// Whether this curve reads the easing factor.
    pub fn uses_factor(self) -> bool {
        matches!(self, EasingKind::Accelerate | EasingKind::Decelerate)
    }
}

/// An easing curve together with its shaping factor.
///
/// A factor of 1.0 gives the quadratic curve; larger factors exaggerate it.
/// The factor is ignored by [`EasingKind::Linear`] and
/// [`EasingKind::AccelerateDecelerate`].
///
/// # Example
///
/// ```
/// use mechanical_counter::widget::animation::{Easing, EasingKind};
///
/// let linear = Easing::linear();
/// assert_eq!(linear.ease(0.5), 0.5);
///
/// // Decelerate: faster at the start
/// assert!(Easing::new(EasingKind::Decelerate, 1.0).ease(0.5) > 0.5);
///
/// // Accelerate: slower at the start
/// assert!(Easing::new(EasingKind::Accelerate, 1.0).ease(0.5) < 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Easing {
    kind: EasingKind,
    factor: f32,
}

impl Easing {
    /// Create an easing curve.
    pub fn new(kind: EasingKind, factor: f32) -> Self {
        Self { kind, factor }
    }

    /// Constant speed.
    pub fn linear() -> Self {
        Self::new(EasingKind::Linear, 1.0)
    }

    /// The curve kind.
    #[inline]
    pub fn kind(&self) -> EasingKind {
        self.kind
    }

    /// The shaping factor.
    #[inline]
    pub fn factor(&self) -> f32 {
        self.factor
    }

    /// Whether the factor can be used to evaluate the curve.
    pub fn is_valid(&self) -> bool {
        self.factor.is_finite() && self.factor > 0.0
    }

    /// Apply the curve to an elapsed fraction.
    ///
    /// The input is clamped to 0.0..=1.0. Every curve maps 0.0 to 0.0 and 1.0
    /// to 1.0 and is non-decreasing in between.
    #[inline]
    pub fn ease(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self.kind {
            EasingKind::Linear => t,
            EasingKind::Accelerate => accelerate(t, self.factor),
            EasingKind::Decelerate => decelerate(t, self.factor),
            EasingKind::AccelerateDecelerate => accelerate_decelerate(t),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::new(EasingKind::Decelerate, 1.0)
    }
}

#[inline]
fn accelerate(t: f32, factor: f32) -> f32 {
    if factor == 1.0 {
        t * t
    } else {
        t.powf(2.0 * factor)
    }
}

#[inline]
fn decelerate(t: f32, factor: f32) -> f32 {
    if factor == 1.0 {
        1.0 - (1.0 - t) * (1.0 - t)
    } else {
        1.0 - (1.0 - t).powf(2.0 * factor)
    }
}

#[inline]
fn accelerate_decelerate(t: f32) -> f32 {
    ((t + 1.0) * PI).cos() / 2.0 + 0.5
}
