//! Prelude module for the mechanical counter.
//!
//! ```
//! use mechanical_counter::prelude::*;
//! ```

// ============================================================================
// Core
// ============================================================================

pub use crate::{CounterError, FrameClock, Result, Signal};

// ============================================================================
// Animation
// ============================================================================

pub use crate::widget::animation::{Easing, EasingKind, ValueInterpolator};

// ============================================================================
// Counter
// ============================================================================

pub use crate::widget::counter::{
    ColumnTransition, CountDirection, CounterAttributes, CounterConfig, CounterLayout,
    CounterState, GlyphMetrics, MechanicalCounter, RotationMode,
};
