//! Animation support for the mechanical counter.
//!
//! This module provides the easing curves and the scaled-integer
//! interpolator that drive a counter from its current value to its goal.
//!
//! # Easing Curves
//!
//! Easing curves map the linear elapsed fraction of an animation (0.0 to
//! 1.0) to the fraction of the value range already covered.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use mechanical_counter::widget::animation::{Easing, EasingKind, ValueInterpolator};
//!
//! let easing = Easing::new(EasingKind::Decelerate, 1.0);
//! let mut anim = ValueInterpolator::new(0, 5_000, Duration::from_millis(300), easing);
//! anim.start();
//! while let Some(event) = anim.advance(Duration::from_millis(16)) {
//!     let _scaled = event.value();
//! }
//! assert_eq!(anim.value(), 5_000);
//! ```

mod easing;
mod interpolator;

pub use easing::{Easing, EasingKind};
pub use interpolator::{InterpolatorEvent, InterpolatorState, ValueInterpolator};
