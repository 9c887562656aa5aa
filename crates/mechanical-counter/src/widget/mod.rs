//! Counter widget and its animation support.
//!
//! - [`animation`]: easing curves and the frame-driven value interpolator.
//! - [`counter`]: the mechanical counter itself.

pub mod animation;
pub mod counter;
