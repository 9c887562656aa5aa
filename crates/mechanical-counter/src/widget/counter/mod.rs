//! The mechanical counter widget.
//!
//! A mechanical counter displays a non-negative integer in a fixed number of
//! decimal columns and animates changes the way an odometer does: the least
//! significant wheel turns continuously, and each higher wheel turns only
//! while every wheel below it is rolling over.
//!
//! # Pieces
//!
//! - [`CounterConfig`] and [`CounterAttributes`]: typed and declarative
//!   configuration.
//! - [`DigitTransitionComputer`]: the pure per-frame column computation.
//! - [`MechanicalCounter`]: value, goal and animation lifecycle.
//! - [`CounterLayout`]: where each column's two digits are drawn.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use mechanical_counter::widget::counter::{CounterConfig, MechanicalCounter, RotationMode};
//!
//! let config = CounterConfig::new()
//!     .with_column_count(4)
//!     .with_rotation_mode(RotationMode::MoreUp)
//!     .with_duration(Duration::from_millis(500));
//! let mut counter = MechanicalCounter::new(config).unwrap();
//! counter.measure_glyphs(|_digit| (12.0, 18.0)).unwrap();
//!
//! counter.set_goal(1200);
//! while counter.advance(Duration::from_millis(16)) {
//!     let layout = counter.layout().unwrap();
//!     for column in counter.columns() {
//!         let _placement = layout.place(&column);
//!     }
//! }
//! assert_eq!(counter.current_value(), 1200);
//! ```

mod config;
mod digits;
mod geometry;
mod machine;

pub use config::{CounterAttributes, CounterConfig, RotationMode};
pub use digits::{
    ColumnTransition, CountDirection, DigitTransitionComputer, FULL_OFFSET, SCALE, low_digit,
};
pub use geometry::{ColumnPlacement, CounterLayout, GlyphMetrics, Slot};
pub use machine::{CounterState, MechanicalCounter};
