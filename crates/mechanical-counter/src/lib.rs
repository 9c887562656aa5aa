//! Mechanical Counter - an odometer-style animated numeric counter.
//!
//! This is the main crate: it re-exports the core primitives (signals,
//! frame clock, errors, logging) and provides the counter widget.
//!
//! The crate does not draw anything itself. A host measures the digit
//! glyphs once, feeds frames to the counter, and draws the two digits of
//! every column at the positions the layout reports.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use mechanical_counter::prelude::*;
//!
//! let mut counter = MechanicalCounter::new(CounterConfig::default()).unwrap();
//! counter.counted.connect(|value| println!("settled on {value}"));
//!
//! counter.set_goal(42);
//! let start = Instant::now();
//! let mut frame = 0u32;
//! while counter.frame(start + Duration::from_millis(16) * frame) {
//!     frame += 1;
//! }
//! assert_eq!(counter.current_value(), 42);
//! ```

pub use mechanical_counter_core::*;

pub mod prelude;
pub mod widget;
