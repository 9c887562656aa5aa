//! Core systems for the mechanical counter.
//!
//! This crate provides the host-facing foundation the counter widget is built on:
//!
//! - **Signal/Slot System**: Typed notifications for redraw and completion
//! - **Frame Clock**: Turns host frame timestamps into animation deltas
//! - **Errors**: The crate-wide [`CounterError`] and [`Result`] alias
//! - **Logging**: `tracing` targets and span helpers
//!
//! # Signal Example
//!
//! ```
//! use mechanical_counter_core::Signal;
//!
//! let needs_redraw = Signal::<()>::new();
//! let conn_id = needs_redraw.connect(|_| println!("redraw"));
//!
//! needs_redraw.emit(());
//! needs_redraw.disconnect(conn_id);
//! ```
//!
//! # Frame Clock Example
//!
//! ```
//! use mechanical_counter_core::FrameClock;
//! use std::time::{Duration, Instant};
//!
//! let mut clock = FrameClock::new();
//! let t0 = Instant::now();
//! assert_eq!(clock.tick(t0), Duration::ZERO);
//! assert_eq!(clock.tick(t0 + Duration::from_millis(16)), Duration::from_millis(16));
//! ```

mod clock;
mod error;
pub mod logging;
pub mod signal;

pub use clock::FrameClock;
pub use error::{CounterError, Result};
pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
