//! Frame clock for host-driven animation.
//!
//! The counter never reads the system time on its own. A host delivers one
//! timestamp per display frame and the [`FrameClock`] turns consecutive
//! timestamps into elapsed deltas for the animation to consume.

use std::time::{Duration, Instant};

use crate::logging::targets;

/// Converts frame timestamps into per-frame deltas.
///
/// The first frame after creation or [`reset`](Self::reset) yields a zero
/// delta, so an animation armed between frames starts at its origin instead
/// of jumping ahead by the idle time.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Timestamp of the previous frame.
    last_frame: Option<Instant>,
    /// Number of frames observed since the last reset.
    frame_count: u64,
}

impl FrameClock {
    /// Create a clock that has not seen any frame yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame at `now` and return the time since the previous frame.
    pub fn tick(&mut self, now: Instant) -> Duration {
        let delta = match self.last_frame {
            Some(last) if now < last => {
                tracing::warn!(
                    target: targets::CLOCK,
                    ?last,
                    ?now,
                    "frame timestamp went backwards, using zero delta"
                );
                Duration::ZERO
            }
            Some(last) => now - last,
            None => Duration::ZERO,
        };
        self.last_frame = Some(now);
        self.frame_count += 1;
        tracing::trace!(
            target: targets::CLOCK,
            frame = self.frame_count,
            delta_us = delta.as_micros() as u64,
            "frame tick"
        );
        delta
    }

    /// Forget the previous frame; the next tick yields a zero delta.
    pub fn reset(&mut self) {
        if self.last_frame.is_some() {
            tracing::debug!(target: targets::CLOCK, frames = self.frame_count, "frame clock reset");
        }
        self.last_frame = None;
        self.frame_count = 0;
    }

    /// Number of frames observed since the last reset.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Timestamp of the most recent frame, if any.
    pub fn last_frame(&self) -> Option<Instant> {
        self.last_frame
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLog {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    #[test]
    fn test_first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(Instant::now()), Duration::ZERO);
        assert_eq!(clock.frame_count(), 1);
    }

    #[test]
    fn test_consecutive_ticks() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.tick(start);
        assert_eq!(clock.tick(start + Duration::from_millis(16)), Duration::from_millis(16));
        assert_eq!(clock.tick(start + Duration::from_millis(48)), Duration::from_millis(32));
        assert_eq!(clock.last_frame(), Some(start + Duration::from_millis(48)));
    }

    #[test]
    fn test_backwards_timestamp() {
        let mut clock = FrameClock::new();
        let start = Instant::now() + Duration::from_secs(1);
        clock.tick(start);
        assert_eq!(clock.tick(start - Duration::from_millis(5)), Duration::ZERO);
    }

    #[test]
    fn test_reset() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.tick(start);
        clock.reset();
        assert_eq!(clock.frame_count(), 0);
        assert_eq!(clock.tick(start + Duration::from_secs(10)), Duration::ZERO);
    }

    #[test]
    fn test_logs_under_clock_target() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(format!("{}=trace", targets::CLOCK))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut clock = FrameClock::new();
            let start = Instant::now();
            clock.tick(start);
            clock.tick(start + Duration::from_millis(16));
            clock.reset();
        });

        let contents = log.contents();
        assert!(contents.contains("frame tick"), "{contents}");
        assert!(contents.contains("frame clock reset"), "{contents}");
        assert!(contents.contains(targets::CLOCK), "{contents}");
    }
}
