//! Integration tests for driving notifications from a frame clock.

use std::sync::Arc;
use std::time::{Duration, Instant};

use mechanical_counter_core::{FrameClock, Signal};
use parking_lot::Mutex;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("mechanical_counter_core=trace")
        .with_test_writer()
        .try_init();
}

#[test]
fn test_elapsed_accumulates_across_frames() {
    init_tracing();

    let elapsed_changed = Signal::<Duration>::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    elapsed_changed.connect(move |&elapsed| seen_clone.lock().push(elapsed));

    let mut clock = FrameClock::new();
    let origin = Instant::now();
    let mut elapsed = Duration::ZERO;
    for frame in 0..5u64 {
        elapsed += clock.tick(origin + Duration::from_millis(frame * 20));
        elapsed_changed.emit(elapsed);
    }

    let seen = seen.lock();
    assert_eq!(seen.len(), 5);
    assert_eq!(seen[0], Duration::ZERO);
    assert_eq!(seen[4], Duration::from_millis(80));
}

#[test]
fn test_reset_between_bursts() {
    init_tracing();

    let mut clock = FrameClock::new();
    let origin = Instant::now();
    clock.tick(origin);
    clock.tick(origin + Duration::from_millis(16));

    // Host stops delivering frames for a while, then resumes.
    clock.reset();
    assert_eq!(clock.tick(origin + Duration::from_secs(30)), Duration::ZERO);
    assert_eq!(
        clock.tick(origin + Duration::from_secs(30) + Duration::from_millis(16)),
        Duration::from_millis(16)
    );
    assert_eq!(clock.frame_count(), 2);
}

#[test]
fn test_scoped_observer_detaches() {
    let signal = Signal::<()>::new();
    let count = Arc::new(Mutex::new(0usize));
    {
        let count_clone = count.clone();
        let guard = signal.connect_scoped(move |_| *count_clone.lock() += 1);
        signal.emit(());
        assert!(signal.disconnect(guard.id()));
        signal.emit(());
    }
    signal.emit(());
    assert_eq!(*count.lock(), 1);
}
