//! Swipe gesture tests - threshold, axis selection, and documented quirks

use touch_tetris::input::{SwipeTracker, TouchEvent};
use touch_tetris::types::{SwipeDirection, SWIPE_THRESHOLD};

fn swipe(from: (f32, f32), to: (f32, f32)) -> Option<SwipeDirection> {
    let mut tracker = SwipeTracker::new();
    tracker.handle_touch_start(&TouchEvent::start(from.0, from.1));
    tracker.handle_touch_end(&TouchEvent::end(to.0, to.1))
}

#[test]
fn test_threshold_constant() {
    assert_eq!(SWIPE_THRESHOLD, 50.0);
}

#[test]
fn test_cardinal_swipes() {
    assert_eq!(swipe((0.0, 0.0), (100.0, 0.0)), Some(SwipeDirection::Right));
    assert_eq!(swipe((100.0, 0.0), (0.0, 0.0)), Some(SwipeDirection::Left));
    assert_eq!(swipe((0.0, 0.0), (0.0, 100.0)), Some(SwipeDirection::Down));
    assert_eq!(swipe((0.0, 0.0), (0.0, -100.0)), Some(SwipeDirection::Up));
}

#[test]
fn test_below_threshold_is_no_gesture() {
    // Short diagonal: the tie-break routes it vertical, where |dy| = 10
    // is under the threshold and dy != 0, so nothing is produced.
    assert_eq!(swipe((0.0, 0.0), (10.0, 10.0)), None);

    // Short horizontal
    assert_eq!(swipe((0.0, 0.0), (40.0, 0.0)), None);

    // Short vertical
    assert_eq!(swipe((0.0, 0.0), (0.0, -30.0)), None);
}

#[test]
fn test_threshold_is_strict() {
    // Exactly 50 units of displacement does not qualify on either axis.
    assert_eq!(swipe((0.0, 0.0), (50.0, 0.0)), None);
    assert_eq!(swipe((0.0, 0.0), (0.0, 50.0)), None);

    // Just past it does.
    assert_eq!(swipe((0.0, 0.0), (51.0, 0.0)), Some(SwipeDirection::Right));
    assert_eq!(swipe((0.0, 0.0), (0.0, 51.0)), Some(SwipeDirection::Down));
}

#[test]
fn test_dominant_axis_wins() {
    // Mostly horizontal with some vertical drift
    assert_eq!(swipe((0.0, 0.0), (120.0, 30.0)), Some(SwipeDirection::Right));
    assert_eq!(swipe((0.0, 0.0), (-120.0, 30.0)), Some(SwipeDirection::Left));

    // Mostly vertical with some horizontal drift
    assert_eq!(swipe((0.0, 0.0), (30.0, 120.0)), Some(SwipeDirection::Down));
    assert_eq!(swipe((0.0, 0.0), (30.0, -120.0)), Some(SwipeDirection::Up));
}

#[test]
fn test_equal_magnitudes_route_vertical() {
    // |dx| == |dy| above threshold: the strict comparison picks vertical.
    assert_eq!(swipe((0.0, 0.0), (90.0, 90.0)), Some(SwipeDirection::Down));
    assert_eq!(swipe((10.0, 10.0), (-80.0, -80.0)), Some(SwipeDirection::Up));
}

#[test]
fn test_zero_delta_quirk() {
    // A displacement-free tap yields Up (legacy default, kept on purpose).
    assert_eq!(swipe((25.0, 75.0), (25.0, 75.0)), Some(SwipeDirection::Up));
}

#[test]
fn test_tracker_reuse_across_gestures() {
    let mut tracker = SwipeTracker::new();

    tracker.handle_touch_start(&TouchEvent::start(0.0, 0.0));
    assert_eq!(
        tracker.handle_touch_end(&TouchEvent::end(200.0, 0.0)),
        Some(SwipeDirection::Right)
    );

    // The next gesture fully overwrites the stored points.
    tracker.handle_touch_start(&TouchEvent::start(200.0, 200.0));
    assert_eq!(
        tracker.handle_touch_end(&TouchEvent::end(200.0, 0.0)),
        Some(SwipeDirection::Up)
    );
}

#[test]
fn test_uses_first_touch_point() {
    let mut tracker = SwipeTracker::new();

    // Multi-touch events: only the first point of each list counts.
    let start = TouchEvent {
        touches: vec![
            touch_tetris::types::TouchPoint::new(0.0, 0.0),
            touch_tetris::types::TouchPoint::new(999.0, 999.0),
        ],
        changed_touches: Vec::new(),
    };
    let end = TouchEvent {
        touches: Vec::new(),
        changed_touches: vec![
            touch_tetris::types::TouchPoint::new(0.0, 100.0),
            touch_tetris::types::TouchPoint::new(-999.0, 0.0),
        ],
    };

    tracker.handle_touch_start(&start);
    assert_eq!(tracker.handle_touch_end(&end), Some(SwipeDirection::Down));
}

#[test]
fn test_direction_labels_for_host_dispatch() {
    let direction = swipe((0.0, 0.0), (0.0, 100.0)).unwrap();
    assert_eq!(direction.as_str(), "ArrowDown");
    assert_eq!(SwipeDirection::from_str("ArrowDown"), Some(direction));
}
