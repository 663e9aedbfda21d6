//! Swipe module - directional gesture detection from touch displacement
//!
//! A gesture spans two input events: a touch-start and a later touch-end.
//! The two points live in a [`SwipeTracker`] value owned by the caller (one
//! per input session), so there is no hidden module state and no
//! cross-session interference. A new touch-start overwrites the prior start
//! point unconditionally; overlapping gestures are not supported.
//!
//! Classification uses straight-line displacement only - no timing or
//! velocity component.

use touch_tetris_types::{SwipeDirection, TouchPoint, SWIPE_THRESHOLD};

/// A touch event as delivered by the host platform
///
/// Mirrors the DOM touch event surface: `touches` holds the points currently
/// on the screen, `changed_touches` the points that triggered the event
/// (the lifted finger, for a touch-end).
#[derive(Debug, Clone, Default)]
pub struct TouchEvent {
    pub touches: Vec<TouchPoint>,
    pub changed_touches: Vec<TouchPoint>,
}

impl TouchEvent {
    /// A touch-start event with a single contact point
    pub fn start(x: f32, y: f32) -> Self {
        Self {
            touches: vec![TouchPoint::new(x, y)],
            changed_touches: Vec::new(),
        }
    }

    /// A touch-end event with a single lifted point
    pub fn end(x: f32, y: f32) -> Self {
        Self {
            touches: Vec::new(),
            changed_touches: vec![TouchPoint::new(x, y)],
        }
    }
}

/// Gesture state for one input session
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start: TouchPoint,
    end: TouchPoint,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start of a gesture from the event's first touch point
    ///
    /// # Panics
    ///
    /// Panics if the event carries no touch points (unchecked precondition:
    /// hosts only dispatch touch-start events that have one).
    pub fn handle_touch_start(&mut self, event: &TouchEvent) {
        self.start = event.touches[0];
    }

    /// Record the end of a gesture and classify it
    ///
    /// Reads the event's first changed touch point, then runs
    /// [`detect_swipe`](Self::detect_swipe) on the stored pair.
    ///
    /// # Panics
    ///
    /// Panics if the event carries no changed touch points.
    pub fn handle_touch_end(&mut self, event: &TouchEvent) -> Option<SwipeDirection> {
        self.end = event.changed_touches[0];
        self.detect_swipe()
    }

    /// Classify the stored displacement as a directional intent
    ///
    /// The dominant axis wins; an exact tie of magnitudes routes to the
    /// vertical branch (the comparison is strict). Along the chosen axis the
    /// displacement must exceed [`SWIPE_THRESHOLD`], except for one quirk:
    /// a vertical delta of exactly zero yields `Up`. That zero-delta default
    /// is intentional legacy behavior and is kept as-is.
    pub fn detect_swipe(&self) -> Option<SwipeDirection> {
        let delta_x = self.end.x - self.start.x;
        let delta_y = self.end.y - self.start.y;

        if delta_x.abs() > delta_y.abs() {
            // Horizontal swipe
            if delta_x.abs() > SWIPE_THRESHOLD {
                if delta_x > 0.0 {
                    Some(SwipeDirection::Right)
                } else {
                    Some(SwipeDirection::Left)
                }
            } else {
                None
            }
        } else {
            // Vertical swipe
            if delta_y.abs() > SWIPE_THRESHOLD {
                if delta_y > 0.0 {
                    Some(SwipeDirection::Down)
                } else {
                    Some(SwipeDirection::Up)
                }
            } else if delta_y == 0.0 {
                Some(SwipeDirection::Up)
            } else {
                None
            }
        }
    }
}
