//! Touch input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It turns
//! pairs of touch-start/touch-end events into
//! [`touch_tetris_types::SwipeDirection`] intents that a host feeds into the
//! game engine.

pub mod swipe;

pub use touch_tetris_types as types;

pub use swipe::{SwipeTracker, TouchEvent};
