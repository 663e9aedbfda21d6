//! Touch Tetris (workspace facade crate).
//!
//! This package keeps a stable `touch_tetris::{types, core, input}` public API
//! while the implementation lives in dedicated crates under `crates/`.
//!
//! The two components are independent: a host application feeds touch events
//! into [`input`] to obtain directional intents, and drives [`core`] with
//! those intents (plus gravity ticks) to update board state.

pub use touch_tetris_core as core;
pub use touch_tetris_input as input;
pub use touch_tetris_types as types;
