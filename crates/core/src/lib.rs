//! Board/piece engine - pure, deterministic, and testable
//!
//! This crate contains all the game rules: placement validation, piece
//! rotation, line clearing, and piece spawning. It has **zero dependencies**
//! on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: spawning takes an injected seedable RNG, so the same
//!   seed produces the same piece sequence
//! - **Stateless**: every operation is a pure function over caller-owned
//!   values; the engine never holds game state of its own
//! - **Portable**: runs in any host (web view, terminal, headless tests)
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 playfield with bounds/occupancy checks and row access
//! - [`piece`]: immutable piece values, the 7-piece catalog, matrix rotation
//! - [`engine`]: placement validation, line clearing, piece spawning
//! - [`rng`]: seedable LCG used for spawn selection
//!
//! # Division of labor
//!
//! The engine validates and computes; it never locks a piece into the grid.
//! Locking (merging a settled piece's cells) is the host's job, as is moving
//! the active piece and re-validating after rotation:
//!
//! ```
//! use touch_tetris_core::{clear_lines, is_valid_move, spawn_piece, Grid, SimpleRng};
//!
//! let grid = Grid::new();
//! let mut rng = SimpleRng::new(42);
//!
//! let piece = spawn_piece(&mut rng);
//! assert!(is_valid_move(&grid, &piece));
//!
//! // Rotation produces a new piece; the host decides whether to keep it.
//! let rotated = piece.rotated();
//! if is_valid_move(&grid, &rotated) {
//!     // commit the rotation
//! }
//!
//! let outcome = clear_lines(&grid, 0, 0);
//! assert_eq!(outcome.lines_cleared(), 0);
//! ```

pub mod engine;
pub mod grid;
pub mod piece;
pub mod rng;

pub use touch_tetris_types as types;

// Re-export commonly used items for convenience
pub use engine::{clear_lines, is_valid_move, spawn_piece, spawn_piece_of, LineClear};
pub use grid::Grid;
pub use piece::{catalog_color, catalog_shape, Piece, ShapeMatrix};
pub use rng::SimpleRng;
