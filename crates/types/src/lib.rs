//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by both the board/piece
//! engine and the swipe gesture detector. All types are pure data structures
//! with no external dependencies, making them usable in any context (game
//! logic, gesture input, host rendering).
//!
//! # Grid Dimensions
//!
//! Standard playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//!
//! # Swipe Detection
//!
//! A swipe must cover more than [`SWIPE_THRESHOLD`] screen units of
//! straight-line displacement along its dominant axis to be recognized.

/// Grid dimensions
pub const GRID_WIDTH: usize = 10;
pub const GRID_HEIGHT: usize = 20;

/// Minimum displacement (screen units) for a swipe to be recognized
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Points awarded per cleared line
pub const POINTS_PER_LINE: u32 = 100;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All catalog entries, in canonical order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Cell color identifiers
///
/// Locked cells are identified by the color of the piece that produced them;
/// the renderer maps these to actual pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
}

impl Color {
    /// Parse color from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cyan" => Some(Color::Cyan),
            "yellow" => Some(Color::Yellow),
            "purple" => Some(Color::Purple),
            "green" => Some(Color::Green),
            "red" => Some(Color::Red),
            "blue" => Some(Color::Blue),
            "orange" => Some(Color::Orange),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Cyan => "cyan",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Green => "green",
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Orange => "orange",
        }
    }
}

/// Cell on the grid (None = empty, Some = filled with a color)
pub type Cell = Option<Color>;

/// Directional intent produced by the swipe detector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

impl SwipeDirection {
    /// Parse direction from its DOM-style key label
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ArrowLeft" => Some(SwipeDirection::Left),
            "ArrowRight" => Some(SwipeDirection::Right),
            "ArrowUp" => Some(SwipeDirection::Up),
            "ArrowDown" => Some(SwipeDirection::Down),
            _ => None,
        }
    }

    /// Convert to the DOM-style key label hosts dispatch on
    pub fn as_str(&self) -> &'static str {
        match self {
            SwipeDirection::Left => "ArrowLeft",
            SwipeDirection::Right => "ArrowRight",
            SwipeDirection::Up => "ArrowUp",
            SwipeDirection::Down => "ArrowDown",
        }
    }
}

/// A single touch point in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
