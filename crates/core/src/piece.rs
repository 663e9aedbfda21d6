//! Pieces module - tetromino catalog and matrix rotation
//!
//! A piece is an immutable value: a rectangular 0/1 occupancy matrix, an
//! anchor position for the matrix's top-left corner, and a color. Rotation
//! and movement produce new `Piece` values rather than mutating in place.

use touch_tetris_types::{Color, PieceKind};

/// Rectangular occupancy matrix (1 = occupied, 0 = empty)
pub type ShapeMatrix = Vec<Vec<u8>>;

/// A movable piece, not yet locked into the grid
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    shape: ShapeMatrix,
    x: i8,
    y: i8,
    color: Color,
}

impl Piece {
    /// Create a piece from a shape matrix, anchor position, and color
    ///
    /// The shape must be a non-empty rectangular matrix; this is an
    /// unchecked precondition (catalog shapes always satisfy it).
    pub fn new(shape: ShapeMatrix, x: i8, y: i8, color: Color) -> Self {
        Self { shape, x, y, color }
    }

    /// Occupancy matrix, rows top to bottom
    pub fn shape(&self) -> &ShapeMatrix {
        &self.shape
    }

    /// Anchor column of the shape's top-left corner
    pub fn x(&self) -> i8 {
        self.x
    }

    /// Anchor row of the shape's top-left corner
    pub fn y(&self) -> i8 {
        self.y
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Width of the shape matrix in cells
    pub fn width(&self) -> usize {
        self.shape[0].len()
    }

    /// Height of the shape matrix in cells
    pub fn height(&self) -> usize {
        self.shape.len()
    }

    /// A copy of this piece rotated 90 degrees clockwise
    ///
    /// Rotation is shape-only: color and anchor are preserved. The rotated
    /// position is not validated here; the caller tries the rotation,
    /// checks it with `is_valid_move`, and reverts if it collides.
    ///
    /// # Panics
    ///
    /// Panics if the shape is empty (zero rows).
    pub fn rotated(&self) -> Piece {
        let rows = self.shape.len();
        let cols = self.shape[0].len();

        // rotated[i][j] = shape[rows - 1 - j][i]
        let shape = (0..cols)
            .map(|i| (0..rows).rev().map(|j| self.shape[j][i]).collect())
            .collect();

        Piece {
            shape,
            x: self.x,
            y: self.y,
            color: self.color,
        }
    }

    /// A copy of this piece with its anchor shifted by (dx, dy)
    pub fn translated(&self, dx: i8, dy: i8) -> Piece {
        Piece {
            shape: self.shape.clone(),
            x: self.x + dx,
            y: self.y + dy,
            color: self.color,
        }
    }
}

/// Canonical shape matrix for a catalog piece
pub fn catalog_shape(kind: PieceKind) -> ShapeMatrix {
    match kind {
        PieceKind::I => vec![vec![1, 1, 1, 1]],
        PieceKind::O => vec![vec![1, 1], vec![1, 1]],
        PieceKind::T => vec![vec![0, 1, 0], vec![1, 1, 1]],
        PieceKind::S => vec![vec![0, 1, 1], vec![1, 1, 0]],
        PieceKind::Z => vec![vec![1, 1, 0], vec![0, 1, 1]],
        PieceKind::J => vec![vec![1, 0, 0], vec![1, 1, 1]],
        PieceKind::L => vec![vec![0, 0, 1], vec![1, 1, 1]],
    }
}

/// Canonical color for a catalog piece
pub fn catalog_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Cyan,
        PieceKind::O => Color::Yellow,
        PieceKind::T => Color::Purple,
        PieceKind::S => Color::Green,
        PieceKind::Z => Color::Red,
        PieceKind::J => Color::Blue,
        PieceKind::L => Color::Orange,
    }
}
