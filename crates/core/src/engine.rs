//! Engine module - placement validation, line clearing, piece spawning
//!
//! Every operation here is a pure function over caller-owned values. The
//! host keeps the grid, level, and score; the engine computes and returns,
//! it never mutates in place. In particular `clear_lines` returns the swept
//! grid and updated counters explicitly, so a caller that drops the result
//! simply keeps its old state.

use arrayvec::ArrayVec;

use touch_tetris_types::{GRID_HEIGHT, GRID_WIDTH, PieceKind, POINTS_PER_LINE};

use crate::grid::Grid;
use crate::piece::{catalog_color, catalog_shape, Piece};
use crate::rng::SimpleRng;

/// Row indices cleared by a sweep, top to bottom (at most the full grid)
pub type ClearedRows = ArrayVec<usize, GRID_HEIGHT>;

/// Result of a line-clear sweep
#[derive(Debug, Clone, PartialEq)]
pub struct LineClear {
    /// The grid with full rows removed and fresh empty rows on top
    pub grid: Grid,
    /// Indices of the rows that were full, top to bottom
    pub cleared_rows: ClearedRows,
    /// Updated level counter
    pub level: u32,
    /// Updated score counter
    pub score: u32,
}

impl LineClear {
    /// Number of lines cleared by this sweep
    pub fn lines_cleared(&self) -> usize {
        self.cleared_rows.len()
    }
}

/// Check whether a piece sits entirely on vacant grid cells
///
/// Every occupied cell of the shape must map in-bounds and onto an empty
/// grid cell. Unoccupied shape cells impose no constraint, so a shape row
/// of zeros may hang past the grid edge. No side effects.
pub fn is_valid_move(grid: &Grid, piece: &Piece) -> bool {
    for (row, cells) in piece.shape().iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell == 0 {
                continue;
            }

            let x = piece.x() + col as i8;
            let y = piece.y() + row as i8;

            if !grid.is_valid(x, y) {
                return false;
            }
        }
    }
    true
}

/// Sweep full rows and return the new grid and counters
///
/// Removes every completely filled row, keeps the surviving rows in their
/// relative order, and tops the grid up with empty rows so the height is
/// preserved. The level advances by one on every call, and the score gains
/// [`POINTS_PER_LINE`] per cleared row. The caller replaces its grid,
/// level, and score with the returned values.
pub fn clear_lines(grid: &Grid, level: u32, score: u32) -> LineClear {
    let mut next = Grid::new();
    let mut cleared_rows = ClearedRows::new();
    let mut write_y = GRID_HEIGHT;

    // Scan from bottom to top, compacting surviving rows downward
    for read_y in (0..GRID_HEIGHT).rev() {
        if grid.is_row_full(read_y) {
            cleared_rows.push(read_y);
        } else {
            write_y -= 1;
            next.set_row(write_y, grid.row(read_y));
        }
    }

    // Rows above write_y in `next` stay empty; that is the top-up.
    cleared_rows.reverse();

    let lines = cleared_rows.len() as u32;
    LineClear {
        grid: next,
        cleared_rows,
        level: level + 1,
        score: score + lines * POINTS_PER_LINE,
    }
}

/// Spawn a random catalog piece at the top of the grid
///
/// Selects uniformly from the 7-piece catalog using the injected RNG, then
/// positions it via [`spawn_piece_of`].
pub fn spawn_piece(rng: &mut SimpleRng) -> Piece {
    let kind = PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize];
    spawn_piece_of(kind)
}

/// Spawn a specific catalog piece at the top of the grid
///
/// The piece is horizontally centered: `x = GRID_WIDTH/2 - shape_width/2`
/// (floor division), which centers both odd and even piece widths. `y` is
/// always 0.
pub fn spawn_piece_of(kind: PieceKind) -> Piece {
    let shape = catalog_shape(kind);
    let x = (GRID_WIDTH / 2) as i8 - (shape[0].len() / 2) as i8;
    Piece::new(shape, x, 0, catalog_color(kind))
}
