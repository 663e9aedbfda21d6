//! Grid module - manages the playfield of settled cells
//!
//! The grid is a 10x20 matrix where each cell is empty or holds the color of
//! a locked piece. Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom).

use touch_tetris_types::{Cell, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = GRID_WIDTH * GRID_HEIGHT;

/// The playfield - 10 columns x 20 rows using flat array storage
///
/// The host constructs and owns the grid; the engine only reads it (and
/// builds a fresh one inside the line-clear sweep).
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * GRID_WIDTH + (x as usize))
    }

    /// Get width of the grid
    pub fn width(&self) -> usize {
        GRID_WIDTH
    }

    /// Get height of the grid
    pub fn height(&self) -> usize {
        GRID_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is vacant (within bounds and empty)
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= GRID_HEIGHT {
            return false;
        }
        let start = y * GRID_WIDTH;
        let end = start + GRID_WIDTH;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Get a row as a slice of cells
    ///
    /// # Panics
    ///
    /// Panics if `y >= GRID_HEIGHT`.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * GRID_WIDTH;
        &self.cells[start..start + GRID_WIDTH]
    }

    /// Overwrite a row from a slice of cells
    ///
    /// # Panics
    ///
    /// Panics if `y >= GRID_HEIGHT` or `row.len() != GRID_WIDTH`.
    pub fn set_row(&mut self, y: usize, row: &[Cell]) {
        let start = y * GRID_WIDTH;
        self.cells[start..start + GRID_WIDTH].copy_from_slice(row);
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Create from a 2D vector (converts to flat array)
    ///
    /// Hosts that keep a row-per-row representation can convert with this.
    ///
    /// # Panics
    ///
    /// Panics if the input is not exactly `GRID_HEIGHT` rows of `GRID_WIDTH`
    /// cells each.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        assert_eq!(rows.len(), GRID_HEIGHT);
        assert!(rows.iter().all(|row| row.len() == GRID_WIDTH));

        let mut flat = [None; GRID_SIZE];
        for (y, row) in rows.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                flat[y * GRID_WIDTH + x] = *cell;
            }
        }
        Self { cells: flat }
    }

    /// Convert to a 2D vector (one Vec per row, top to bottom)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        (0..GRID_HEIGHT).map(|y| self.row(y).to_vec()).collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
