//! Board module - manages the game grid
//!
//! The board is a `rows x cols` grid where each cell is empty (0) or holds a
//! nonzero piece marker. Cells live in one flat row-major buffer for cache
//! locality; dimensions are fixed at construction.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use crate::types::{Cell, EMPTY};

/// The game board using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board. Dimensions are clamped to at least 1.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            rows,
            cols,
            cells: vec![EMPTY; rows * cols],
        }
    }

    /// Build a board from explicit rows.
    ///
    /// Returns `None` if there are no rows, the rows are empty, or they differ in length.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Option<Self> {
        let cols = rows.first()?.as_ref().len();
        if cols == 0 || rows.iter().any(|r| r.as_ref().len() != cols) {
            return None;
        }
        let cells = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
        Some(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * self.cols + (x as usize))
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and nonzero)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(c) if c != EMPTY)
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        x < 0 || x >= self.cols as i32 || y < 0 || y >= self.rows as i32
    }

    /// Borrow one row
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.rows {
            return None;
        }
        let start = y * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Iterate rows from top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.cols)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|&c| c != EMPTY))
            .unwrap_or(false)
    }

    /// Clear all full rows, compact the rest downward, and refill the top with
    /// empty rows. Returns the number of rows cleared.
    ///
    /// Two-pointer pass, no allocation.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.cols;
        let mut write_y = self.rows;
        let mut cleared = 0;

        // Scan from bottom to top
        for read_y in (0..self.rows).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        // Rows above the last kept row become empty
        self.cells[..write_y * width].fill(EMPTY);

        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Convert to nested rows
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.iter_rows().map(|r| r.to_vec()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_ROWS, crate::types::DEFAULT_COLS)
    }
}
