//! Grid module - the rectangular cell field
//!
//! A `Grid` maps every (row, col) coordinate in `[0,rows) x [0,cols)` to a
//! boolean alive/dead state. Storage is a flat row-major `Vec<bool>` for
//! cache locality. The shape is fixed for the lifetime of a grid; the
//! engine allocates a new one per generation instead of resizing.

use crate::types::SimError;

/// Rectangular boolean cell field with bounds-checked access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat row-major storage (row * cols + col).
    cells: Vec<bool>,
}

impl Grid {
    /// Create a `rows x cols` grid with every cell set to `initial`.
    pub fn new(rows: usize, cols: usize, initial: bool) -> Result<Self, SimError> {
        if rows == 0 || cols == 0 {
            return Err(SimError::InvalidDimension { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![initial; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Result<usize, SimError> {
        if row >= self.rows || col >= self.cols {
            return Err(SimError::OutOfBounds { row, col });
        }
        Ok(row * self.cols + col)
    }

    /// Cell state at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, SimError> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set one cell. Same bounds contract as [`Grid::get`].
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), SimError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Flip one cell in place. Same bounds contract as [`Grid::get`].
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<(), SimError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = !self.cells[idx];
        Ok(())
    }

    /// Count live cells in the Moore neighbourhood of (row, col).
    ///
    /// The cell itself is excluded. Neighbour coordinates outside the grid
    /// count as dead - there is no wraparound. Pure query, result in `0..=8`.
    pub fn live_neighbours(&self, row: usize, col: usize) -> Result<u8, SimError> {
        // The centre must itself be in bounds.
        self.index(row, col)?;

        let mut count = 0;
        for dr in -1i64..=1 {
            for dc in -1i64..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let r = row as i64 + dr;
                let c = col as i64 + dc;
                if r < 0 || r >= self.rows as i64 || c < 0 || c >= self.cols as i64 {
                    continue;
                }
                if self.cells[(r as usize) * self.cols + (c as usize)] {
                    count += 1;
                }
            }
        }
        Ok(count)
    }

    /// Flat row-major view of every cell, for rendering.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Set every cell to dead without changing shape.
    pub fn fill_dead(&mut self) {
        self.cells.fill(false);
    }
}
