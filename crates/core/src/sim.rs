//! Simulation module - the generational engine
//!
//! `Simulation` owns exactly one current [`Grid`] at a time. Each `step`
//! computes the next generation into a freshly allocated grid of identical
//! shape, reading only the unmodified current generation, then swaps the
//! new grid in as a single visible change. Mutating in place would let a
//! cell's new value leak into its neighbours' rule evaluation within the
//! same step, so the double buffer is load-bearing, not an optimization.
//!
//! The engine is single-threaded and synchronous: every operation runs to
//! completion, in O(rows * cols) for `step` and O(1) otherwise.

use crate::grid::Grid;
use crate::rng::SoupRng;
use crate::types::{SimError, SOUP_ONE_IN};

/// Generational Game of Life engine (B3/S23).
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    /// Current generation. `None` until `initialize`.
    grid: Option<Grid>,
    generation: u64,
}

impl Simulation {
    /// Create an uninitialized engine. Every operation except
    /// [`Simulation::initialize`] fails with `NotInitialized` until the
    /// field has been allocated.
    pub fn new() -> Self {
        Self {
            grid: None,
            generation: 0,
        }
    }

    /// Allocate an all-dead `rows x cols` field and reset the generation
    /// counter. May be called again to restart with a new shape.
    pub fn initialize(&mut self, rows: usize, cols: usize) -> Result<(), SimError> {
        self.grid = Some(Grid::new(rows, cols, false)?);
        self.generation = 0;
        Ok(())
    }

    /// Build an engine sized to a display area.
    ///
    /// `rows = height / cell_size`, `cols = width / cell_size` (floor
    /// division). A display smaller than one cell yields `InvalidDimension`.
    pub fn from_display(width: usize, height: usize, cell_size: usize) -> Result<Self, SimError> {
        if cell_size == 0 {
            return Err(SimError::InvalidDimension { rows: 0, cols: 0 });
        }
        let mut sim = Self::new();
        sim.initialize(height / cell_size, width / cell_size)?;
        Ok(sim)
    }

    /// The current grid, for rendering and queries.
    pub fn grid(&self) -> Result<&Grid, SimError> {
        self.grid.as_ref().ok_or(SimError::NotInitialized)
    }

    fn grid_mut(&mut self) -> Result<&mut Grid, SimError> {
        self.grid.as_mut().ok_or(SimError::NotInitialized)
    }

    /// Generations stepped since the last `initialize`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Flip one cell of the current generation in place. Used for direct
    /// user edits between steps.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<(), SimError> {
        self.grid_mut()?.toggle(row, col)
    }

    /// Advance one generation.
    ///
    /// 1. Any live cell with fewer than two live neighbours dies (underpopulation).
    /// 2. Any live cell with two or three live neighbours lives on.
    /// 3. Any live cell with more than three live neighbours dies (overpopulation).
    /// 4. Any dead cell with exactly three live neighbours becomes live (reproduction).
    pub fn step(&mut self) -> Result<(), SimError> {
        let curr = self.grid.as_ref().ok_or(SimError::NotInitialized)?;
        let mut next = Grid::new(curr.rows(), curr.cols(), false)?;

        for row in 0..curr.rows() {
            for col in 0..curr.cols() {
                let alive = curr.get(row, col)?;
                let neighbours = curr.live_neighbours(row, col)?;
                let survives = match (alive, neighbours) {
                    (true, 2) | (true, 3) => true,
                    (false, 3) => true,
                    _ => false,
                };
                if survives {
                    next.set(row, col, true)?;
                }
            }
        }

        self.grid = Some(next);
        self.generation += 1;
        Ok(())
    }

    /// Kill every cell, keeping the field shape and generation counter at 0.
    pub fn clear(&mut self) -> Result<(), SimError> {
        self.grid_mut()?.fill_dead();
        self.generation = 0;
        Ok(())
    }

    /// Fill the field with a deterministic random soup, about one cell in
    /// [`SOUP_ONE_IN`] alive. Same seed, same soup.
    pub fn randomize(&mut self, seed: u32) -> Result<(), SimError> {
        let grid = self.grid.as_mut().ok_or(SimError::NotInitialized)?;
        let mut rng = SoupRng::new(seed);
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                grid.set(row, col, rng.one_in(SOUP_ONE_IN))?;
            }
        }
        self.generation = 0;
        Ok(())
    }
}
