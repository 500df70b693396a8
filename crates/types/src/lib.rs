//! Shared types for the life simulator.
//! This crate contains pure data types with no external dependencies.

use std::fmt;

/// Terminal glyphs per life cell (columns x rows).
///
/// 2x1 compensates for the typical terminal glyph aspect ratio, so cells
/// render roughly square.
pub const CELL_GLYPH_W: u16 = 2;
pub const CELL_GLYPH_H: u16 = 1;

/// Default seed for the random soup (`Randomize`).
pub const DEFAULT_SOUP_SEED: u32 = 1;

/// Soup density: one cell in this many starts alive.
pub const SOUP_ONE_IN: u32 = 3;

/// Contract violations surfaced by the simulation core.
///
/// These are deterministic misuse errors (bad coordinates, bad shape,
/// operations before `initialize`), not recoverable runtime conditions.
/// They are reported at the call site instead of being clamped away so
/// that coordinate-mapping bugs in the UI layer stay visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    /// Grid creation with zero rows or columns.
    InvalidDimension { rows: usize, cols: usize },
    /// Coordinate outside the grid extent.
    OutOfBounds { row: usize, col: usize },
    /// `step`/`toggle_cell`/`grid` before `initialize`.
    NotInitialized,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidDimension { rows, cols } => {
                write!(f, "invalid grid dimensions: {}x{}", rows, cols)
            }
            SimError::OutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is outside the grid", row, col)
            }
            SimError::NotInitialized => write!(f, "simulation is not initialized"),
        }
    }
}

impl std::error::Error for SimError {}

/// User-driven simulation actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimAction {
    /// Advance one generation.
    Step,
    /// Toggle the classic grid visualization on/off (rendering only).
    ToggleDrawMode,
    /// Kill every cell.
    Clear,
    /// Reseed the field with a random soup.
    Randomize,
}

impl SimAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimAction::Step => "step",
            SimAction::ToggleDrawMode => "toggleDrawMode",
            SimAction::Clear => "clear",
            SimAction::Randomize => "randomize",
        }
    }
}
