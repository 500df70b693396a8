//! Core simulation logic - pure, deterministic, and testable
//!
//! This crate contains the Game of Life rules and state management. It has
//! **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: same edits and seeds produce identical runs
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: rectangular boolean cell field with bounds-checked access and
//!   Moore-neighbourhood counting
//! - [`sim`]: the generational engine - owns the current grid, applies the
//!   B3/S23 rule into a fresh buffer each step
//! - [`rng`]: small deterministic LCG used to seed random soups
//!
//! # Example
//!
//! ```
//! use tui_life_core::Simulation;
//!
//! let mut sim = Simulation::new();
//! sim.initialize(10, 10).unwrap();
//!
//! // A horizontal blinker.
//! sim.toggle_cell(4, 3).unwrap();
//! sim.toggle_cell(4, 4).unwrap();
//! sim.toggle_cell(4, 5).unwrap();
//!
//! sim.step().unwrap();
//! assert!(sim.grid().unwrap().get(3, 4).unwrap()); // now vertical
//! ```

pub mod grid;
pub mod rng;
pub mod sim;

pub use tui_life_types as types;

// Re-export commonly used types for convenience
pub use grid::Grid;
pub use rng::SoupRng;
pub use sim::Simulation;
