//! Grid tests - bounds contracts and neighbour counting

use tui_life::core::Grid;
use tui_life::types::SimError;

#[test]
fn test_new_grid_is_all_initial() {
    for (rows, cols) in [(1, 1), (3, 7), (10, 10)] {
        let grid = Grid::new(rows, cols, false).unwrap();
        assert_eq!(grid.rows(), rows);
        assert_eq!(grid.cols(), cols);
        for row in 0..rows {
            for col in 0..cols {
                assert_eq!(
                    grid.get(row, col),
                    Ok(false),
                    "cell ({}, {}) should start dead",
                    row,
                    col
                );
            }
        }
    }
}

#[test]
fn test_zero_dimension_rejected() {
    assert_eq!(
        Grid::new(0, 3, false).unwrap_err(),
        SimError::InvalidDimension { rows: 0, cols: 3 }
    );
    assert_eq!(
        Grid::new(3, 0, true).unwrap_err(),
        SimError::InvalidDimension { rows: 3, cols: 0 }
    );
}

#[test]
fn test_one_past_the_end_is_out_of_bounds() {
    let mut grid = Grid::new(3, 5, false).unwrap();

    assert_eq!(
        grid.get(3, 0).unwrap_err(),
        SimError::OutOfBounds { row: 3, col: 0 }
    );
    assert_eq!(
        grid.get(0, 5).unwrap_err(),
        SimError::OutOfBounds { row: 0, col: 5 }
    );
    assert!(grid.set(3, 5, true).is_err());
    assert!(grid.toggle(3, 0).is_err());

    // In-bounds corners still work.
    assert_eq!(grid.get(2, 4), Ok(false));
}

#[test]
fn test_neighbour_count_centre_and_corner() {
    let grid = Grid::new(3, 3, true).unwrap();
    assert_eq!(grid.live_neighbours(1, 1), Ok(8));
    assert_eq!(grid.live_neighbours(0, 0), Ok(3));
    assert_eq!(grid.live_neighbours(0, 2), Ok(3));
    assert_eq!(grid.live_neighbours(2, 0), Ok(3));
}

#[test]
fn test_neighbour_count_no_wraparound() {
    // Live cells on the right edge must not count as neighbours of the
    // left edge.
    let mut grid = Grid::new(3, 4, false).unwrap();
    for row in 0..3 {
        grid.set(row, 3, true).unwrap();
    }
    assert_eq!(grid.live_neighbours(1, 0), Ok(0));
    assert_eq!(grid.live_neighbours(1, 2), Ok(3));
}

#[test]
fn test_neighbour_count_is_pure() {
    let mut grid = Grid::new(3, 3, false).unwrap();
    grid.set(0, 1, true).unwrap();
    let before = grid.clone();

    let first = grid.live_neighbours(1, 1).unwrap();
    let second = grid.live_neighbours(1, 1).unwrap();
    assert_eq!(first, 1);
    assert_eq!(first, second);
    assert_eq!(grid, before);
}

#[test]
fn test_reads_are_idempotent() {
    let mut grid = Grid::new(2, 2, false).unwrap();
    grid.set(1, 0, true).unwrap();
    assert_eq!(grid.get(1, 0), Ok(true));
    assert_eq!(grid.get(1, 0), Ok(true));
    assert_eq!(grid.get(0, 1), Ok(false));
    assert_eq!(grid.get(0, 1), Ok(false));
}

#[test]
fn test_toggle_twice_leaves_grid_unchanged() {
    let mut grid = Grid::new(4, 4, false).unwrap();
    grid.set(0, 0, true).unwrap();
    grid.set(3, 3, true).unwrap();
    let before = grid.clone();

    grid.toggle(2, 1).unwrap();
    grid.toggle(2, 1).unwrap();
    assert_eq!(grid, before);
}
