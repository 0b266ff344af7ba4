//! Win and loss rules.

use crate::config::game::{GRID_SIZE, WIN_TILE};
use crate::game::types::Grid;

/// A board is terminal when it has no empty cell and no two horizontally or
/// vertically adjacent cells hold equal values. Checking each cell against
/// its right and bottom neighbor covers every adjacent pair.
pub fn is_terminal(grid: &Grid) -> bool {
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            if grid[y][x] == 0 {
                return false;
            }
            if x + 1 < GRID_SIZE && grid[y][x] == grid[y][x + 1] {
                return false;
            }
            if y + 1 < GRID_SIZE && grid[y][x] == grid[y + 1][x] {
                return false;
            }
        }
    }

    true
}

/// True if any cell holds the winning tile value.
pub fn has_win_tile(grid: &Grid) -> bool {
    grid.iter().flatten().any(|&value| value == WIN_TILE)
}
