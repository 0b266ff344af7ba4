use rand::seq::IteratorRandom;
use rand::Rng;

use crate::config::game::{GRID_SIZE, SPAWN_FOUR_PROBABILITY};
use crate::game::types::{Grid, Position};

pub fn empty_grid() -> Grid {
    vec![vec![0; GRID_SIZE]; GRID_SIZE]
}

/// Collect the coordinates of every empty cell.
pub fn empty_cells(grid: &Grid) -> Vec<Position> {
    grid.iter().enumerate()
        .flat_map(|(y, row)| row.iter().enumerate().filter_map(move |(x, &value)| {
            if value == 0 {
                Some(Position { x, y })
            } else {
                None
            }
        }))
        .collect()
}

/// Place a random tile (2 or 4) on a uniformly chosen empty cell.
/// No-op if the grid is full. Returns the position used, if any.
pub fn spawn_random_tile(grid: &mut Grid) -> Option<Position> {
    let mut rng = rand::rng();

    let pos = empty_cells(grid).into_iter().choose(&mut rng)?;
    grid[pos.y][pos.x] = if rng.random_bool(SPAWN_FOUR_PROBABILITY) { 4 } else { 2 };
    Some(pos)
}
