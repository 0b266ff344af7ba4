//! Tile movement system.
//!
//! This module implements the slide/merge primitive and its application to
//! the whole grid in any of the four directions.

use crate::config::game::GRID_SIZE;
use crate::game::types::{Direction, Grid};

/// Slide one line toward its start: compact out zeros, merge adjacent equal
/// pairs left to right, pad with zeros back to `GRID_SIZE`.
///
/// Each tile merges at most once per slide; the tile produced by a merge is
/// never compared against its new neighbor in the same pass. Returns the new
/// line and the score gained (the sum of merge results).
pub fn slide_line(line: &[u32]) -> (Vec<u32>, u32) {
    let mut tiles: Vec<u32> = line.iter().copied().filter(|&v| v != 0).collect();
    let mut gained = 0;

    let mut i = 0;
    while i + 1 < tiles.len() {
        if tiles[i] == tiles[i + 1] {
            tiles[i] *= 2;
            gained += tiles[i];
            tiles.remove(i + 1);
        }
        i += 1;
    }

    tiles.resize(GRID_SIZE, 0);
    (tiles, gained)
}

/// Shift the whole grid in the given direction, accumulating merge points
/// into `score`. Returns whether any cell changed value.
///
/// Left/Right operate row-wise, Up/Down column-wise; Right/Down reverse the
/// line before and after the slide so one primitive serves all directions.
pub fn shift_grid(grid: &mut Grid, direction: Direction, score: &mut u32) -> bool {
    match direction {
        Direction::Left => shift_rows(grid, score, false),
        Direction::Right => shift_rows(grid, score, true),
        Direction::Up => shift_cols(grid, score, false),
        Direction::Down => shift_cols(grid, score, true),
    }
}

fn shift_rows(grid: &mut Grid, score: &mut u32, reversed: bool) -> bool {
    let mut changed = false;

    for row in grid.iter_mut() {
        let mut line = row.clone();
        if reversed {
            line.reverse();
        }

        let (mut new_line, gained) = slide_line(&line);
        *score += gained;
        if reversed {
            new_line.reverse();
        }

        if *row != new_line {
            changed = true;
            *row = new_line;
        }
    }

    changed
}

fn shift_cols(grid: &mut Grid, score: &mut u32, reversed: bool) -> bool {
    let mut changed = false;

    for x in 0..GRID_SIZE {
        let mut line: Vec<u32> = (0..GRID_SIZE).map(|y| grid[y][x]).collect();
        if reversed {
            line.reverse();
        }

        let (mut new_line, gained) = slide_line(&line);
        *score += gained;
        if reversed {
            new_line.reverse();
        }

        for y in 0..GRID_SIZE {
            if grid[y][x] != new_line[y] {
                changed = true;
                grid[y][x] = new_line[y];
            }
        }
    }

    changed
}
