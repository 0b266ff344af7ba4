use serde::{Serialize, Deserialize};

use crate::config::game::STARTING_TILES;
use crate::game::grid::{empty_grid, spawn_random_tile};
use crate::game::systems::movement::shift_grid;
use crate::game::systems::rules::{has_win_tile, is_terminal};
use crate::game::types::{Direction, GameStatus, Grid};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Grid,
    pub score: u32,
    /// Sticky win flag: set the first time a 2048 tile appears and never
    /// cleared, even if the tile is later merged away.
    pub has_won: bool,
}

impl GameState {
    /// Create a fresh game: empty grid, score 0, two random starting tiles.
    pub fn new() -> Self {
        let mut state = GameState {
            grid: empty_grid(),
            score: 0,
            has_won: false,
        };
        for _ in 0..STARTING_TILES {
            spawn_random_tile(&mut state.grid);
        }
        state
    }

    /// Apply one move. Returns whether any cell changed; a no-op move spawns
    /// no tile and does not count as a turn. A changed move spawns one random
    /// tile and then updates the win flag.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        let changed = shift_grid(&mut self.grid, direction, &mut self.score);

        if changed {
            spawn_random_tile(&mut self.grid);
            if !self.has_won && has_win_tile(&self.grid) {
                self.has_won = true;
            }
        }

        changed
    }

    /// Derived status. Lost takes precedence for reporting, but the win flag
    /// stays set; Won and Lost are not mutually exclusive in this variant.
    pub fn status(&self) -> GameStatus {
        if is_terminal(&self.grid) {
            GameStatus::Lost
        } else if self.has_won {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }
}
