/// Game configuration constants.
///
/// This module defines the main gameplay parameters such as grid dimensions,
/// tile spawn odds, and input thresholds.
pub const GRID_SIZE: usize = 4; // The board is GRID_SIZE x GRID_SIZE.

/// Number of tiles spawned when a new game starts.
pub const STARTING_TILES: usize = 2;

/// Probability that a freshly spawned tile is a 4 (otherwise it is a 2).
pub const SPAWN_FOUR_PROBABILITY: f64 = 0.1;

/// Tile value that triggers the win overlay.
pub const WIN_TILE: u32 = 2048;

/// Minimum displacement (in screen units) for a swipe to register as a move.
pub const SWIPE_THRESHOLD: f64 = 50.0;
