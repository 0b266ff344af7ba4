//! Grid Engine module.
//!
//! Pure game logic for 2048: the grid, the slide/merge systems, spawn,
//! terminal/win detection, and the score. No UI or server dependency.

pub mod types;
pub mod state;
pub mod grid;
pub mod systems;
#[cfg(test)]
pub mod tests;
