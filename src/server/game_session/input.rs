//! Input adapter.
//!
//! Normalizes raw client events (keyboard keys, swipe displacements) into
//! move directions. Events that do not map to a direction are dropped.

use crate::config::game::SWIPE_THRESHOLD;
use crate::game::types::Direction;

/// Map a browser key name to a direction. Non-arrow keys produce no move.
pub fn direction_from_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" => Some(Direction::Up),
        "ArrowDown" => Some(Direction::Down),
        "ArrowLeft" => Some(Direction::Left),
        "ArrowRight" => Some(Direction::Right),
        _ => None,
    }
}

/// Classify a swipe displacement into a direction.
///
/// The dominant axis (strictly larger absolute delta) decides horizontal vs.
/// vertical; the dominant delta must exceed the swipe threshold. Ties and
/// sub-threshold swipes produce no move. Screen coordinates: positive `dy`
/// points down.
pub fn classify_swipe(dx: f64, dy: f64) -> Option<Direction> {
    if dx.abs() > dy.abs() {
        if dx.abs() > SWIPE_THRESHOLD {
            if dx > 0.0 {
                Some(Direction::Right)
            } else {
                Some(Direction::Left)
            }
        } else {
            None
        }
    } else if dy.abs() > dx.abs() {
        if dy.abs() > SWIPE_THRESHOLD {
            if dy > 0.0 {
                Some(Direction::Down)
            } else {
                Some(Direction::Up)
            }
        } else {
            None
        }
    } else {
        // Equal deltas: no dominant axis, no move.
        None
    }
}
