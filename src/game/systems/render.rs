//! Game rendering system.
//!
//! Builds the read-only snapshot sent to clients after initialization and
//! after every changed move. The engine itself never touches a UI.

use serde::{Serialize, Deserialize};

use crate::game::state::GameState;
use crate::game::systems::rules::is_terminal;
use crate::game::types::Grid;

/// Read-only view of a game, plus the two overlay signals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameView {
    pub grid: Grid,
    pub score: u32,
    /// Game-over overlay: set when the board has no legal move left.
    pub game_over: bool,
    /// Win overlay: set when 2048 has been reached and the player has not
    /// dismissed the overlay yet.
    pub won_game: bool,
}

/// Build the client view of `state`. `win_acknowledged` is the session-level
/// record of the player dismissing the win overlay; it hides the overlay
/// without touching the engine's sticky win flag.
pub fn build_view(state: &GameState, win_acknowledged: bool) -> GameView {
    GameView {
        grid: state.grid.clone(),
        score: state.score,
        game_over: is_terminal(&state.grid),
        won_game: state.has_won && !win_acknowledged,
    }
}
