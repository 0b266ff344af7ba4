use serde::{Serialize, Deserialize};

use crate::game::systems::render::GameView;
use crate::game::types::Direction;

/// Messages a client may send over the game WebSocket.
///
/// `Move` carries an already-normalized direction; `Key` and `Swipe` carry
/// raw browser events and are normalized server-side by the input adapter.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "action", content = "data")]
pub enum ClientWsMessage {
    Move(Direction),
    Key { key: String },
    Swipe { dx: f64, dy: f64 },
    /// Dismiss the win overlay and keep playing.
    Continue,
    /// Reset the board, score, and overlays.
    NewGame,
    Ping,
}

// Message serveur -> client
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "action", content = "data")]
pub enum ServerWsMessage {
    UpdateState(GameView),
    Error {
        message: String,
    },
}

impl ServerWsMessage {
    pub fn update_state(view: GameView) -> Self {
        Self::UpdateState(view)
    }
    pub fn error(message: &str) -> Self {
        Self::Error { message: message.to_string() }
    }
}
