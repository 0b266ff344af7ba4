/// WebSocket session handler for a single game.
///
/// Each connection gets its own actor owning its own `GameState`; the actor
/// mailbox processes inputs one at a time, so a move, the tile spawn, and the
/// redraw always complete before the next input is handled.
use actix::{Actor, ActorContext, StreamHandler};
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::{debug, info, warn};
use std::borrow::Cow;
use uuid::Uuid;

use crate::game::state::GameState;
use crate::game::systems::render::build_view;
use crate::game::types::{Direction, GameStatus};
use crate::server::game_session::input::{classify_swipe, direction_from_key};
use crate::server::game_session::messages::{ClientWsMessage, ServerWsMessage};
use crate::server::ws_error::ws_error_message;

pub struct GameSessionActor {
    pub session_id: Uuid,
    /// Username of a signed-up player, if one was provided on connect.
    pub username: Option<String>,
    state: GameState,
    /// Whether the player dismissed the win overlay with Continue. Cleared on
    /// NewGame; the engine's sticky win flag is never touched.
    win_acknowledged: bool,
}

impl GameSessionActor {
    pub fn new(username: Option<String>) -> Self {
        GameSessionActor {
            session_id: Uuid::new_v4(),
            username,
            state: GameState::new(),
            win_acknowledged: false,
        }
    }

    /// Serialize the current view and push it to the client.
    fn send_state(&self, ctx: &mut ws::WebsocketContext<Self>) {
        let view = build_view(&self.state, self.win_acknowledged);
        match serde_json::to_string(&ServerWsMessage::update_state(view)) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                warn!("[GameSession] Failed to serialize view: session_id={} error={}", self.session_id, e);
                ctx.text(ws_error_message(
                    "INTERNAL_ERROR",
                    "Failed to serialize game state",
                    Some(&self.session_id.to_string()),
                ));
            }
        }
    }

    /// Apply one move: ignored after game over, ignored when nothing changes,
    /// otherwise followed by a redraw.
    fn process_move(&mut self, direction: Direction, ctx: &mut ws::WebsocketContext<Self>) {
        if self.state.status() == GameStatus::Lost {
            debug!("[GameSession] Move after game over ignored: session_id={}", self.session_id);
            return;
        }

        if self.state.apply_move(direction) {
            self.send_state(ctx);
        }
    }
}

impl Actor for GameSessionActor {
    type Context = ws::WebsocketContext<Self>;

    /// Called when the session starts. Sends the initial board.
    fn started(&mut self, ctx: &mut Self::Context) {
        info!(
            "[GameSession] Session started: session_id={} username={}",
            self.session_id,
            self.username.as_deref().unwrap_or("-")
        );
        self.send_state(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        info!(
            "[GameSession] Session ended: session_id={} score={}",
            self.session_id, self.state.score
        );
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for GameSessionActor {
    /// Handles incoming WebSocket messages from the client.
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => {
                match serde_json::from_str::<ClientWsMessage>(&text) {
                    Ok(ClientWsMessage::Move(direction)) => {
                        self.process_move(direction, ctx);
                    }
                    Ok(ClientWsMessage::Key { key }) => {
                        // Non-arrow keys are dropped by the input adapter.
                        if let Some(direction) = direction_from_key(&key) {
                            self.process_move(direction, ctx);
                        }
                    }
                    Ok(ClientWsMessage::Swipe { dx, dy }) => {
                        // Sub-threshold and ambiguous swipes are dropped.
                        if let Some(direction) = classify_swipe(dx, dy) {
                            self.process_move(direction, ctx);
                        }
                    }
                    Ok(ClientWsMessage::Continue) => {
                        // Dismiss the win overlay without resetting the board.
                        self.win_acknowledged = true;
                        self.send_state(ctx);
                    }
                    Ok(ClientWsMessage::NewGame) => {
                        info!("[GameSession] New game: session_id={}", self.session_id);
                        self.state = GameState::new();
                        self.win_acknowledged = false;
                        self.send_state(ctx);
                    }
                    Ok(ClientWsMessage::Ping) => {
                        // Ping received; can be ignored.
                    }
                    Err(_e) => {
                        // Invalid client message format.
                        ctx.text(ws_error_message(
                            "INVALID_MESSAGE",
                            "Invalid client message",
                            Some(&self.session_id.to_string()),
                        ));
                    }
                }
            }
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(_)) => ctx.stop(),
            _ => (),
        }
    }
}

/// WebSocket endpoint for a game session.
///
/// Accepts an optional `username` query parameter (a signed-up player
/// identifying themselves); it is only used for logging.
pub async fn ws_game(
    req: HttpRequest,
    stream: web::Payload,
    _data: web::Data<crate::server::state::AppState>,
) -> Result<HttpResponse, Error> {
    let mut username: Option<String> = None;

    // Parse query parameters.
    for kv in req.query_string().split('&') {
        let mut split = kv.split('=');
        if let (Some("username"), Some(name)) = (split.next(), split.next()) {
            let decoded = urlencoding::decode(name)
                .unwrap_or_else(|_| Cow::Borrowed(""))
                .into_owned();
            if !decoded.is_empty() {
                username = Some(decoded);
            }
        }
    }

    ws::start(GameSessionActor::new(username), &req, stream)
}
