//! HTTP and WebSocket routing configuration.
//!
//! Defines the game WebSocket endpoint and the signup endpoint.

use actix_web::web;
use crate::server::game_session::session::ws_game;
use crate::server::signup::handler::signup;

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/ws/game")
            .to(ws_game)
    )
    .service(
        web::resource("/api/signup")
            .route(web::post().to(signup))
    );
}
