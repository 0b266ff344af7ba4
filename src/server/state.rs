// src/server/state.rs

//! Application state for the backend server.
//!
//! Holds the address of the user registry actor. Game sessions own their own
//! state, so nothing game-related lives here.

use actix::Addr;
use crate::server::signup::server::UserRegistry;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Address of the user registry actor (handles signup and persistence).
    pub user_registry: Addr<UserRegistry>,
}

impl AppState {
    /// Create a new AppState with the given actor address.
    pub fn new(user_registry: Addr<UserRegistry>) -> Self {
        AppState { user_registry }
    }
}
