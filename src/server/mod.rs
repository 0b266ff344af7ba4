// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the main backend server components, including:
//! - Application state management
//! - HTTP/WebSocket routing
//! - Game session handling (one WebSocket actor per player)
//! - Signup handling (validation, persisted user registry)

pub mod state;
pub mod router;
pub mod game_session;
pub mod signup;
pub mod ws_error;
