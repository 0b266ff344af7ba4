//! Signup module.
//!
//! Validates registration requests (password policy, username uniqueness),
//! persists accepted users with salted password hashes, and exposes the
//! HTTP endpoint.

pub mod handler;
pub mod messages;
pub mod server;
pub mod store;
pub mod validation;
