//! User registry actor.
//!
//! Owns the persisted user list; all signup requests go through its mailbox,
//! so uniqueness checks and file writes never race.

use actix::prelude::*;
use log::{error, info, warn};
use std::path::Path;

use crate::server::signup::messages::{RegisterUser, SignupError, SignupRequest};
use crate::server::signup::store::UserStore;
use crate::server::signup::validation::is_password_valid;

/// Validate a signup request against the store and persist it on success.
/// Password policy is checked first, then username uniqueness.
pub fn register_user(store: &mut UserStore, request: &SignupRequest) -> Result<(), SignupError> {
    if !is_password_valid(&request.password) {
        warn!("[UserRegistry] Weak password for username={}", request.username);
        return Err(SignupError::WeakPassword);
    }

    if store.contains(&request.username) {
        warn!("[UserRegistry] Duplicate username={}", request.username);
        return Err(SignupError::UsernameTaken);
    }

    store
        .insert(&request.username, &request.email, &request.password)
        .map_err(|e| {
            error!("[UserRegistry] Failed to persist username={}: {}", request.username, e);
            SignupError::Storage(e.to_string())
        })?;

    info!("[UserRegistry] Registered username={}", request.username);
    Ok(())
}

pub struct UserRegistry {
    store: UserStore,
}

impl UserRegistry {
    pub fn load(path: impl AsRef<Path>) -> Self {
        let store = UserStore::load(path);
        info!("[UserRegistry] Loaded {} registered users", store.len());
        UserRegistry { store }
    }
}

impl Actor for UserRegistry {
    type Context = Context<Self>;
}

impl Handler<RegisterUser> for UserRegistry {
    type Result = Result<(), SignupError>;

    fn handle(&mut self, msg: RegisterUser, _: &mut Context<Self>) -> Self::Result {
        register_user(&mut self.store, &msg.request)
    }
}
