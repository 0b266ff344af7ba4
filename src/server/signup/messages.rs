use actix::prelude::*;
use serde::{Serialize, Deserialize};

/// Signup form payload.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Successful signup response; `redirect` is where the client should go next.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SignupResponse {
    pub status: String,
    pub redirect: String,
}

impl SignupResponse {
    pub fn ok() -> Self {
        SignupResponse {
            status: "ok".to_string(),
            redirect: "/".to_string(),
        }
    }
}

/// Why a signup was refused. The two validation kinds carry fixed
/// user-facing messages; `Storage` is an internal persistence failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupError {
    WeakPassword,
    UsernameTaken,
    Storage(String),
}

impl SignupError {
    pub fn code(&self) -> &'static str {
        match self {
            SignupError::WeakPassword => "WEAK_PASSWORD",
            SignupError::UsernameTaken => "USERNAME_TAKEN",
            SignupError::Storage(_) => "STORAGE",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            SignupError::WeakPassword => {
                "Password must be at least 8 characters long and contain at least one uppercase letter and one digit."
            }
            SignupError::UsernameTaken => "Username is already taken.",
            SignupError::Storage(_) => "Could not save the new account.",
        }
    }
}

/// Register a new user in the registry.
#[derive(Message)]
#[rtype(result = "Result<(), SignupError>")]
pub struct RegisterUser {
    pub request: SignupRequest,
}
