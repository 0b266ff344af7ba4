//! Persisted user store.
//!
//! Users live in a JSON file; passwords are stored as salted SHA-256 hashes,
//! never in plaintext.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;
use rand::Rng;
use serde::{Serialize, Deserialize};
use sha2::{Digest, Sha256};

use crate::config::signup::SALT_LEN;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    /// Hex-encoded random salt.
    pub salt: String,
    /// Hex-encoded SHA-256 of salt bytes followed by the password bytes.
    pub password_hash: String,
}

pub struct UserStore {
    path: PathBuf,
    users: Vec<UserRecord>,
}

impl UserStore {
    /// Load the store from `path`. A missing file is an empty store; a
    /// corrupt file is logged, treated as empty, and overwritten on the next
    /// successful signup.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let users = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(users) => users,
                Err(e) => {
                    warn!("[UserStore] Corrupt user file {:?}, starting empty: {}", path, e);
                    Vec::new()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                warn!("[UserStore] Could not read {:?}, starting empty: {}", path, e);
                Vec::new()
            }
        };

        UserStore { path, users }
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.iter().any(|u| u.username == username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Append a user record and persist the whole list.
    pub fn insert(&mut self, username: &str, email: &str, password: &str) -> io::Result<()> {
        let salt: [u8; SALT_LEN] = rand::rng().random();
        let record = UserRecord {
            username: username.to_string(),
            email: email.to_string(),
            salt: hex_encode(&salt),
            password_hash: hash_password(password, &salt),
        };

        self.users.push(record);
        self.save()
    }

    /// Check a candidate password against the stored hash for `username`.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.users.iter().any(|u| {
            match hex_decode(&u.salt) {
                Some(salt) => u.username == username && u.password_hash == hash_password(password, &salt),
                None => false,
            }
        })
    }

    fn save(&self) -> io::Result<()> {
        let contents = serde_json::to_string_pretty(&self.users)
            .map_err(io::Error::other)?;
        fs::write(&self.path, contents)
    }
}

fn hash_password(password: &str, salt: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hex_encode(&hasher.finalize())
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

fn hex_decode(hex: &str) -> Option<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return None;
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
        .collect()
}
