/// Signup configuration constants.
///
/// This module defines the password policy parameters and the location of the
/// persisted user list.
pub const MIN_PASSWORD_LEN: usize = 8; // Minimum password length in characters.

/// Number of random bytes used to salt each password hash.
pub const SALT_LEN: usize = 16;

/// Path of the JSON file holding registered users.
pub const USERS_FILE: &str = "users.json";
