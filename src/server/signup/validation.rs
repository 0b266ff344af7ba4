//! Password policy validation.

use crate::config::signup::MIN_PASSWORD_LEN;

/// A password is acceptable when it has at least `MIN_PASSWORD_LEN`
/// characters, at least one uppercase letter, and at least one digit.
pub fn is_password_valid(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}
