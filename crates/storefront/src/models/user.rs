//! User model.

use luvyn_core::{Email, UserId};
use secrecy::SecretString;

/// A registered user in the directory.
///
/// Directory-owned and immutable; registration is a demo stub and never
/// adds to the directory. The password is mock plaintext data, wrapped in
/// `SecretString` so it stays out of `Debug` output and logs.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    /// Login key, unique within the directory.
    pub email: Email,
    pub password: SecretString,
    pub name: String,
}
