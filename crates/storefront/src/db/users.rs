//! User directory repository.

use luvyn_core::{Email, UserId};
use secrecy::SecretString;

use crate::models::User;

/// Read-only access to the user directory.
pub trait UserRepository: Send + Sync {
    /// Look up a user by email, the login key. Exact match.
    fn by_email(&self, email: &Email) -> Option<User>;
}

/// Directory backed by an in-memory list, never mutated after startup.
/// Registration is a demo stub and does not add to this list.
pub struct InMemoryUserRepository {
    users: Vec<User>,
}

impl InMemoryUserRepository {
    #[must_use]
    pub const fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// The demo directory the shop ships with.
    ///
    /// Passwords are mock plaintext demo data, compared as-is by the
    /// auth service. Nothing here is a real credential.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(vec![User {
            id: UserId::new(101),
            email: Email::parse("user@example.com").unwrap_or_else(|_| unreachable!()),
            password: SecretString::from("password".to_string()),
            name: "User Luvyn".to_string(),
        }])
    }
}

impl UserRepository for InMemoryUserRepository {
    fn by_email(&self, email: &Email) -> Option<User> {
        self.users.iter().find(|user| &user.email == email).cloned()
    }
}
