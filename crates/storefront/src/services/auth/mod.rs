//! Authentication service.
//!
//! Checks submitted credentials against the read-only user directory and
//! produces the session identity. This is mock authentication for a demo
//! shop: passwords are compared in plain text against seeded users, which
//! is a documented weakness of the demo, not a pattern to copy. A real
//! deployment would store salted hashes and verify them here, behind the
//! same interface.

mod error;

pub use error::AuthError;

use secrecy::ExposeSecret;

use luvyn_core::Email;

use crate::db::UserRepository;
use crate::models::CurrentUser;

/// Minimum password length accepted by registration.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Authentication service over the user directory.
pub struct AuthService<'a> {
    users: &'a dyn UserRepository,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(users: &'a dyn UserRepository) -> Self {
        Self { users }
    }

    /// Login with email and password.
    ///
    /// On success returns the identity to attach to the session: the
    /// user's public fields, never the password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` whether the email is
    /// unknown or the password is wrong, so the two cases are not
    /// distinguishable from the outside.
    pub fn login(&self, email: &str, password: &str) -> Result<CurrentUser, AuthError> {
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .users
            .by_email(&email)
            .ok_or(AuthError::InvalidCredentials)?;

        // Plaintext comparison against mock data (see module docs).
        if user.password.expose_secret() != password {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(CurrentUser {
            id: user.id,
            email: user.email,
            name: user.name,
        })
    }

    /// Validate a registration submission.
    ///
    /// This is a demo stub: the form is validated like a real signup, but
    /// the user directory is read-only and is never mutated. The caller
    /// surfaces this limitation to the visitor.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail`, `WeakPassword`, or
    /// `PasswordMismatch` if the submission fails validation.
    pub fn register(
        &self,
        email: &str,
        password: &str,
        password_confirm: &str,
    ) -> Result<(), AuthError> {
        Email::parse(email)?;

        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::WeakPassword {
                min: MIN_PASSWORD_LENGTH,
            });
        }

        if password != password_confirm {
            return Err(AuthError::PasswordMismatch);
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::InMemoryUserRepository;

    #[test]
    fn test_login_with_demo_credentials() {
        let directory = InMemoryUserRepository::demo();
        let auth = AuthService::new(&directory);

        let identity = auth.login("user@example.com", "password").unwrap();
        assert_eq!(identity.id.as_i32(), 101);
        assert_eq!(identity.email.as_str(), "user@example.com");
        assert_eq!(identity.name, "User Luvyn");
    }

    #[test]
    fn test_login_wrong_password() {
        let directory = InMemoryUserRepository::demo();
        let auth = AuthService::new(&directory);

        assert!(matches!(
            auth.login("user@example.com", "wrong"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_login_unknown_email() {
        let directory = InMemoryUserRepository::demo();
        let auth = AuthService::new(&directory);

        assert!(matches!(
            auth.login("nobody@example.com", "password"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_login_malformed_email_reads_as_bad_credentials() {
        let directory = InMemoryUserRepository::demo();
        let auth = AuthService::new(&directory);

        assert!(matches!(
            auth.login("not-an-email", "password"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_register_accepts_valid_submission() {
        let directory = InMemoryUserRepository::demo();
        let auth = AuthService::new(&directory);

        assert!(
            auth.register("new@example.com", "longenough", "longenough")
                .is_ok()
        );
    }

    #[test]
    fn test_register_rejects_short_password() {
        let directory = InMemoryUserRepository::demo();
        let auth = AuthService::new(&directory);

        assert!(matches!(
            auth.register("new@example.com", "short", "short"),
            Err(AuthError::WeakPassword { .. })
        ));
    }

    #[test]
    fn test_register_rejects_mismatched_confirmation() {
        let directory = InMemoryUserRepository::demo();
        let auth = AuthService::new(&directory);

        assert!(matches!(
            auth.register("new@example.com", "longenough", "different"),
            Err(AuthError::PasswordMismatch)
        ));
    }

    #[test]
    fn test_register_never_mutates_directory() {
        let directory = InMemoryUserRepository::demo();
        let auth = AuthService::new(&directory);

        auth.register("new@example.com", "longenough", "longenough")
            .unwrap();

        let email = Email::parse("new@example.com").unwrap();
        assert!(directory.by_email(&email).is_none());
    }
}
