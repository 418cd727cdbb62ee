//! Session identity helpers.
//!
//! The logged-in user is stored in the session under a single key; these
//! helpers are the only code that touches it, so login, logout, and the
//! nav bar all agree on what "logged in" means.

use tower_sessions::Session;

use crate::models::{CurrentUser, session_keys};

/// Get the current user from the session, if any.
///
/// Session read failures are treated as "not logged in" - an anonymous
/// visitor can do everything except appear logged in, so there is nothing
/// better to do with the error here.
pub async fn current_user(session: &Session) -> Option<CurrentUser> {
    session
        .get::<CurrentUser>(session_keys::CURRENT_USER)
        .await
        .ok()
        .flatten()
}

/// Attach a user identity to the session after a successful login.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_USER, user).await
}

/// Clear the session identity (logout).
///
/// Idempotent: clearing an absent identity is not an error.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_user(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentUser>(session_keys::CURRENT_USER)
        .await?;
    Ok(())
}
