//! Session-related types.
//!
//! Types stored in the session: the logged-in identity and the cart.

use serde::{Deserialize, Serialize};

use luvyn_core::{Email, UserId};

/// Session-stored user identity.
///
/// The user's public fields only - the password never enters the session.
/// Absence of this value means the visitor is anonymous; cart operations
/// work either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's directory ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// Display name.
    pub name: String,
}

/// Session keys for storefront data.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for storing the shopping cart.
    pub const CART: &str = "cart";
}
