//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                           - Catalog listing
//! GET  /health                     - Health check
//!
//! # Cart
//! GET  /cart                       - Cart page with totals
//! POST /cart/add/{product_id}      - Add a product (merges duplicate lines)
//! POST /cart/update/{item_id}      - Set a line's quantity (0 removes)
//! POST /cart/remove/{item_id}      - Remove a line
//!
//! # Checkout
//! GET  /checkout                   - Static confirmation view
//!
//! # Auth
//! GET  /login                      - Login page
//! POST /login                      - Login action
//! POST /logout                     - Logout action
//! GET  /register                   - Register page
//! POST /register                   - Register action (demo stub)
//! ```

pub mod auth;
pub mod cart;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::Result;
use crate::middleware;
use crate::models::{Cart, CurrentUser, session_keys};
use crate::state::AppState;

/// Query parameters for error/success display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Per-request navigation context rendered by the base template:
/// the login state and the live cart count.
pub struct Nav {
    pub current_user: Option<CurrentUser>,
    pub cart_count: u32,
}

impl Nav {
    /// Load the navigation context from the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cart cannot be read.
    pub async fn load(session: &Session) -> Result<Self> {
        let current_user = middleware::current_user(session).await;
        let cart: Cart = session
            .get(session_keys::CART)
            .await?
            .unwrap_or_default();

        Ok(Self {
            current_user,
            cart_count: cart.item_count(),
        })
    }
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add/{product_id}", post(cart::add))
        .route("/update/{item_id}", post(cart::update))
        .route("/remove/{item_id}", post(cart::remove))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/register", get(auth::register_page).post(auth::register))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Catalog listing
        .route("/", get(home::index))
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout confirmation
        .route("/checkout", get(cart::checkout))
        // Auth routes
        .merge(auth_routes())
}
