//! End-to-end test helpers for the Luvyn demo shop.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the storefront
//! cargo run -p luvyn-storefront
//!
//! # Run the ignored end-to-end tests
//! cargo test -p luvyn-integration-tests -- --ignored
//! ```
//!
//! Each test builds its own cookie-holding client, so each test gets its
//! own session and its own cart.

#![cfg_attr(not(test), forbid(unsafe_code))]

use reqwest::Client;
use reqwest::redirect::Policy;

/// Base URL for the storefront (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("LUVYN_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Create a client that keeps its session cookie and does not follow
/// redirects, so tests can assert on the redirect responses themselves.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}
