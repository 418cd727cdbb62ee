//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. `TraceLayer` (request tracing)
//! 2. Session layer (tower-sessions with in-memory store)

pub mod auth;
pub mod session;

pub use auth::{clear_current_user, current_user, set_current_user};
pub use session::create_session_layer;
