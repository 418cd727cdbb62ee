//! Read-only data access for the storefront.
//!
//! There is no database: the catalog and the user directory are plain
//! in-memory lists seeded at startup. Both sit behind repository traits
//! so a real backing store can later be substituted without touching the
//! cart or auth logic.

pub mod products;
pub mod users;

pub use products::{InMemoryProductRepository, ProductRepository};
pub use users::{InMemoryUserRepository, UserRepository};
