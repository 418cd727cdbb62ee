//! Domain models for the storefront.

pub mod cart;
pub mod product;
pub mod session;
pub mod user;

pub use cart::{Cart, CartError, CartLine};
pub use product::Product;
pub use session::CurrentUser;
pub use session::keys as session_keys;
pub use user::User;
