//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::db::{ProductRepository, UserRepository};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the read-only product catalog, and the read-only user
/// directory. Both repositories are behind traits so a real backing store
/// can later be substituted without touching the cart or auth logic.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    products: Box<dyn ProductRepository>,
    users: Box<dyn UserRepository>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(
        config: StorefrontConfig,
        products: impl ProductRepository + 'static,
        users: impl UserRepository + 'static,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                products: Box::new(products),
                users: Box::new(users),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn products(&self) -> &dyn ProductRepository {
        self.inner.products.as_ref()
    }

    /// Get a reference to the user directory.
    #[must_use]
    pub fn users(&self) -> &dyn UserRepository {
        self.inner.users.as_ref()
    }
}
