//! Product model.

use luvyn_core::{Price, ProductId};

/// A purchasable product.
///
/// Catalog-owned and immutable: the catalog is seeded at startup and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Whole-rupiah price.
    pub price: Price,
    pub description: String,
}
