//! Product catalog repository.

use luvyn_core::{Price, ProductId};

use crate::models::Product;

/// Read-only access to the product catalog.
pub trait ProductRepository: Send + Sync {
    /// All products in display order.
    fn all(&self) -> Vec<Product>;

    /// Look up a product by its id.
    fn by_id(&self, id: ProductId) -> Option<Product>;
}

/// Catalog backed by an in-memory list, never mutated after startup.
pub struct InMemoryProductRepository {
    products: Vec<Product>,
}

impl InMemoryProductRepository {
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The demo catalog the shop ships with.
    #[must_use]
    pub fn demo() -> Self {
        let product = |id: i32, name: &str, price: i64, description: &str| Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Price::new(price),
            description: description.to_string(),
        };

        Self::new(vec![
            product(
                1,
                "Lampu Meja Canggih",
                125_000,
                "Lampu meja dengan sensor sentuh dan 3 tingkat kecerahan.",
            ),
            product(
                2,
                "Bantal Leher Ergonomis",
                75_000,
                "Bantal busa memori untuk perjalanan yang nyaman.",
            ),
            product(
                3,
                "Power Bank 10000mAh Pink",
                199_000,
                "Power bank berkapasitas besar dengan warna Luvyn pink.",
            ),
            product(
                4,
                "Kipas Angin Portable Mini",
                45_000,
                "Kipas angin kecil bertenaga baterai, ideal untuk musim panas.",
            ),
        ])
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn all(&self) -> Vec<Product> {
        self.products.clone()
    }

    fn by_id(&self, id: ProductId) -> Option<Product> {
        self.products
            .iter()
            .find(|product| product.id == id)
            .cloned()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_has_four_products() {
        let catalog = InMemoryProductRepository::demo();
        assert_eq!(catalog.all().len(), 4);
    }

    #[test]
    fn test_by_id_found() {
        let catalog = InMemoryProductRepository::demo();
        let kipas = catalog.by_id(ProductId::new(4)).unwrap();
        assert_eq!(kipas.name, "Kipas Angin Portable Mini");
        assert_eq!(kipas.price, Price::new(45_000));
    }

    #[test]
    fn test_by_id_missing() {
        let catalog = InMemoryProductRepository::demo();
        assert!(catalog.by_id(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_all_preserves_display_order() {
        let catalog = InMemoryProductRepository::demo();
        let ids: Vec<i32> = catalog.all().iter().map(|p| p.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
