// Read-only product catalog, loaded once at startup.
use crate::model::{CatalogError, Product};
use std::fs;

/// Immutable snapshot of the product list, in file order.
///
/// A reload builds a fresh `Catalog` and swaps the `Arc` holding it;
/// the live snapshot is never mutated.
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn load(path: &str) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        let products: Vec<Product> = serde_json::from_str(&content)?;
        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[cfg(test)]
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }
}
