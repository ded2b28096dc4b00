// Core structs: Product, FilterDescriptor, wire types
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Fixed set of product classes the catalog knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mobiles,
    Laptops,
    Earphones,
    Speakers,
    Tablets,
    Smartwatches,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Mobiles => "mobiles",
            Category::Laptops => "laptops",
            Category::Earphones => "earphones",
            Category::Speakers => "speakers",
            Category::Tablets => "tablets",
            Category::Smartwatches => "smartwatches",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog record. Loaded once at startup and never mutated.
/// `category` is `None` only on synthetic fallback products, which are
/// built after matching and never pass through the filter themselves.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub category: Option<Category>,
    pub price: f64,
    pub rating: f64,
    pub specs: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_link")]
    pub link: String,
}

fn default_link() -> String {
    "#".to_string()
}

/// Structured view of one query, produced by the interpreter.
/// `min_price` and `max_price` are independently optional and never
/// cross-validated: min above max is accepted and simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterDescriptor {
    pub category: Option<Category>,
    pub max_price: Option<f64>,
    pub min_price: Option<f64>,
    pub is_best_query: bool,
    pub is_gaming_query: bool,
    pub cleaned_term: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ApiResponse {
    Success { message: String },
    Error { error: String },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{0}")]
    DatabaseError(#[from] rusqlite::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_deserializes_from_lowercase() {
        let cat: Category = serde_json::from_str("\"laptops\"").unwrap();
        assert_eq!(cat, Category::Laptops);
    }

    #[test]
    fn product_fills_defaults_for_optional_fields() {
        let json = r#"{
            "name": "Soundcore Life Q30",
            "category": "earphones",
            "price": 6999,
            "rating": 4.4,
            "specs": "Hybrid ANC, 40h playtime"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.category, Some(Category::Earphones));
        assert!(product.tags.is_empty());
        assert_eq!(product.link, "#");
    }

    #[test]
    fn api_response_serializes_flat() {
        let ok = ApiResponse::Success { message: "<div></div>".into() };
        assert_eq!(serde_json::to_string(&ok).unwrap(), r#"{"message":"<div></div>"}"#);

        let err = ApiResponse::Error { error: "Invalid request".into() };
        assert_eq!(serde_json::to_string(&err).unwrap(), r#"{"error":"Invalid request"}"#);
    }
}
