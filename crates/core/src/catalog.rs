//! Static product catalog.
//!
//! The catalog is fixed at process start: either the built-in product list or
//! one loaded from JSON by the front end. Once built it is immutable.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Category, CategoryFilter, Price, ProductId};

/// Errors that can occur when building a [`Catalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The product list is empty.
    #[error("catalog has no products")]
    Empty,

    /// Two products share an id.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),

    /// A product has a zero price.
    #[error("product {0} must have a positive price")]
    ZeroPrice(ProductId),

    /// A product has a blank name.
    #[error("product {0} must have a name")]
    MissingName(ProductId),

    /// Catalog JSON could not be parsed.
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A product offered by the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: Price,
    /// Image URL.
    pub image: String,
}

impl Product {
    fn new(id: i32, name: &str, category: Category, rupees: u64, image: &str) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.to_owned(),
            category,
            price: Price::rupees(rupees),
            image: image.to_owned(),
        }
    }
}

/// The ordered, immutable product list.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, validating ids, names and prices.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, an id repeats, a name is blank,
    /// or a price is zero.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        if products.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.name.trim().is_empty() {
                return Err(CatalogError::MissingName(product.id));
            }
            if product.price.is_zero() {
                return Err(CatalogError::ZeroPrice(product.id));
            }
        }

        Ok(Self { products })
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the products are invalid.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// The shop's standard fireworks range.
    #[must_use]
    pub fn fireworks() -> Self {
        Self {
            products: vec![
                Product::new(
                    1,
                    "240 Shots Multi Color",
                    Category::GiftBoxes,
                    1200,
                    "https://images.unsplash.com/photo-1533230154799-a3740e95c4cf?auto=format&fit=crop&q=80&w=200&h=200",
                ),
                Product::new(
                    2,
                    "Flower Pots (Big)",
                    Category::FlowerPots,
                    250,
                    "https://images.unsplash.com/photo-1542358892-0b81eb0db004?auto=format&fit=crop&q=80&w=200&h=200",
                ),
                Product::new(
                    3,
                    "10cm Sparklers (Red)",
                    Category::Sparklers,
                    45,
                    "https://images.unsplash.com/photo-1627807755375-1030e463a5ba?auto=format&fit=crop&q=80&w=200&h=200",
                ),
                Product::new(
                    4,
                    "Ground Chakkar (Deluxe)",
                    Category::GroundChakkars,
                    180,
                    "https://images.unsplash.com/photo-1627807755512-42173a1e3540?auto=format&fit=crop&q=80&w=200&h=200",
                ),
                Product::new(
                    5,
                    "Rocket Bomb (Packet)",
                    Category::Rockets,
                    300,
                    "https://images.unsplash.com/photo-1532057398157-12fa83f08ca6?auto=format&fit=crop&q=80&w=200&h=200",
                ),
                Product::new(
                    6,
                    "Family Gift Box (Mega)",
                    Category::GiftBoxes,
                    4500,
                    "https://images.unsplash.com/photo-1498931299472-f7a63a5a1cfa?auto=format&fit=crop&q=80&w=200&h=200",
                ),
                Product::new(
                    7,
                    "Standard Sparklers",
                    Category::Sparklers,
                    30,
                    "https://images.unsplash.com/photo-1505377059067-e285a7bac49b?auto=format&fit=crop&q=80&w=200&h=200",
                ),
            ],
        }
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Whether the catalog offers `id`.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.find(id).is_some()
    }

    /// Products passing `filter`, in catalog order.
    pub fn filter(&self, filter: CategoryFilter) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(move |product| filter.matches(product.category))
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::fireworks()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fireworks_catalog_is_valid() {
        let catalog = Catalog::fireworks();
        assert_eq!(catalog.len(), 7);
        assert!(!catalog.is_empty());
        assert!(Catalog::new(catalog.products().to_vec()).is_ok());
    }

    #[test]
    fn test_find_product() {
        let catalog = Catalog::fireworks();
        let sparklers = catalog.find(ProductId::new(3)).unwrap();
        assert_eq!(sparklers.name, "10cm Sparklers (Red)");
        assert_eq!(sparklers.price, Price::rupees(45));
        assert!(catalog.find(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = Catalog::fireworks();
        let ids: Vec<i32> = catalog
            .filter(CategoryFilter::Only(Category::Sparklers))
            .map(|p| p.id.as_i32())
            .collect();
        assert_eq!(ids, vec![3, 7]);
        assert_eq!(catalog.filter(CategoryFilter::All).count(), 7);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut products = Catalog::fireworks().products().to_vec();
        products.push(products[0].clone());
        assert!(matches!(
            Catalog::new(products),
            Err(CatalogError::DuplicateId(id)) if id == ProductId::new(1)
        ));
    }

    #[test]
    fn test_rejects_zero_price() {
        let mut products = Catalog::fireworks().products().to_vec();
        products[2].price = Price::ZERO;
        assert!(matches!(
            Catalog::new(products),
            Err(CatalogError::ZeroPrice(_))
        ));
    }

    #[test]
    fn test_rejects_empty_catalog() {
        assert!(matches!(Catalog::new(Vec::new()), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": 10, "name": "Twinkling Star", "category": "sparklers",
             "price": {"amount": 60}, "image": "https://example.com/star.jpg"}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        let product = catalog.find(ProductId::new(10)).unwrap();
        assert_eq!(product.category, Category::Sparklers);
        assert_eq!(product.price, Price::rupees(60));
    }

    #[test]
    fn test_from_json_rejects_unknown_category() {
        let json = r#"[{"id": 1, "name": "X", "category": "bombs",
                        "price": {"amount": 1}, "image": ""}]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::Parse(_))
        ));
    }
}
