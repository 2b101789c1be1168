//! Catalogue container types.
//!
//! These are the strongly-typed structures deserialized from the YAML
//! configuration files.

use serde::Deserialize;

use crate::models::{PackageTemplate, Product};

/// The catalogue file structure (`catalogue.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogueFile {
    /// The products, in insertion order.
    pub products: Vec<Product>,
}

/// The packages file structure (`packages.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct PackagesFile {
    /// The package templates, in insertion order.
    pub packages: Vec<PackageTemplate>,
}

/// The loaded product catalogue.
///
/// Products keep their insertion order; lookup by id returns the first
/// match. The catalogue is read-only to the engine — saved quotes keep
/// denormalized copies of every priced value.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalogue from a product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Returns all products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn find_product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PricingMode, TaxRate};
    use rust_decimal::Decimal;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name_fr: id.to_string(),
            name_en: id.to_string(),
            unit_price: Decimal::new(100, 0),
            pricing_mode: PricingMode::Fixed,
            tax_rate: TaxRate::Standard,
        }
    }

    #[test]
    fn test_find_product_by_id() {
        let catalog = Catalog::new(vec![product("p_a"), product("p_b")]);
        assert!(catalog.find_product("p_b").is_some());
        assert!(catalog.find_product("p_missing").is_none());
    }

    #[test]
    fn test_products_keep_insertion_order() {
        let catalog = Catalog::new(vec![product("p_z"), product("p_a"), product("p_m")]);
        let ids: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p_z", "p_a", "p_m"]);
    }
}
