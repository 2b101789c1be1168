//! Catalogue loading functionality.
//!
//! This module provides the [`CatalogLoader`] type for loading the product
//! catalogue and package templates from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::PackageTemplate;

use super::types::{Catalog, CatalogueFile, PackagesFile};

/// Loads and provides access to the catalogue and package templates.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/rocabella/
/// ├── catalogue.yaml   # Priceable products
/// └── packages.yaml    # Package templates with payment milestones
/// ```
///
/// # Example
///
/// ```no_run
/// use quote_engine::catalog::CatalogLoader;
///
/// let loader = CatalogLoader::load("./config/rocabella").unwrap();
///
/// let product = loader.catalog().find_product("p_dinner").unwrap();
/// println!("Unit price: {}", product.unit_price);
///
/// let package = loader.get_package("pack_3j").unwrap();
/// println!("Package: {}", package.name);
/// ```
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    catalog: Catalog,
    packages: Vec<PackageTemplate>,
}

impl CatalogLoader {
    /// Loads the catalogue and packages from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/rocabella")
    ///
    /// # Returns
    ///
    /// Returns a `CatalogLoader` instance on success, or an error if:
    /// - Either file is missing or contains invalid YAML
    /// - A product has a negative unit price or an unsupported tax rate
    /// - A package milestone percent lies outside [0, 100]
    ///
    /// Configuration errors are rejected here, at catalogue-read time; the
    /// pricing engine never re-validates them.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let catalogue_path = path.join("catalogue.yaml");
        let catalogue = Self::load_yaml::<CatalogueFile>(&catalogue_path)?;

        let packages_path = path.join("packages.yaml");
        let packages_file = Self::load_yaml::<PackagesFile>(&packages_path)?;

        for product in &catalogue.products {
            if product.unit_price < Decimal::ZERO {
                return Err(EngineError::InvalidProduct {
                    id: product.id.clone(),
                    message: format!("unit price {} is negative", product.unit_price),
                });
            }
        }

        for package in &packages_file.packages {
            for milestone in &package.payment_milestones {
                if milestone.percent < Decimal::ZERO
                    || milestone.percent > Decimal::ONE_HUNDRED
                {
                    return Err(EngineError::InvalidPackage {
                        id: package.id.clone(),
                        message: format!(
                            "milestone percent {} is outside [0, 100]",
                            milestone.percent
                        ),
                    });
                }
            }
        }

        Ok(Self {
            catalog: Catalog::new(catalogue.products),
            packages: packages_file.packages,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::CatalogNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::CatalogParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded catalogue.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns all package templates in insertion order.
    pub fn packages(&self) -> &[PackageTemplate] {
        &self.packages
    }

    /// Looks up a package template by id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::PackageNotFound`] if no package has the id.
    pub fn get_package(&self, id: &str) -> EngineResult<&PackageTemplate> {
        self.packages
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| EngineError::PackageNotFound { id: id.to_string() })
    }
}
