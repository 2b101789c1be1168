//! Catalogue and package-template configuration.
//!
//! The catalogue of priceable products and the package templates are
//! admin-authored configuration, loaded from YAML files and read-only to
//! the engine.

mod loader;
mod types;

pub use loader::CatalogLoader;
pub use types::{Catalog, CatalogueFile, PackagesFile};
