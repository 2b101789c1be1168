//! Application state for the quote engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::catalog::CatalogLoader;
use crate::store::QuoteStore;

/// Shared application state.
///
/// Contains the loaded catalogue/package configuration and the quote store,
/// shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The loaded catalogue and package templates.
    catalog: Arc<CatalogLoader>,
    /// The quote store.
    store: Arc<QuoteStore>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(catalog: CatalogLoader, store: QuoteStore) -> Self {
        Self {
            catalog: Arc::new(catalog),
            store: Arc::new(store),
        }
    }

    /// Returns a reference to the catalogue loader.
    pub fn catalog(&self) -> &CatalogLoader {
        &self.catalog
    }

    /// Returns a reference to the quote store.
    pub fn store(&self) -> &QuoteStore {
        &self.store
    }
}
