//! Error types for the quote engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading the catalogue,
//! pricing a quote, or managing the quote store.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the quote engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use quote_engine::error::EngineError;
///
/// let error = EngineError::CatalogNotFound {
///     path: "/missing/catalogue.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Catalogue file not found: /missing/catalogue.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A catalogue or package configuration file was not found.
    #[error("Catalogue file not found: {path}")]
    CatalogNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A catalogue or package configuration file could not be parsed.
    #[error("Failed to parse catalogue file '{path}': {message}")]
    CatalogParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A product in the catalogue contained invalid data.
    #[error("Invalid product '{id}': {message}")]
    InvalidProduct {
        /// The id of the invalid product.
        id: String,
        /// A description of what made the product invalid.
        message: String,
    },

    /// A package template contained invalid data.
    #[error("Invalid package '{id}': {message}")]
    InvalidPackage {
        /// The id of the invalid package.
        id: String,
        /// A description of what made the package invalid.
        message: String,
    },

    /// A tax rate outside the three supported buckets (0%, 10%, 20%).
    ///
    /// Raised when the catalogue is read, never inside the pricing engine.
    #[error("Unsupported tax rate: {value} (expected 0, 0.10 or 0.20)")]
    UnsupportedTaxRate {
        /// The offending rate value.
        value: Decimal,
    },

    /// A package template id had no match in the loaded configuration.
    #[error("Package not found: {id}")]
    PackageNotFound {
        /// The package id that was not found.
        id: String,
    },

    /// A quote id had no match in the store.
    #[error("Quote not found: {id}")]
    QuoteNotFound {
        /// The quote id that was not found.
        id: String,
    },

    /// A quote request field failed validation before computation.
    #[error("Invalid quote field '{field}': {message}")]
    InvalidQuote {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An accept transition was attempted on an already-accepted quote.
    #[error("Quote '{id}' has already been accepted")]
    QuoteAlreadyAccepted {
        /// The id of the quote.
        id: String,
    },

    /// The quote store file could not be read.
    #[error("Failed to read quote store '{path}': {message}")]
    StoreRead {
        /// The path to the store file.
        path: String,
        /// A description of the read error.
        message: String,
    },

    /// The quote store file could not be written.
    #[error("Failed to write quote store '{path}': {message}")]
    StoreWrite {
        /// The path to the store file.
        path: String,
        /// A description of the write error.
        message: String,
    },

    /// A general quote store error occurred.
    #[error("Quote store error: {message}")]
    Store {
        /// A description of the store error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
