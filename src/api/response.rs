//! Response types for the quote engine API.
//!
//! This module defines the success payloads, the error response structures
//! and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{LineSelection, PricedLine, Quote, QuoteTotals};

/// Response body for `POST /structure`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureResponse {
    /// The derived day count, clamped to [1, 15].
    pub days: u32,
    /// The derived night count, clamped to [0, 15].
    pub nights: u32,
    /// Localized editor headings, one per day (e.g. "Jour 1 · 2 nuits").
    pub day_titles: Vec<String>,
    /// The per-day line-selection seed.
    pub structure: Vec<Vec<LineSelection>>,
}

/// Response body for `POST /price`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceResponse {
    /// The priced lines, one list per day.
    pub days: Vec<Vec<PricedLine>>,
    /// The accumulated totals with tax buckets.
    pub totals: QuoteTotals,
}

/// Response body for `POST /quotes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedQuoteResponse {
    /// The persisted quote snapshot.
    pub quote: Quote,
    /// The opaque client link fragment for the viewer route.
    pub client_link: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::CatalogNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Catalogue configuration error",
                    format!("Catalogue file not found: {}", path),
                ),
            },
            EngineError::CatalogParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Catalogue parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidProduct { id, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    format!("Invalid product '{}'", id),
                    message,
                ),
            },
            EngineError::InvalidPackage { id, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    format!("Invalid package '{}'", id),
                    message,
                ),
            },
            EngineError::UnsupportedTaxRate { value } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    format!("Unsupported tax rate: {}", value),
                    "Catalogue tax rates must be one of 0, 0.10 or 0.20",
                ),
            },
            EngineError::PackageNotFound { id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "PACKAGE_NOT_FOUND",
                    format!("Package not found: {}", id),
                    "The requested package template does not exist",
                ),
            },
            EngineError::QuoteNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "QUOTE_NOT_FOUND",
                    format!("Quote not found: {}", id),
                    "No quote with this id exists in the store",
                ),
            },
            EngineError::InvalidQuote { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid quote field '{}': {}", field, message),
                    "The quote request contains invalid information",
                ),
            },
            EngineError::QuoteAlreadyAccepted { id } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "QUOTE_ALREADY_ACCEPTED",
                    format!("Quote '{}' has already been accepted", id),
                    "The accept transition happens exactly once",
                ),
            },
            EngineError::StoreRead { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORE_ERROR",
                    "Quote store read error",
                    format!("{}: {}", path, message),
                ),
            },
            EngineError::StoreWrite { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORE_ERROR",
                    "Quote store write error",
                    format!("{}: {}", path, message),
                ),
            },
            EngineError::Store { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORE_ERROR", "Quote store error", message),
            },
        }
    }
}
