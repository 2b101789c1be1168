//! Request types for the quote engine API.
//!
//! This module defines the JSON request structures for the structure, price
//! and quote endpoints, their conversions into domain types and the input
//! validation that runs before any computation.
//!
//! Numeric fields (`guest_count`, line quantities) follow a
//! default-on-missing policy: an absent or null value becomes 0 at this
//! boundary, never inside the pricing math.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::duration;
use crate::error::{EngineError, EngineResult};
use crate::models::{LineSelection, Locale};

/// Request body for the `POST /structure` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureRequest {
    /// The first day of the event.
    pub start_date: NaiveDate,
    /// The last day of the event (inclusive).
    pub end_date: NaiveDate,
    /// The number of guests (display only for this endpoint).
    #[serde(default)]
    pub guest_count: u32,
    /// The package template to seed from, if any.
    #[serde(default)]
    pub package_id: Option<String>,
    /// The locale for the returned day headings.
    #[serde(default)]
    pub locale: Locale,
}

impl StructureRequest {
    /// Validates the date range before any computation runs.
    pub fn validate(&self) -> EngineResult<()> {
        validate_date_range(self.start_date, self.end_date)
    }
}

/// One line in a per-day selection list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineSelectionRequest {
    /// The id of the selected product.
    pub product_id: String,
    /// The base quantity entered by the operator.
    #[serde(default)]
    pub qty: u32,
}

impl From<LineSelectionRequest> for LineSelection {
    fn from(req: LineSelectionRequest) -> Self {
        LineSelection {
            product_id: req.product_id,
            qty: req.qty,
        }
    }
}

/// Request body for the `POST /price` endpoint (preview, nothing persisted).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRequest {
    /// The first day of the event.
    pub start_date: NaiveDate,
    /// The last day of the event (inclusive).
    pub end_date: NaiveDate,
    /// The number of guests.
    #[serde(default)]
    pub guest_count: u32,
    /// The locale for snapshotted product names.
    #[serde(default)]
    pub locale: Locale,
    /// The per-day line selections, one list per event day.
    pub days: Vec<Vec<LineSelectionRequest>>,
}

impl PriceRequest {
    /// Validates the date range and day-array length before pricing.
    pub fn validate(&self) -> EngineResult<()> {
        validate_date_range(self.start_date, self.end_date)?;
        validate_day_list_length(self.start_date, self.end_date, self.days.len())
    }

    /// Converts the day lists into the engine's selection value object.
    pub fn selections(&self) -> Vec<Vec<LineSelection>> {
        self.days
            .iter()
            .map(|day| day.iter().cloned().map(Into::into).collect())
            .collect()
    }
}

/// Request body for the `POST /quotes` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The client's display name.
    pub client_name: String,
    /// The locale the quote is built in.
    #[serde(default)]
    pub locale: Locale,
    /// The first day of the event.
    pub start_date: NaiveDate,
    /// The last day of the event (inclusive).
    pub end_date: NaiveDate,
    /// The chosen package template id, if any. Its milestones are copied
    /// into the saved quote.
    #[serde(default)]
    pub package_id: Option<String>,
    /// The number of guests.
    #[serde(default)]
    pub guest_count: u32,
    /// The date the quote expires.
    pub expiration_date: NaiveDate,
    /// Free-text general terms.
    #[serde(default)]
    pub general_terms: String,
    /// Free-text special conditions.
    #[serde(default)]
    pub special_terms: String,
    /// The per-day line selections, one list per event day.
    pub days: Vec<Vec<LineSelectionRequest>>,
}

impl QuoteRequest {
    /// Validates the quote metadata before any computation runs.
    ///
    /// Checks the client name, the date order and that the day array has
    /// exactly one entry per derived event day.
    pub fn validate(&self) -> EngineResult<()> {
        if self.client_name.trim().is_empty() {
            return Err(EngineError::InvalidQuote {
                field: "client_name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        validate_date_range(self.start_date, self.end_date)?;
        validate_day_list_length(self.start_date, self.end_date, self.days.len())
    }

    /// Converts the day lists into the engine's selection value object.
    pub fn selections(&self) -> Vec<Vec<LineSelection>> {
        self.days
            .iter()
            .map(|day| day.iter().cloned().map(Into::into).collect())
            .collect()
    }
}

fn validate_date_range(start: NaiveDate, end: NaiveDate) -> EngineResult<()> {
    if end < start {
        return Err(EngineError::InvalidQuote {
            field: "end_date".to_string(),
            message: format!("{} is before the start date {}", end, start),
        });
    }
    Ok(())
}

fn validate_day_list_length(start: NaiveDate, end: NaiveDate, len: usize) -> EngineResult<()> {
    let expected = duration::day_count(start, end) as usize;
    if len != expected {
        return Err(EngineError::InvalidQuote {
            field: "days".to_string(),
            message: format!("expected {} day entries, got {}", expected, len),
        });
    }
    Ok(())
}
