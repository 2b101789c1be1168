//! HTTP request handlers for the quote engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_structure, duration, price_days, schedule_payments};
use crate::error::EngineError;
use crate::models::{PaymentMilestone, Quote, QuoteStatus};

use super::request::{PriceRequest, QuoteRequest, StructureRequest};
use super::response::{
    ApiError, ApiErrorResponse, CreatedQuoteResponse, PriceResponse, StructureResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/structure", post(structure_handler))
        .route("/price", post(price_handler))
        .route("/quotes", post(create_quote_handler).get(list_quotes_handler))
        .route("/quotes/:id", get(get_quote_handler))
        .route("/quotes/:id/schedule", get(schedule_handler))
        .route("/quotes/:id/accept", post(accept_quote_handler))
        .with_state(state)
}

/// Maps a JSON extraction failure to the API error body.
fn rejection_to_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn bad_request(error: ApiError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn engine_error_response(error: EngineError, correlation_id: Uuid) -> Response {
    warn!(correlation_id = %correlation_id, error = %error, "Request failed");
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for POST /structure.
///
/// Derives the day/night counts and the per-day editor seed, optionally
/// pre-filled from a package template.
async fn structure_handler(
    State(state): State<AppState>,
    payload: Result<Json<StructureRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing structure request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(rejection, correlation_id)),
    };

    if let Err(err) = request.validate() {
        return engine_error_response(err, correlation_id);
    }

    let package = match &request.package_id {
        Some(id) => match state.catalog().get_package(id) {
            Ok(package) => Some(package),
            Err(err) => return engine_error_response(err, correlation_id),
        },
        None => None,
    };

    let days = duration::day_count(request.start_date, request.end_date);
    let nights = duration::night_count(request.start_date, request.end_date);
    let structure = compute_structure(request.start_date, request.end_date, package);
    let day_titles = (1..=days)
        .map(|day| {
            format!(
                "{} · {}",
                request.locale.day_label(day),
                request.locale.nights_label(nights)
            )
        })
        .collect();

    info!(
        correlation_id = %correlation_id,
        days,
        nights,
        package = request.package_id.as_deref().unwrap_or("-"),
        "Structure computed"
    );
    json_response(
        StatusCode::OK,
        StructureResponse {
            days,
            nights,
            day_titles,
            structure,
        },
    )
}

/// Handler for POST /price.
///
/// Prices the per-day selections without persisting anything.
async fn price_handler(
    State(state): State<AppState>,
    payload: Result<Json<PriceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing price request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(rejection, correlation_id)),
    };

    if let Err(err) = request.validate() {
        return engine_error_response(err, correlation_id);
    }

    let nights = duration::night_count(request.start_date, request.end_date);
    let result = price_days(
        &request.selections(),
        state.catalog().catalog(),
        request.guest_count,
        nights,
        request.locale,
    );

    info!(
        correlation_id = %correlation_id,
        guest_count = request.guest_count,
        nights,
        total_incl_tax = %result.totals.incl_tax,
        "Quote priced"
    );
    json_response(
        StatusCode::OK,
        PriceResponse {
            days: result.days,
            totals: result.totals,
        },
    )
}

/// Handler for POST /quotes.
///
/// Validates, prices, copies the package milestones and appends the frozen
/// quote snapshot to the store.
async fn create_quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote creation");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(rejection, correlation_id)),
    };

    if let Err(err) = request.validate() {
        return engine_error_response(err, correlation_id);
    }

    // Milestones are copied from the chosen package at save time; the saved
    // quote never re-reads the package afterwards.
    let milestones: Vec<PaymentMilestone> = match &request.package_id {
        Some(id) => match state.catalog().get_package(id) {
            Ok(package) => package.payment_milestones.clone(),
            Err(err) => return engine_error_response(err, correlation_id),
        },
        None => Vec::new(),
    };

    let nights = duration::night_count(request.start_date, request.end_date);
    let result = price_days(
        &request.selections(),
        state.catalog().catalog(),
        request.guest_count,
        nights,
        request.locale,
    );

    let quote = Quote {
        id: format!("q_{}", Uuid::new_v4().simple()),
        client_name: request.client_name.trim().to_string(),
        locale: request.locale,
        start_date: request.start_date,
        end_date: request.end_date,
        package_id: request.package_id.clone(),
        guest_count: request.guest_count,
        expiration_date: request.expiration_date,
        general_terms: request.general_terms,
        special_terms: request.special_terms,
        totals: result.totals,
        days: result.days,
        milestones,
        status: QuoteStatus::Draft,
        created_at: Utc::now(),
        accepted_at: None,
    };

    if let Err(err) = state.store().append(quote.clone()) {
        return engine_error_response(err, correlation_id);
    }

    info!(
        correlation_id = %correlation_id,
        quote_id = %quote.id,
        client = %quote.client_name,
        total_incl_tax = %quote.totals.incl_tax,
        "Quote created"
    );
    let client_link = format!("#view/{}", quote.id);
    json_response(
        StatusCode::CREATED,
        CreatedQuoteResponse { quote, client_link },
    )
}

/// Handler for GET /quotes.
async fn list_quotes_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.store().list_all() {
        Ok(quotes) => {
            info!(correlation_id = %correlation_id, count = quotes.len(), "Quotes listed");
            json_response(StatusCode::OK, quotes)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for GET /quotes/:id.
async fn get_quote_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.store().find_by_id(&id) {
        Ok(quote) => json_response(StatusCode::OK, quote),
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for GET /quotes/:id/schedule.
///
/// Derives the payment schedule from the stored snapshot, exactly as the
/// client viewer displays it.
async fn schedule_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let quote = match state.store().find_by_id(&id) {
        Ok(quote) => quote,
        Err(err) => return engine_error_response(err, correlation_id),
    };

    let schedule = schedule_payments(quote.start_date, quote.totals.incl_tax, &quote.milestones);
    json_response(StatusCode::OK, schedule)
}

/// Handler for POST /quotes/:id/accept.
///
/// Transitions the quote from draft to accepted, exactly once.
async fn accept_quote_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, quote_id = %id, "Processing accept");

    let mut quote = match state.store().find_by_id(&id) {
        Ok(quote) => quote,
        Err(err) => return engine_error_response(err, correlation_id),
    };

    if let Err(err) = quote.accept(Utc::now()) {
        return engine_error_response(err, correlation_id);
    }
    if let Err(err) = state.store().update(&quote) {
        return engine_error_response(err, correlation_id);
    }

    // Operator notification; acceptance has no other side effect.
    info!(
        correlation_id = %correlation_id,
        quote_id = %quote.id,
        client = %quote.client_name,
        "Quote accepted"
    );
    json_response(StatusCode::OK, quote)
}
