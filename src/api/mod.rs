//! HTTP API module for the quote engine.
//!
//! This module provides the REST endpoints around the pricing core: editor
//! structure seeding, price previews, quote creation, retrieval, payment
//! schedules and the accept transition.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PriceRequest, QuoteRequest, StructureRequest};
pub use response::ApiError;
pub use state::AppState;
