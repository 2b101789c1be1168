//! Calculation logic for the quote engine.
//!
//! This module contains the pure computation functions: day/night counts
//! derived from the event date range, effective-quantity resolution for the
//! three pricing modes, editor-structure seeding from a package template,
//! line pricing with tax-bucketed totals, and payment-schedule derivation.
//! Every function here is a deterministic function of its arguments.

pub mod duration;
mod pricing;
mod quantity;
mod schedule;
mod structure;

pub use duration::{MAX_EVENT_DAYS, day_count, night_count};
pub use pricing::{PricingResult, price_days};
pub use quantity::effective_quantity;
pub use schedule::{due_date, schedule_payments};
pub use structure::compute_structure;
