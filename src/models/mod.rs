//! Core data models for the quote engine.
//!
//! This module contains all the domain models used throughout the engine.

mod locale;
mod package;
mod product;
mod quote;

pub use locale::Locale;
pub use package::{LineTemplate, MilestoneUnit, PackageTemplate, PaymentMilestone};
pub use product::{PricingMode, Product, TaxRate};
pub use quote::{
    LineSelection, PricedLine, Quote, QuoteStatus, QuoteTotals, ScheduledPayment,
};
