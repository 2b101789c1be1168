//! The pricing engine.
//!
//! Consumes resolved per-day line selections and the catalogue, and produces
//! priced lines, per-day detail and tax-bucketed totals. Pricing is a pure,
//! deterministic function of its inputs: identical inputs always yield
//! identical monetary figures and per-line breakdowns.

use rust_decimal::Decimal;

use crate::catalog::Catalog;
use crate::models::{LineSelection, Locale, PricedLine, QuoteTotals};

use super::quantity;

/// The output of pricing a quote: per-day priced lines plus accumulated
/// totals.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingResult {
    /// The priced lines, one list per day, in day order.
    pub days: Vec<Vec<PricedLine>>,
    /// Totals accumulated across all days and lines in day-then-line order.
    pub totals: QuoteTotals,
}

/// Prices the per-day line selections against the catalogue.
///
/// For each line with a base quantity above zero and a resolvable product
/// id, the effective quantity is derived from the product's pricing mode,
/// then `ht = unit_price × qty`, `tva = ht × rate`, `ttc = ht + tva`.
/// Amounts accumulate as exact decimals, so the totals equal the sum of the
/// per-line amounts with no per-line rounding.
///
/// Lines referencing an unknown product id are dropped silently rather than
/// erroring: a draft may keep stale references to products that were since
/// removed from the catalogue. Lines with a base quantity of zero are
/// skipped. The locale only selects the display name snapshotted into each
/// line; it never affects amounts.
pub fn price_days(
    selections: &[Vec<LineSelection>],
    catalog: &Catalog,
    guest_count: u32,
    night_count: u32,
    locale: Locale,
) -> PricingResult {
    let mut totals = QuoteTotals::default();

    let days = selections
        .iter()
        .map(|day| {
            day.iter()
                .filter(|selection| selection.qty > 0)
                .filter_map(|selection| {
                    let product = catalog.find_product(&selection.product_id)?;
                    let qty_computed = quantity::effective_quantity(
                        product.pricing_mode,
                        selection.qty,
                        guest_count,
                        night_count,
                    );

                    let excl_tax = product.unit_price * Decimal::from(qty_computed);
                    let tax = excl_tax * product.tax_rate.rate();
                    let incl_tax = excl_tax + tax;

                    let line = PricedLine {
                        product_id: product.id.clone(),
                        name: product.name(locale).to_string(),
                        pricing_mode: product.pricing_mode,
                        qty_requested: selection.qty,
                        qty_computed,
                        unit_price: product.unit_price,
                        tax_rate: product.tax_rate,
                        excl_tax,
                        tax,
                        incl_tax,
                    };
                    totals.accumulate(&line);
                    Some(line)
                })
                .collect()
        })
        .collect();

    PricingResult { days, totals }
}
