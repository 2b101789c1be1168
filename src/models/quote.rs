//! Quote aggregate and priced-line models.
//!
//! This module contains the [`Quote`] snapshot and its associated structures:
//! the per-day line selections fed into the pricing engine, the priced lines
//! and totals it produces, and the derived payment-schedule entries.
//!
//! The persisted field names are a compatibility contract with previously
//! stored quote data and must not change.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::duration;
use crate::error::{EngineError, EngineResult};

use super::{Locale, MilestoneUnit, PaymentMilestone, PricingMode, TaxRate};

/// One operator-entered line in a day editor: a product reference and the
/// base quantity before any pricing-mode scaling.
///
/// Selections are an explicit value object passed to the pricing engine;
/// there is no ambient editor state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSelection {
    /// The id of the selected product.
    #[serde(rename = "productId")]
    pub product_id: String,
    /// The base quantity entered by the operator.
    #[serde(default)]
    pub qty: u32,
}

/// A fully priced line, frozen into the quote it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedLine {
    /// The id of the priced product.
    #[serde(rename = "prodId")]
    pub product_id: String,
    /// The product display name in the quote's locale, snapshotted at
    /// pricing time.
    pub name: String,
    /// The pricing mode the quantity was resolved under.
    #[serde(rename = "type")]
    pub pricing_mode: PricingMode,
    /// The base quantity entered by the operator.
    #[serde(rename = "qtyRequested")]
    pub qty_requested: u32,
    /// The effective quantity after applying the pricing-mode multiplier.
    #[serde(rename = "qtyComputed")]
    pub qty_computed: u32,
    /// The unit price excluding tax.
    #[serde(rename = "unitHT")]
    pub unit_price: Decimal,
    /// The VAT bucket for this line.
    #[serde(rename = "taux")]
    pub tax_rate: TaxRate,
    /// The amount excluding tax.
    #[serde(rename = "ht")]
    pub excl_tax: Decimal,
    /// The tax amount.
    #[serde(rename = "tva")]
    pub tax: Decimal,
    /// The amount including tax.
    #[serde(rename = "ttc")]
    pub incl_tax: Decimal,
}

/// Aggregated totals for a quote, with tax partitioned into the three
/// supported buckets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteTotals {
    /// The total excluding tax.
    #[serde(rename = "HT")]
    pub excl_tax: Decimal,
    /// Accumulated tax at the 0% rate (always zero, kept for the contract).
    #[serde(rename = "TVA_0")]
    pub tax_zero: Decimal,
    /// Accumulated tax at the 10% rate.
    #[serde(rename = "TVA_10")]
    pub tax_reduced: Decimal,
    /// Accumulated tax at the 20% rate.
    #[serde(rename = "TVA_20")]
    pub tax_standard: Decimal,
    /// The grand total including tax.
    #[serde(rename = "TTC")]
    pub incl_tax: Decimal,
}

impl QuoteTotals {
    /// Returns the total tax across the three buckets.
    pub fn tax_total(&self) -> Decimal {
        self.tax_zero + self.tax_reduced + self.tax_standard
    }

    /// Returns the accumulated tax for one bucket.
    pub fn bucket(&self, rate: TaxRate) -> Decimal {
        match rate {
            TaxRate::Zero => self.tax_zero,
            TaxRate::Reduced => self.tax_reduced,
            TaxRate::Standard => self.tax_standard,
        }
    }

    /// Adds a line's tax to its bucket and updates the running totals.
    pub fn accumulate(&mut self, line: &PricedLine) {
        self.excl_tax += line.excl_tax;
        self.incl_tax += line.incl_tax;
        match line.tax_rate {
            TaxRate::Zero => self.tax_zero += line.tax,
            TaxRate::Reduced => self.tax_reduced += line.tax,
            TaxRate::Standard => self.tax_standard += line.tax,
        }
    }
}

/// A derived payment-schedule entry: the milestone fields plus the computed
/// due date and amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledPayment {
    /// The share of the grand total due at this milestone.
    pub percent: Decimal,
    /// Whether `value` counts days or months.
    pub unit: MilestoneUnit,
    /// How many days/months before the event start the payment is due.
    pub value: u32,
    /// The computed due date.
    #[serde(rename = "dueDate")]
    pub due_date: NaiveDate,
    /// The computed amount including tax.
    pub amount: Decimal,
}

/// The lifecycle state of a quote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteStatus {
    /// Editable snapshot awaiting the client's decision.
    #[default]
    #[serde(rename = "draft")]
    Draft,
    /// Accepted by the client; terminal.
    #[serde(rename = "accepted")]
    Accepted,
}

/// The persisted quote snapshot.
///
/// A quote freezes the priced day lines, totals and milestone list at save
/// time; later edits to the catalogue or package templates never change it.
/// Day and night counts are always derived from the stored dates, never
/// stored themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Unique identifier, also used as the client link fragment.
    pub id: String,
    /// The client's display name.
    #[serde(rename = "Nom_Client")]
    pub client_name: String,
    /// The locale the quote was built and is displayed in.
    #[serde(rename = "Langue")]
    pub locale: Locale,
    /// The first day of the event.
    #[serde(rename = "Date_Debut")]
    pub start_date: NaiveDate,
    /// The last day of the event (inclusive).
    #[serde(rename = "Date_Fin")]
    pub end_date: NaiveDate,
    /// The chosen package template id, if any.
    #[serde(rename = "Nom_Package_Choisi")]
    pub package_id: Option<String>,
    /// The number of guests.
    #[serde(rename = "Nombre_Personnes")]
    pub guest_count: u32,
    /// The date this quote expires.
    #[serde(rename = "Date_Expiration_Devis")]
    pub expiration_date: NaiveDate,
    /// Free-text general terms and conditions.
    #[serde(rename = "Terms_Generales")]
    pub general_terms: String,
    /// Free-text special conditions.
    #[serde(rename = "Terms_Particulieres")]
    pub special_terms: String,
    /// The frozen totals.
    #[serde(rename = "Totaux")]
    pub totals: QuoteTotals,
    /// The frozen priced lines, one list per day.
    #[serde(rename = "Detail")]
    pub days: Vec<Vec<PricedLine>>,
    /// The milestone list copied from the package at save time.
    #[serde(rename = "Payments")]
    pub milestones: Vec<PaymentMilestone>,
    /// The lifecycle state.
    #[serde(rename = "Status")]
    pub status: QuoteStatus,
    /// When the quote was created.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// When the quote was accepted, if it has been.
    #[serde(rename = "acceptedAt", default, skip_serializing_if = "Option::is_none")]
    pub accepted_at: Option<DateTime<Utc>>,
}

impl Quote {
    /// Returns the derived day count for the event, clamped to [1, 15].
    pub fn day_count(&self) -> u32 {
        duration::day_count(self.start_date, self.end_date)
    }

    /// Returns the derived night count for the event, clamped to [0, 15].
    pub fn night_count(&self) -> u32 {
        duration::night_count(self.start_date, self.end_date)
    }

    /// Transitions the quote from draft to accepted.
    ///
    /// The transition happens exactly once; accepting an already-accepted
    /// quote is rejected rather than overwriting the acceptance timestamp.
    /// Totals and detail are not touched by the transition.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::QuoteAlreadyAccepted`] if the quote is not in
    /// the draft state.
    pub fn accept(&mut self, at: DateTime<Utc>) -> EngineResult<()> {
        match self.status {
            QuoteStatus::Draft => {
                self.status = QuoteStatus::Accepted;
                self.accepted_at = Some(at);
                Ok(())
            }
            QuoteStatus::Accepted => Err(EngineError::QuoteAlreadyAccepted {
                id: self.id.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample_line(rate: TaxRate, excl: &str, tax: &str) -> PricedLine {
        PricedLine {
            product_id: "p_dinner".to_string(),
            name: "Dîner assis 3 plats".to_string(),
            pricing_mode: PricingMode::PerPerson,
            qty_requested: 1,
            qty_computed: 10,
            unit_price: dec("85"),
            tax_rate: rate,
            excl_tax: dec(excl),
            tax: dec(tax),
            incl_tax: dec(excl) + dec(tax),
        }
    }

    fn sample_quote() -> Quote {
        let mut totals = QuoteTotals::default();
        let line = sample_line(TaxRate::Reduced, "850", "85");
        totals.accumulate(&line);
        Quote {
            id: "q_test".to_string(),
            client_name: "Famille Martin".to_string(),
            locale: Locale::Fr,
            start_date: make_date("2026-06-12"),
            end_date: make_date("2026-06-14"),
            package_id: Some("pack_3j".to_string()),
            guest_count: 10,
            expiration_date: make_date("2026-03-01"),
            general_terms: "Arrhes non remboursables".to_string(),
            special_terms: String::new(),
            totals,
            days: vec![vec![line], vec![], vec![]],
            milestones: vec![PaymentMilestone {
                percent: dec("30"),
                unit: MilestoneUnit::Months,
                value: 6,
            }],
            status: QuoteStatus::Draft,
            created_at: DateTime::parse_from_rfc3339("2026-01-05T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            accepted_at: None,
        }
    }

    #[test]
    fn test_day_and_night_counts_derive_from_dates() {
        let quote = sample_quote();
        assert_eq!(quote.day_count(), 3);
        assert_eq!(quote.night_count(), 2);
    }

    #[test]
    fn test_totals_accumulate_into_buckets() {
        let mut totals = QuoteTotals::default();
        totals.accumulate(&sample_line(TaxRate::Reduced, "850", "85"));
        totals.accumulate(&sample_line(TaxRate::Standard, "1200", "240"));
        totals.accumulate(&sample_line(TaxRate::Zero, "100", "0"));

        assert_eq!(totals.excl_tax, dec("2150"));
        assert_eq!(totals.tax_zero, dec("0"));
        assert_eq!(totals.tax_reduced, dec("85"));
        assert_eq!(totals.tax_standard, dec("240"));
        assert_eq!(totals.incl_tax, dec("2475"));
        assert_eq!(totals.tax_total(), dec("325"));
        assert_eq!(totals.incl_tax - totals.excl_tax, totals.tax_total());
    }

    #[test]
    fn test_bucket_accessor_matches_fields() {
        let mut totals = QuoteTotals::default();
        totals.accumulate(&sample_line(TaxRate::Standard, "1200", "240"));
        assert_eq!(totals.bucket(TaxRate::Standard), dec("240"));
        assert_eq!(totals.bucket(TaxRate::Reduced), dec("0"));
        assert_eq!(totals.bucket(TaxRate::Zero), dec("0"));
    }

    #[test]
    fn test_accept_transitions_once() {
        let mut quote = sample_quote();
        let accepted_at = Utc::now();
        let totals_before = quote.totals.clone();

        quote.accept(accepted_at).unwrap();

        assert_eq!(quote.status, QuoteStatus::Accepted);
        assert_eq!(quote.accepted_at, Some(accepted_at));
        // The transition never touches the frozen computation.
        assert_eq!(quote.totals, totals_before);
    }

    #[test]
    fn test_second_accept_is_rejected() {
        let mut quote = sample_quote();
        let first = Utc::now();
        quote.accept(first).unwrap();

        let result = quote.accept(Utc::now());
        match result {
            Err(EngineError::QuoteAlreadyAccepted { id }) => assert_eq!(id, "q_test"),
            other => panic!("Expected QuoteAlreadyAccepted, got {:?}", other),
        }
        // The original acceptance timestamp is preserved.
        assert_eq!(quote.accepted_at, Some(first));
    }

    #[test]
    fn test_quote_serializes_legacy_field_names() {
        let quote = sample_quote();
        let json = serde_json::to_value(&quote).unwrap();

        for key in [
            "id",
            "Nom_Client",
            "Langue",
            "Date_Debut",
            "Date_Fin",
            "Nom_Package_Choisi",
            "Nombre_Personnes",
            "Date_Expiration_Devis",
            "Terms_Generales",
            "Terms_Particulieres",
            "Totaux",
            "Detail",
            "Payments",
            "Status",
            "createdAt",
        ] {
            assert!(json.get(key).is_some(), "missing key {}", key);
        }
        assert_eq!(json["Status"], "draft");
        // acceptedAt is omitted while the quote is a draft.
        assert!(json.get("acceptedAt").is_none());

        let totals = &json["Totaux"];
        for key in ["HT", "TVA_0", "TVA_10", "TVA_20", "TTC"] {
            assert!(totals.get(key).is_some(), "missing totals key {}", key);
        }

        let line = &json["Detail"][0][0];
        for key in [
            "prodId",
            "name",
            "type",
            "qtyRequested",
            "qtyComputed",
            "unitHT",
            "taux",
            "ht",
            "tva",
            "ttc",
        ] {
            assert!(line.get(key).is_some(), "missing line key {}", key);
        }
    }

    #[test]
    fn test_quote_round_trip() {
        let mut quote = sample_quote();
        quote.accept(Utc::now()).unwrap();

        let json = serde_json::to_string(&quote).unwrap();
        let back: Quote = serde_json::from_str(&json).unwrap();
        assert_eq!(quote, back);
    }

    #[test]
    fn test_line_selection_qty_defaults_to_zero() {
        let selection: LineSelection =
            serde_json::from_str(r#"{ "productId": "p_room" }"#).unwrap();
        assert_eq!(selection.qty, 0);
    }
}
