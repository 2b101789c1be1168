//! Product model and related types.
//!
//! This module defines the Product struct together with the PricingMode and
//! TaxRate enums used to price catalogue entries. Field and variant wire
//! names match the legacy stored data exactly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

use super::Locale;

/// How a line's base quantity is scaled during pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PricingMode {
    /// The base quantity is used unchanged, independent of guests and nights.
    #[serde(rename = "fixe")]
    Fixed,
    /// The base quantity is multiplied by the guest count.
    #[serde(rename = "par_personne")]
    PerPerson,
    /// The base quantity is multiplied by the night count (minimum one night).
    #[serde(rename = "par_nuit")]
    PerNight,
}

/// One of the three supported VAT buckets.
///
/// The engine only ever aggregates tax into these three buckets; any other
/// rate in the catalogue is a configuration error and is rejected when the
/// catalogue is read, not tolerated during pricing.
///
/// # Example
///
/// ```
/// use quote_engine::models::TaxRate;
/// use rust_decimal::Decimal;
///
/// let rate = TaxRate::try_from(Decimal::new(10, 2)).unwrap();
/// assert_eq!(rate, TaxRate::Reduced);
/// assert!(TaxRate::try_from(Decimal::new(15, 2)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub enum TaxRate {
    /// 0% VAT.
    Zero,
    /// 10% VAT (catering, lodging).
    Reduced,
    /// 20% VAT (standard rate).
    Standard,
}

impl TaxRate {
    /// The three supported buckets, in ascending rate order.
    pub const ALL: [TaxRate; 3] = [TaxRate::Zero, TaxRate::Reduced, TaxRate::Standard];

    /// Returns the numeric rate for this bucket.
    pub fn rate(self) -> Decimal {
        match self {
            TaxRate::Zero => Decimal::ZERO,
            TaxRate::Reduced => Decimal::new(10, 2),
            TaxRate::Standard => Decimal::new(20, 2),
        }
    }
}

impl TryFrom<Decimal> for TaxRate {
    type Error = EngineError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        TaxRate::ALL
            .into_iter()
            .find(|bucket| bucket.rate() == value)
            .ok_or(EngineError::UnsupportedTaxRate { value })
    }
}

impl From<TaxRate> for Decimal {
    fn from(rate: TaxRate) -> Self {
        rate.rate()
    }
}

/// A priceable catalogue entry.
///
/// Products are owned by the catalogue and read-only to the engine. A saved
/// quote stores a denormalized copy of each line's computed values, so later
/// catalogue edits never change an existing quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier for the product.
    pub id: String,
    /// The French display name.
    #[serde(rename = "nom_fr")]
    pub name_fr: String,
    /// The English display name.
    #[serde(rename = "nom_en")]
    pub name_en: String,
    /// The unit price excluding tax.
    #[serde(rename = "prix_unitaire_ht")]
    pub unit_price: Decimal,
    /// How the base quantity is scaled during pricing.
    #[serde(rename = "type_tarification")]
    pub pricing_mode: PricingMode,
    /// The VAT bucket this product's tax falls into.
    #[serde(rename = "taux_tva")]
    pub tax_rate: TaxRate,
}

impl Product {
    /// Returns the display name for the given locale.
    pub fn name(&self, locale: Locale) -> &str {
        match locale {
            Locale::Fr => &self.name_fr,
            Locale::En => &self.name_en,
        }
    }
}
