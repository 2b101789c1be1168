//! Locale enumeration and label lookup.
//!
//! The engine supports exactly two display locales. Labels are pure
//! functions of the locale so that no ad hoc table indexing is needed.

use serde::{Deserialize, Serialize};

use super::PricingMode;

/// A supported display locale.
///
/// The locale selects which localized product name is snapshotted into a
/// priced line and which labels the API returns; it never affects amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// French (the default).
    #[default]
    #[serde(rename = "fr")]
    Fr,
    /// English.
    #[serde(rename = "en")]
    En,
}

impl Locale {
    /// Returns the heading for a one-based day index, e.g. "Jour 2" / "Day 2".
    pub fn day_label(self, day: u32) -> String {
        match self {
            Locale::Fr => format!("Jour {}", day),
            Locale::En => format!("Day {}", day),
        }
    }

    /// Returns the night-count label, e.g. "2 nuits" / "1 night".
    pub fn nights_label(self, nights: u32) -> String {
        match self {
            Locale::Fr if nights > 1 => format!("{} nuits", nights),
            Locale::Fr => format!("{} nuit", nights),
            Locale::En if nights > 1 => format!("{} nights", nights),
            Locale::En => format!("{} night", nights),
        }
    }

    /// Returns the display label for a pricing mode.
    pub fn pricing_mode_label(self, mode: PricingMode) -> &'static str {
        match (self, mode) {
            (Locale::Fr, PricingMode::Fixed) => "fixe",
            (Locale::Fr, PricingMode::PerPerson) => "par personne",
            (Locale::Fr, PricingMode::PerNight) => "par nuit",
            (Locale::En, PricingMode::Fixed) => "fixed",
            (Locale::En, PricingMode::PerPerson) => "per person",
            (Locale::En, PricingMode::PerNight) => "per night",
        }
    }
}
