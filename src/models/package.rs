//! Package template and payment milestone models.
//!
//! A package template is a suggestion: its per-day line templates seed a
//! quote's day editor, and its payment milestones are copied into the quote
//! when it is saved. Wire names match the legacy stored data.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The unit a milestone's lead value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MilestoneUnit {
    /// The milestone falls a number of days before the event start.
    #[serde(rename = "days")]
    Days,
    /// The milestone falls a number of months before the event start.
    #[serde(rename = "months")]
    Months,
}

/// A payment-schedule entry: a percentage of the grand total due a given
/// number of days or months before the event start.
///
/// A milestone list is not required to sum to 100 percent; the scheduler is
/// a pure transform and defers that to the producer of the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMilestone {
    /// The share of the grand total due at this milestone, in [0, 100].
    pub percent: Decimal,
    /// Whether `value` counts days or months.
    pub unit: MilestoneUnit,
    /// How many days/months before the event start the payment is due.
    pub value: u32,
}

/// One suggested line within a package day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineTemplate {
    /// The id of the suggested product.
    #[serde(rename = "productId")]
    pub product_id: String,
    /// The default base quantity the editor is seeded with.
    #[serde(rename = "qtyDefault")]
    pub default_qty: u32,
}

/// An ordered per-day suggestion of product lines plus payment milestones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageTemplate {
    /// Unique identifier for the package.
    pub id: String,
    /// The display name of the package.
    #[serde(rename = "nom_package")]
    pub name: String,
    /// Payment milestones copied into quotes built from this package.
    #[serde(rename = "conditions_paiement")]
    pub payment_milestones: Vec<PaymentMilestone>,
    /// One list of line templates per day, in day order.
    #[serde(rename = "structure_produits_par_jour")]
    pub daily_structure: Vec<Vec<LineTemplate>>,
}

impl PackageTemplate {
    /// Returns the number of days this template suggests lines for.
    pub fn duration_days(&self) -> usize {
        self.daily_structure.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_legacy_package() {
        let json = r#"{
            "id": "pack_3j",
            "nom_package": "Mariage 3 jours",
            "conditions_paiement": [
                { "percent": 30, "unit": "months", "value": 6 },
                { "percent": 50, "unit": "days", "value": 30 },
                { "percent": 20, "unit": "days", "value": 7 }
            ],
            "structure_produits_par_jour": [
                [{ "productId": "p_welcome", "qtyDefault": 1 }],
                [{ "productId": "p_dinner", "qtyDefault": 1 }],
                [{ "productId": "p_brunch", "qtyDefault": 1 }]
            ]
        }"#;

        let package: PackageTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(package.id, "pack_3j");
        assert_eq!(package.payment_milestones.len(), 3);
        assert_eq!(package.payment_milestones[0].unit, MilestoneUnit::Months);
        assert_eq!(
            package.payment_milestones[0].percent,
            Decimal::from_str("30").unwrap()
        );
        assert_eq!(package.duration_days(), 3);
        assert_eq!(package.daily_structure[1][0].product_id, "p_dinner");
    }

    #[test]
    fn test_milestone_unit_wire_names() {
        assert_eq!(
            serde_json::to_string(&MilestoneUnit::Days).unwrap(),
            "\"days\""
        );
        assert_eq!(
            serde_json::to_string(&MilestoneUnit::Months).unwrap(),
            "\"months\""
        );
    }

    #[test]
    fn test_milestone_round_trip() {
        let milestone = PaymentMilestone {
            percent: Decimal::from_str("12.5").unwrap(),
            unit: MilestoneUnit::Days,
            value: 45,
        };

        let json = serde_json::to_string(&milestone).unwrap();
        let back: PaymentMilestone = serde_json::from_str(&json).unwrap();
        assert_eq!(milestone, back);
    }
}
