//! Effective-quantity resolution.
//!
//! This module resolves the quantity a line is actually priced at, given its
//! pricing mode, the operator-entered base quantity, the guest count and the
//! night count.

use crate::models::PricingMode;

/// Resolves the effective quantity for a line.
///
/// - `Fixed`: the base quantity is used unchanged.
/// - `PerPerson`: the base quantity is multiplied by the guest count. A
///   guest count of 0 yields a silent zero-priced line, not an error.
/// - `PerNight`: the base quantity is multiplied by `max(1, night_count)`;
///   a same-day event still counts as one night-unit so lodging-adjacent
///   fixed charges are not zeroed out.
///
/// # Examples
///
/// ```
/// use quote_engine::calculation::effective_quantity;
/// use quote_engine::models::PricingMode;
///
/// assert_eq!(effective_quantity(PricingMode::PerPerson, 1, 10, 2), 10);
/// assert_eq!(effective_quantity(PricingMode::PerNight, 1, 10, 0), 1);
/// ```
pub fn effective_quantity(
    mode: PricingMode,
    base_qty: u32,
    guest_count: u32,
    night_count: u32,
) -> u32 {
    match mode {
        PricingMode::Fixed => base_qty,
        PricingMode::PerPerson => base_qty * guest_count,
        PricingMode::PerNight => base_qty * night_count.max(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// EQ-001: fixed mode keeps the base quantity
    #[test]
    fn test_fixed_mode_keeps_base_quantity() {
        assert_eq!(effective_quantity(PricingMode::Fixed, 3, 50, 4), 3);
        assert_eq!(effective_quantity(PricingMode::Fixed, 0, 50, 4), 0);
    }

    /// EQ-002: per-person mode multiplies by the guest count
    #[test]
    fn test_per_person_multiplies_by_guests() {
        assert_eq!(effective_quantity(PricingMode::PerPerson, 1, 10, 2), 10);
        assert_eq!(effective_quantity(PricingMode::PerPerson, 2, 25, 2), 50);
    }

    /// EQ-003: per-person with 0 guests is a silent zero
    #[test]
    fn test_per_person_with_zero_guests_is_zero() {
        assert_eq!(effective_quantity(PricingMode::PerPerson, 5, 0, 2), 0);
    }

    /// EQ-004: per-night mode multiplies by the night count
    #[test]
    fn test_per_night_multiplies_by_nights() {
        assert_eq!(effective_quantity(PricingMode::PerNight, 1, 10, 2), 2);
        assert_eq!(effective_quantity(PricingMode::PerNight, 3, 10, 4), 12);
    }

    /// EQ-005: per-night with 0 nights still counts one night-unit
    #[test]
    fn test_per_night_with_zero_nights_counts_one() {
        assert_eq!(effective_quantity(PricingMode::PerNight, 1, 10, 0), 1);
        assert_eq!(effective_quantity(PricingMode::PerNight, 4, 10, 0), 4);
    }

    /// EQ-006: every mode is linear in the base quantity
    #[test]
    fn test_linear_in_base_quantity() {
        for mode in [
            PricingMode::Fixed,
            PricingMode::PerPerson,
            PricingMode::PerNight,
        ] {
            let single = effective_quantity(mode, 2, 7, 3);
            let double = effective_quantity(mode, 4, 7, 3);
            assert_eq!(double, single * 2);
        }
    }
}
