//! Editor-structure seeding.
//!
//! Derives the per-day line selections a quote editor starts from, optionally
//! pre-filled with a package template's suggested lines.

use chrono::NaiveDate;

use crate::models::{LineSelection, PackageTemplate};

use super::duration;

/// Computes the per-day line-selection seed for an event.
///
/// The result always has exactly `day_count(start, end)` entries. When a
/// package template is given, day `i` is seeded from the template's line
/// list for day `i`; template days beyond the event length are dropped and
/// days past the end of a shorter template stay empty. Every seeded line
/// remains independently editable before pricing — the template is a
/// suggestion, not a constraint.
pub fn compute_structure(
    start: NaiveDate,
    end: NaiveDate,
    package: Option<&PackageTemplate>,
) -> Vec<Vec<LineSelection>> {
    let days = duration::day_count(start, end) as usize;

    (0..days)
        .map(|day| {
            package
                .and_then(|p| p.daily_structure.get(day))
                .map(|templates| {
                    templates
                        .iter()
                        .map(|t| LineSelection {
                            product_id: t.product_id.clone(),
                            qty: t.default_qty,
                        })
                        .collect()
                })
                .unwrap_or_default()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LineTemplate, PackageTemplate};

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn line(product_id: &str, qty: u32) -> LineTemplate {
        LineTemplate {
            product_id: product_id.to_string(),
            default_qty: qty,
        }
    }

    fn three_day_package() -> PackageTemplate {
        PackageTemplate {
            id: "pack_3j".to_string(),
            name: "Mariage 3 jours".to_string(),
            payment_milestones: vec![],
            daily_structure: vec![
                vec![line("p_welcome", 1), line("p_breakfast", 1)],
                vec![line("p_dinner", 1)],
                vec![line("p_brunch", 1)],
            ],
        }
    }

    /// ST-001: without a package every day is empty
    #[test]
    fn test_no_package_seeds_empty_days() {
        let structure =
            compute_structure(make_date("2026-06-12"), make_date("2026-06-14"), None);
        assert_eq!(structure.len(), 3);
        assert!(structure.iter().all(|day| day.is_empty()));
    }

    /// ST-002: package lines seed matching days with their default quantities
    #[test]
    fn test_package_seeds_matching_days() {
        let package = three_day_package();
        let structure = compute_structure(
            make_date("2026-06-12"),
            make_date("2026-06-14"),
            Some(&package),
        );

        assert_eq!(structure.len(), 3);
        assert_eq!(structure[0].len(), 2);
        assert_eq!(structure[0][0].product_id, "p_welcome");
        assert_eq!(structure[0][0].qty, 1);
        assert_eq!(structure[1][0].product_id, "p_dinner");
        assert_eq!(structure[2][0].product_id, "p_brunch");
    }

    /// ST-003: template days beyond the event length are dropped
    #[test]
    fn test_longer_template_is_truncated() {
        let package = three_day_package();
        let structure = compute_structure(
            make_date("2026-06-12"),
            make_date("2026-06-13"),
            Some(&package),
        );

        assert_eq!(structure.len(), 2);
        assert_eq!(structure[0][0].product_id, "p_welcome");
        assert_eq!(structure[1][0].product_id, "p_dinner");
    }

    /// ST-004: days past a shorter template stay empty
    #[test]
    fn test_shorter_template_leaves_tail_empty() {
        let package = three_day_package();
        let structure = compute_structure(
            make_date("2026-06-12"),
            make_date("2026-06-16"),
            Some(&package),
        );

        assert_eq!(structure.len(), 5);
        assert!(!structure[2].is_empty());
        assert!(structure[3].is_empty());
        assert!(structure[4].is_empty());
    }
}
