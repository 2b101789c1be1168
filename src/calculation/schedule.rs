//! Payment-schedule derivation.
//!
//! Turns a list of payment milestones plus the quote's start date and
//! incl.-tax grand total into due dates and amounts. The scheduler is a pure
//! transform: it neither re-sorts milestones nor validates that percentages
//! sum to 100 — both are left to the producer of the milestone list.

use chrono::{Days, Months, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{MilestoneUnit, PaymentMilestone, ScheduledPayment};

/// Computes the due date for one milestone: the start date minus the
/// milestone's lead value in days or months.
///
/// Month subtraction clamps at month ends (e.g. March 31 minus one month is
/// February 28). Subtraction that would leave the supported date range falls
/// back to the start date; calendar inputs never reach that path.
///
/// # Examples
///
/// ```
/// use quote_engine::calculation::due_date;
/// use quote_engine::models::MilestoneUnit;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
/// assert_eq!(
///     due_date(start, MilestoneUnit::Months, 6),
///     NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
/// );
/// ```
pub fn due_date(start_date: NaiveDate, unit: MilestoneUnit, value: u32) -> NaiveDate {
    let computed = match unit {
        MilestoneUnit::Days => start_date.checked_sub_days(Days::new(u64::from(value))),
        MilestoneUnit::Months => start_date.checked_sub_months(Months::new(value)),
    };
    computed.unwrap_or(start_date)
}

/// Derives the payment schedule for a quote.
///
/// Each milestone yields one entry with `amount = grand_total × percent /
/// 100` and the due date from [`due_date`]. Output preserves the milestone
/// input order.
pub fn schedule_payments(
    start_date: NaiveDate,
    grand_total: Decimal,
    milestones: &[PaymentMilestone],
) -> Vec<ScheduledPayment> {
    milestones
        .iter()
        .map(|milestone| ScheduledPayment {
            percent: milestone.percent,
            unit: milestone.unit,
            value: milestone.value,
            due_date: due_date(start_date, milestone.unit, milestone.value),
            amount: grand_total * milestone.percent / Decimal::ONE_HUNDRED,
        })
        .collect()
}
