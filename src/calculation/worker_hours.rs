//! Unpaid working-hours totals.

use rust_decimal::Decimal;

use crate::models::WorkLogEntry;

/// Sums the hours of every unpaid entry.
///
/// Unlike payment, hours are tracked for every category, medical supply
/// included. Paid entries, missing hours and negative hours are skipped. The
/// total saturates at `Decimal::MAX`.
///
/// # Examples
///
/// ```
/// use care_payments::calculation::total_unpaid_hours;
///
/// assert_eq!(total_unpaid_hours(&[]), rust_decimal::Decimal::ZERO);
/// ```
pub fn total_unpaid_hours(entries: &[WorkLogEntry]) -> Decimal {
    sum_unpaid_hours(entries)
}

pub(super) fn sum_unpaid_hours<'a, I>(entries: I) -> Decimal
where
    I: IntoIterator<Item = &'a WorkLogEntry>,
{
    entries
        .into_iter()
        .filter(|entry| !entry.is_paid)
        .filter_map(|entry| entry.hours)
        .filter(|hours| *hours > Decimal::ZERO)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}
