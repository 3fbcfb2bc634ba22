//! Report formatting helpers.
//!
//! This module turns engine outputs into display strings: currency, dates and percentages, and
//! provides the newest-first ordering used when listing expenses. All functions are pure and
//! framework-agnostic; the engine's data types never carry pre-formatted text.

use super::expense::ExpenseRecord;
use chrono::NaiveDate;
use format_num::format_num;

/// Formats an amount as US dollars with thousands separators.
///
/// # Returns
/// Formatted string like "$1,234.50" or "-$3.00"
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let formatted = format_num!(",.2", amount.abs());

    // "-0.00" would look odd for tiny negative rounding noise
    let nonzero = formatted.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let sign = if amount < 0.0 && nonzero { "-" } else { "" };
    format!("{sign}${formatted}")
}

/// Formats a date like "May 1, 2024".
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Formats a percentage with one decimal, e.g. "33.3%".
#[must_use]
pub fn format_percentage(percentage: f64) -> String {
    format!("{percentage:.1}%")
}

/// Orders records for display: newest date first, ties keep their original order.
#[must_use]
pub fn sort_for_display<'a>(
    records: impl IntoIterator<Item = &'a ExpenseRecord>,
) -> Vec<&'a ExpenseRecord> {
    let mut sorted: Vec<&ExpenseRecord> = records.into_iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, record};

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(12.5), "$12.50");
        assert_eq!(format_currency(1_234_567.89), "$1,234,567.89");
        assert_eq!(format_currency(-3.0), "-$3.00");
        assert_eq!(format_currency(-1_500.0), "-$1,500.00");
        assert_eq!(format_currency(1_000_000_000.0), "$1,000,000,000.00");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2024, 5, 1)), "May 1, 2024");
        assert_eq!(format_date(date(2023, 12, 25)), "Dec 25, 2023");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(100.0), "100.0%");
        assert_eq!(format_percentage(33.3), "33.3%");
    }

    #[test]
    fn test_sort_for_display_newest_first_and_stable() {
        let records = vec![
            record(1, 1.0, "Food", date(2024, 5, 1)),
            record(2, 1.0, "Food", date(2024, 5, 3)),
            record(3, 1.0, "Food", date(2024, 5, 1)),
            record(4, 1.0, "Food", date(2024, 4, 30)),
        ];
        let ids: Vec<u64> = sort_for_display(&records).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1, 3, 4]);
    }
}
