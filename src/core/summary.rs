//! Aggregation engine.
//!
//! Pure functions that derive summary statistics, the category breakdown and the daily spending
//! series from a slice of records. Nothing is cached; every call recomputes from the input.
//! Month and week windows are relative to a caller-supplied reference date.

use super::expense::ExpenseRecord;
use crate::config::CategorySet;
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

/// Number of days in the trailing window used for the daily average and the daily series.
pub const WEEK_DAYS: u64 = 7;

/// Label shown when there is no top category.
pub const NO_CATEGORY: &str = "-";

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    /// Sum of amounts in the reference month
    pub total_expenses: f64,
    /// Count of all records, regardless of date
    pub total_transactions: usize,
    /// Sum over the trailing week divided by 7
    pub avg_daily: f64,
    /// Highest-spending category in the reference month
    pub top_category: Option<String>,
}

impl SummaryStats {
    /// The top category name, or [`NO_CATEGORY`] when the month has no spending.
    #[must_use]
    pub fn top_category_label(&self) -> &str {
        self.top_category.as_deref().unwrap_or(NO_CATEGORY)
    }
}

/// One category's share of total spending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdownEntry {
    pub category: String,
    /// Summed amount across all records in this category
    pub amount: f64,
    /// Share of the grand total in percent, rounded to one decimal
    pub percentage: f64,
    /// Configured display color
    pub color: String,
}

/// Total spending on one day of the trailing week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub amount: f64,
    /// Short weekday name, e.g. `Mon`
    pub label: String,
}

/// The seven consecutive dates ending at `reference`, oldest first.
///
/// Days before the earliest representable date are skipped, so the window is only shorter than
/// seven days within a week of `NaiveDate::MIN`. Dates from [`parse_date`] never come that close.
///
/// [`parse_date`]: super::expense::parse_date
#[must_use]
pub fn trailing_week(reference: NaiveDate) -> Vec<NaiveDate> {
    (0..WEEK_DAYS)
        .rev()
        .filter_map(|offset| reference.checked_sub_days(Days::new(offset)))
        .collect()
}

fn in_month(date: NaiveDate, reference: NaiveDate) -> bool {
    date.year() == reference.year() && date.month() == reference.month()
}

/// Sums amounts per category, keeping categories in order of first appearance.
fn category_totals<'a>(records: impl IntoIterator<Item = &'a ExpenseRecord>) -> Vec<(&'a str, f64)> {
    let mut totals: Vec<(&str, f64)> = Vec::new();
    for record in records {
        match totals.iter_mut().find(|(name, _)| *name == record.category) {
            Some((_, total)) => *total += record.amount,
            None => totals.push((record.category.as_str(), record.amount)),
        }
    }
    totals
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Computes the headline statistics relative to `reference`.
///
/// When several categories tie for the highest monthly total, the one that first appeared
/// latest in the records wins.
#[must_use]
pub fn summary_stats(records: &[ExpenseRecord], reference: NaiveDate) -> SummaryStats {
    let month: Vec<&ExpenseRecord> = records
        .iter()
        .filter(|r| in_month(r.date, reference))
        .collect();
    let week = trailing_week(reference);

    let total_expenses = month.iter().map(|r| r.amount).sum();
    let week_total: f64 = records
        .iter()
        .filter(|r| week.contains(&r.date))
        .map(|r| r.amount)
        .sum();

    // Days without spending count as zero, so the divisor is always the window length.
    #[allow(clippy::cast_precision_loss)]
    let avg_daily = week_total / WEEK_DAYS as f64;

    let top_category = category_totals(month.iter().copied())
        .into_iter()
        .reduce(|best, candidate| if best.1 > candidate.1 { best } else { candidate })
        .map(|(name, _)| name.to_string());

    SummaryStats {
        total_expenses,
        total_transactions: records.len(),
        avg_daily,
        top_category,
    }
}

/// Groups all records by category, sorted by descending amount.
///
/// Categories without records are left out. Equal amounts keep their first-appearance order.
#[must_use]
pub fn category_breakdown(
    records: &[ExpenseRecord],
    categories: &CategorySet,
) -> Vec<CategoryBreakdownEntry> {
    let grand_total: f64 = records.iter().map(|r| r.amount).sum();

    let mut entries: Vec<CategoryBreakdownEntry> = category_totals(records)
        .into_iter()
        .map(|(name, amount)| CategoryBreakdownEntry {
            category: name.to_string(),
            amount,
            percentage: if grand_total > 0.0 {
                round_to_tenth(amount / grand_total * 100.0)
            } else {
                0.0
            },
            color: categories.color_of(name).to_string(),
        })
        .collect();

    entries.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    entries
}

/// Spending per day for the seven days ending at `reference`, oldest first.
#[must_use]
pub fn daily_series(records: &[ExpenseRecord], reference: NaiveDate) -> Vec<DailyPoint> {
    trailing_week(reference)
        .into_iter()
        .map(|date| DailyPoint {
            date,
            amount: records
                .iter()
                .filter(|r| r.date == date)
                .map(|r| r.amount)
                .sum(),
            label: date.format("%a").to_string(),
        })
        .collect()
}
