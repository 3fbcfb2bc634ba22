//! Shared test utilities for the expense tracker.
//!
//! This module provides common helpers for building dates, drafts and records, plus a tracker
//! pre-populated with a small, well-known data set.

#![allow(clippy::unwrap_used)]

use crate::core::{ExpenseDetails, ExpenseDraft, ExpenseId, ExpenseRecord, ExpenseTracker};
use chrono::NaiveDate;

/// Builds a date, panicking on invalid input. Test-only.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Builds a raw draft as a form would submit it.
#[must_use]
pub fn draft(amount: &str, category: &str, description: &str, date: &str) -> ExpenseDraft {
    ExpenseDraft::new(amount, category, description, date)
}

/// Builds already-validated details with an empty description.
#[must_use]
pub fn details(amount: f64, category: &str, date: NaiveDate) -> ExpenseDetails {
    ExpenseDetails {
        amount,
        category: category.to_string(),
        description: String::new(),
        date,
    }
}

/// Builds a stored record directly, bypassing the store.
#[must_use]
pub fn record(id: ExpenseId, amount: f64, category: &str, date: NaiveDate) -> ExpenseRecord {
    ExpenseRecord {
        id,
        amount,
        category: category.to_string(),
        description: String::new(),
        date,
    }
}

/// A tracker with the default categories and four expenses:
///
/// | id | amount | category | description      | date       |
/// |----|--------|----------|------------------|------------|
/// | 1  | 50     | Food     | Lunch with team  | 2024-05-01 |
/// | 2  | 30     | Food     | Groceries        | 2024-05-14 |
/// | 3  | 12.50  | Travel   | Taxi             | 2024-05-12 |
/// | 4  | 60     | Housing  | Plumber          | 2024-04-20 |
#[must_use]
pub fn sample_tracker() -> ExpenseTracker {
    let mut tracker = ExpenseTracker::default();
    for d in [
        draft("50", "Food", "Lunch with team", "2024-05-01"),
        draft("30", "Food", "Groceries", "2024-05-14"),
        draft("12.50", "Travel", "Taxi", "2024-05-12"),
        draft("60", "Housing", "Plumber", "2024-04-20"),
    ] {
        tracker.create_expense(&d).unwrap();
    }
    tracker
}
