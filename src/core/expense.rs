//! Expense record types and input coercion.
//!
//! An [`ExpenseDraft`] is what the user typed: every field is raw text. Turning a draft into
//! [`ExpenseDetails`] parses the amount and date and checks the category against the configured
//! set, so that the store only ever holds well-formed records.

use crate::{
    config::CategorySet,
    errors::{Error, Result},
};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Identifier assigned by the store. Never reused, even after deletion.
pub type ExpenseId = u64;

/// Date format used for every date that enters or leaves the engine.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A stored expense transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Store-assigned identifier
    pub id: ExpenseId,
    /// Amount spent, always finite and greater than zero
    pub amount: f64,
    /// One of the configured category names
    pub category: String,
    /// Free text, may be empty
    pub description: String,
    /// Calendar date of the expense
    pub date: NaiveDate,
}

/// The user-editable fields of an expense, already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDetails {
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

/// Raw form input for creating or editing an expense.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    /// Amount as typed, e.g. `"12.50"`
    pub amount: String,
    pub category: String,
    pub description: String,
    /// Date as typed, `YYYY-MM-DD`
    pub date: String,
}

impl ExpenseDraft {
    /// Creates a draft from raw field values.
    pub fn new(
        amount: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            category: category.into(),
            description: description.into(),
            date: date.into(),
        }
    }

    /// Validates the draft against `categories`.
    ///
    /// Fields are checked in form order: amount, category, date. The description is passed
    /// through unchanged.
    pub fn validate(&self, categories: &CategorySet) -> Result<ExpenseDetails> {
        let amount = parse_amount(&self.amount)?;
        if !categories.contains(&self.category) {
            return Err(Error::InvalidCategory {
                name: self.category.clone(),
            });
        }
        let date = parse_date(&self.date)?;

        Ok(ExpenseDetails {
            amount,
            category: self.category.clone(),
            description: self.description.clone(),
            date,
        })
    }
}

impl From<&ExpenseRecord> for ExpenseDraft {
    /// Prefills an edit form from a stored record.
    fn from(record: &ExpenseRecord) -> Self {
        Self {
            amount: record.amount.to_string(),
            category: record.category.clone(),
            description: record.description.clone(),
            date: record.date.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Largest amount a single expense may carry. Keeps every sum over the store finite.
pub const MAX_AMOUNT: f64 = 1_000_000_000.0;

/// Calendar years accepted in date text: four-digit ISO years only.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

/// Parses amount text into a finite, strictly positive value no larger than [`MAX_AMOUNT`].
///
/// Surrounding whitespace is ignored. Anything else that is not a plain decimal number,
/// including `NaN`, infinities, zero and negative values, is rejected.
pub fn parse_amount(input: &str) -> Result<f64> {
    let invalid = || Error::InvalidAmount {
        input: input.to_string(),
    };

    let amount: f64 = input.trim().parse().map_err(|_| invalid())?;
    if !amount.is_finite() || amount <= 0.0 || amount > MAX_AMOUNT {
        return Err(invalid());
    }
    Ok(amount)
}

/// Parses an ISO `YYYY-MM-DD` date with a year between 1 and 9999.
///
/// Dates in that range always have a full week before them, which the weekly window relies on.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let invalid = || Error::InvalidDate {
        input: input.to_string(),
    };

    let date = NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| invalid())?;
    if !YEAR_RANGE.contains(&date.year()) {
        return Err(invalid());
    }
    Ok(date)
}
