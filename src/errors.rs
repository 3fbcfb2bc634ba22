//! Unified error types and result handling.
//!
//! Every engine error is a plain value returned to the caller. The front end decides how to
//! present it to the user; the engine itself never prints anything.

use thiserror::Error;

/// All errors produced by the expense tracker.
#[derive(Debug, Error)]
pub enum Error {
    /// An update referenced an expense id that is not in the store.
    #[error("Expense not found: {id}")]
    ExpenseNotFound {
        /// The id that was looked up
        id: u64,
    },

    /// The amount text was not a number greater than zero and at most one billion.
    #[error("Invalid amount '{input}': must be a number greater than zero and at most 1,000,000,000")]
    InvalidAmount {
        /// The raw amount text as entered
        input: String,
    },

    /// The category is not part of the configured category set.
    #[error("Unknown category '{name}'")]
    InvalidCategory {
        /// The rejected category name
        name: String,
    },

    /// The date text was not a valid `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The raw date text as entered
        input: String,
    },

    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong while loading or validating the configuration
        message: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
