//! Core business logic - framework-agnostic expense storage, aggregation and search.
//!
//! Nothing in here performs I/O or knows how results are displayed. Front ends construct an
//! [`ExpenseTracker`], call into it, and render what comes back.

/// Expense record and draft types, input coercion
pub mod expense;
/// Category and text search
pub mod filter;
/// Textual spending insights
pub mod insights;
/// Display formatting helpers
pub mod report;
/// Ordered record storage with id assignment
pub mod store;
/// Summary statistics, category breakdown and daily series
pub mod summary;
/// The tracker facade used by front ends
pub mod tracker;

pub use expense::{ExpenseDetails, ExpenseDraft, ExpenseId, ExpenseRecord};
pub use insights::{Insight, InsightKind};
pub use store::RecordStore;
pub use summary::{CategoryBreakdownEntry, DailyPoint, SummaryStats};
pub use tracker::ExpenseTracker;
