//! The expense tracker - the one object a front end talks to.
//!
//! `ExpenseTracker` owns the record store and the category set. Mutations go through
//! [`ExpenseDraft::validate`] before they reach the store, and every query recomputes its
//! result from the current records. The reference date for month and week windows is always
//! supplied by the caller, so the tracker never reads the clock.

use super::{
    expense::{ExpenseDraft, ExpenseId, ExpenseRecord},
    filter,
    insights::{self, Insight},
    store::RecordStore,
    summary::{self, CategoryBreakdownEntry, DailyPoint, SummaryStats},
};
use crate::{config::CategorySet, errors::Result};
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// In-memory expense tracker for a single session.
#[derive(Debug, Clone, Default)]
pub struct ExpenseTracker {
    store: RecordStore,
    categories: CategorySet,
}

impl ExpenseTracker {
    /// Creates an empty tracker that accepts the given categories.
    #[must_use]
    pub fn new(categories: CategorySet) -> Self {
        Self {
            store: RecordStore::new(),
            categories,
        }
    }

    /// The categories expenses may be filed under.
    #[must_use]
    pub const fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// Validates `draft` and stores it as a new expense.
    ///
    /// # Errors
    /// `InvalidAmount`, `InvalidCategory` or `InvalidDate` when the draft is malformed; the
    /// store is left untouched in that case.
    pub fn create_expense(&mut self, draft: &ExpenseDraft) -> Result<ExpenseRecord> {
        let details = draft
            .validate(&self.categories)
            .inspect_err(|e| warn!("Rejected new expense: {e}"))?;
        let record = self.store.create(details);
        info!(id = record.id, amount = record.amount, category = %record.category, "Created expense");
        Ok(record)
    }

    /// Validates `draft` and replaces the fields of expense `id` with it.
    ///
    /// # Errors
    /// `ExpenseNotFound` when no expense has this id, or a validation error for a malformed draft.
    pub fn update_expense(&mut self, id: ExpenseId, draft: &ExpenseDraft) -> Result<ExpenseRecord> {
        let details = draft
            .validate(&self.categories)
            .inspect_err(|e| warn!(id, "Rejected expense update: {e}"))?;
        let record = self
            .store
            .update(id, details)
            .inspect_err(|e| warn!("{e}"))?;
        info!(id, "Updated expense");
        Ok(record)
    }

    /// Deletes expense `id`. Returns false if there was nothing to delete.
    pub fn delete_expense(&mut self, id: ExpenseId) -> bool {
        let removed = self.store.remove(id);
        if removed {
            info!(id, "Deleted expense");
        } else {
            debug!(id, "Delete requested for unknown expense");
        }
        removed
    }

    /// Looks up a single expense, e.g. to prefill an edit form.
    #[must_use]
    pub fn get_expense(&self, id: ExpenseId) -> Option<&ExpenseRecord> {
        self.store.get(id)
    }

    /// All expenses in the order they were added.
    #[must_use]
    pub fn list_expenses(&self) -> &[ExpenseRecord] {
        self.store.all()
    }

    /// Whether any expense has been recorded, for empty-state rendering.
    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.store.is_empty()
    }

    /// Headline numbers relative to `reference`.
    #[must_use]
    pub fn summary_stats(&self, reference: NaiveDate) -> SummaryStats {
        debug!(%reference, "Computing summary stats");
        summary::summary_stats(self.store.all(), reference)
    }

    /// Spending per category over all expenses, largest first.
    #[must_use]
    pub fn category_breakdown(&self) -> Vec<CategoryBreakdownEntry> {
        debug!("Computing category breakdown");
        summary::category_breakdown(self.store.all(), &self.categories)
    }

    /// Spending per day for the week ending at `reference`.
    #[must_use]
    pub fn daily_series(&self, reference: NaiveDate) -> Vec<DailyPoint> {
        debug!(%reference, "Computing daily series");
        summary::daily_series(self.store.all(), reference)
    }

    /// Expenses matching an optional category and an optional search term.
    #[must_use]
    pub fn filter_expenses(
        &self,
        category: Option<&str>,
        search: Option<&str>,
    ) -> Vec<&ExpenseRecord> {
        debug!(?category, ?search, "Filtering expenses");
        filter::filter(self.store.all(), category, search)
    }

    /// Spending insights relative to `reference`. Empty when nothing has been recorded.
    #[must_use]
    pub fn insights(&self, reference: NaiveDate) -> Vec<Insight> {
        if !self.has_data() {
            return Vec::new();
        }
        insights::derive_insights(&self.summary_stats(reference), &self.category_breakdown())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{errors::Error, test_utils::*};

    #[test]
    fn test_create_coerces_amount_text() {
        let mut tracker = ExpenseTracker::default();
        let record = tracker
            .create_expense(&draft("12.50", "Travel", "taxi", "2024-05-01"))
            .unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.amount, 12.5);
        assert_eq!(record.category, "Travel");
        assert_eq!(record.description, "taxi");
        assert_eq!(record.date, date(2024, 5, 1));
        assert_eq!(tracker.list_expenses(), &[record]);
    }

    #[test]
    fn test_invalid_drafts_leave_store_untouched() {
        let mut tracker = ExpenseTracker::default();

        let bad_amount = tracker.create_expense(&draft("twelve", "Food", "", "2024-05-01"));
        assert!(matches!(bad_amount, Err(Error::InvalidAmount { .. })));

        let bad_category = tracker.create_expense(&draft("12", "Pets", "", "2024-05-01"));
        assert!(matches!(bad_category, Err(Error::InvalidCategory { .. })));

        let bad_date = tracker.create_expense(&draft("12", "Food", "", "2024-13-01"));
        assert!(matches!(bad_date, Err(Error::InvalidDate { .. })));

        assert!(!tracker.has_data());
        // A rejected draft does not consume an id
        let record = tracker
            .create_expense(&draft("1", "Food", "", "2024-05-01"))
            .unwrap();
        assert_eq!(record.id, 1);
    }

    #[test]
    fn test_huge_amounts_are_rejected_and_totals_stay_finite() {
        let mut tracker = ExpenseTracker::default();
        for category in ["Food", "Travel"] {
            let huge = tracker.create_expense(&draft("1e308", category, "", "2024-05-01"));
            assert!(matches!(huge, Err(Error::InvalidAmount { .. })));
            tracker
                .create_expense(&draft("1000000000", category, "", "2024-05-01"))
                .unwrap();
        }

        let stats = tracker.summary_stats(date(2024, 5, 15));
        assert_eq!(stats.total_expenses, 2_000_000_000.0);

        let breakdown = tracker.category_breakdown();
        let percentages: f64 = breakdown.iter().map(|e| e.percentage).sum();
        assert_eq!(breakdown.len(), 2);
        assert_eq!(percentages, 100.0);
    }

    #[test]
    fn test_update_and_not_found() {
        let mut tracker = sample_tracker();
        let updated = tracker
            .update_expense(2, &draft("99", "Housing", "deposit", "2024-05-10"))
            .unwrap();
        assert_eq!(updated.id, 2);
        assert_eq!(updated.amount, 99.0);
        assert_eq!(tracker.get_expense(2), Some(&updated));

        let missing = tracker.update_expense(42, &draft("1", "Food", "", "2024-05-10"));
        assert!(matches!(missing, Err(Error::ExpenseNotFound { id: 42 })));
    }

    #[test]
    fn test_update_with_invalid_draft_keeps_record() {
        let mut tracker = sample_tracker();
        let before = tracker.get_expense(1).cloned().unwrap();

        let result = tracker.update_expense(1, &draft("-5", "Food", "", "2024-05-10"));
        assert!(matches!(result, Err(Error::InvalidAmount { .. })));
        assert_eq!(tracker.get_expense(1), Some(&before));
    }

    #[test]
    fn test_delete_twice() {
        let mut tracker = sample_tracker();
        let count = tracker.list_expenses().len();

        assert!(tracker.delete_expense(1));
        assert_eq!(tracker.list_expenses().len(), count - 1);
        assert!(!tracker.delete_expense(1));
        assert_eq!(tracker.list_expenses().len(), count - 1);
    }

    #[test]
    fn test_empty_tracker_queries() {
        let tracker = ExpenseTracker::default();
        let stats = tracker.summary_stats(date(2024, 5, 15));

        assert_eq!(stats.total_expenses, 0.0);
        assert_eq!(stats.total_transactions, 0);
        assert_eq!(stats.avg_daily, 0.0);
        assert_eq!(stats.top_category_label(), "-");
        assert!(tracker.category_breakdown().is_empty());
        assert_eq!(tracker.daily_series(date(2024, 5, 15)).len(), 7);
        assert!(tracker.filter_expenses(None, None).is_empty());
        assert!(tracker.insights(date(2024, 5, 15)).is_empty());
    }

    #[test]
    fn test_queries_reflect_mutations() {
        let mut tracker = sample_tracker();
        let reference = date(2024, 5, 15);
        let before = tracker.summary_stats(reference).total_expenses;

        tracker
            .create_expense(&draft("20", "Food", "", "2024-05-15"))
            .unwrap();
        let after = tracker.summary_stats(reference).total_expenses;
        assert_eq!(after, before + 20.0);
        assert_eq!(tracker.daily_series(reference)[6].amount, 20.0);
    }

    #[test]
    fn test_filter_expenses_through_tracker() {
        let tracker = sample_tracker();
        assert!(tracker.filter_expenses(Some("Food"), Some("tax")).is_empty());

        let taxi: Vec<u64> = tracker
            .filter_expenses(None, Some("Taxi"))
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(taxi, vec![3]);
    }

    #[test]
    fn test_insights_for_sample_data() {
        let tracker = sample_tracker();
        let insights = tracker.insights(date(2024, 5, 15));
        assert_eq!(insights.len(), 3);
        assert!(insights[0].description.contains("Food"));
    }
}
