//! Record store - the single owner of all expense records.
//!
//! Records are kept in insertion order. Ids come from a counter that only ever moves forward,
//! so an id is never handed out twice even after the record holding it is removed.

use super::expense::{ExpenseDetails, ExpenseId, ExpenseRecord};
use crate::errors::{Error, Result};

const FIRST_ID: ExpenseId = 1;

/// Ordered collection of expense records plus the next-id counter.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<ExpenseRecord>,
    next_id: ExpenseId,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    /// Creates an empty store whose first record will get id 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: FIRST_ID,
        }
    }

    /// Appends a new record with the next id and returns a copy of it.
    pub fn create(&mut self, details: ExpenseDetails) -> ExpenseRecord {
        let id = self.next_id;
        self.next_id += 1;

        let record = ExpenseRecord {
            id,
            amount: details.amount,
            category: details.category,
            description: details.description,
            date: details.date,
        };
        self.records.push(record.clone());
        record
    }

    /// Replaces every field except `id` of the record with the given id.
    ///
    /// The record keeps its position in insertion order.
    pub fn update(&mut self, id: ExpenseId, details: ExpenseDetails) -> Result<ExpenseRecord> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(Error::ExpenseNotFound { id })?;

        record.amount = details.amount;
        record.category = details.category;
        record.description = details.description;
        record.date = details.date;
        Ok(record.clone())
    }

    /// Removes the record with the given id. Returns whether anything was removed.
    pub fn remove(&mut self, id: ExpenseId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: ExpenseId) -> Option<&ExpenseRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// All records in insertion order.
    #[must_use]
    pub fn all(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// The id the next created record will receive.
    #[must_use]
    pub const fn next_id(&self) -> ExpenseId {
        self.next_id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{date, details};

    #[test]
    fn test_create_assigns_increasing_ids() {
        let mut store = RecordStore::new();
        let first = store.create(details(10.0, "Food", date(2024, 5, 1)));
        let second = store.create(details(20.0, "Travel", date(2024, 5, 2)));

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.next_id(), 3);
        assert_eq!(store.all(), &[first, second]);
    }

    #[test]
    fn test_ids_are_never_reused_after_delete() {
        let mut store = RecordStore::new();
        let mut seen = Vec::new();

        for round in 0..5 {
            let record = store.create(details(1.0, "Food", date(2024, 5, 1)));
            seen.push(record.id);
            if round % 2 == 0 {
                assert!(store.remove(record.id));
            }
        }

        assert!(seen.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = RecordStore::new();
        let record = store.create(details(10.0, "Food", date(2024, 5, 1)));
        store.create(details(5.0, "Food", date(2024, 5, 1)));

        assert!(store.remove(record.id));
        assert_eq!(store.len(), 1);
        assert!(!store.remove(record.id));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = RecordStore::new();
        assert!(!store.remove(42));
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_preserves_id_and_position() {
        let mut store = RecordStore::new();
        store.create(details(10.0, "Food", date(2024, 5, 1)));
        let target = store.create(details(20.0, "Food", date(2024, 5, 2)));
        store.create(details(30.0, "Food", date(2024, 5, 3)));

        let mut replacement = details(99.5, "Housing", date(2024, 4, 30));
        replacement.description = "rent top-up".to_string();
        let updated = store.update(target.id, replacement).unwrap();

        assert_eq!(updated.id, target.id);
        assert_eq!(updated.amount, 99.5);
        assert_eq!(updated.category, "Housing");
        assert_eq!(updated.description, "rent top-up");
        assert_eq!(updated.date, date(2024, 4, 30));
        assert_eq!(store.all()[1], updated);
        assert_eq!(store.next_id(), 4);
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let mut store = RecordStore::new();
        let result = store.update(7, details(1.0, "Food", date(2024, 5, 1)));
        assert!(matches!(result, Err(Error::ExpenseNotFound { id: 7 })));
    }

    #[test]
    fn test_get() {
        let mut store = RecordStore::new();
        let record = store.create(details(10.0, "Food", date(2024, 5, 1)));
        assert_eq!(store.get(record.id), Some(&record));
        assert_eq!(store.get(record.id + 1), None);
    }
}
