//! Category and text search over expense records.

use super::expense::ExpenseRecord;

/// Selects the records matching both predicates, in their original order.
///
/// * `category` - exact, case-sensitive category match
/// * `search` - case-insensitive substring of the description or the category
///
/// A missing or empty predicate matches everything.
#[must_use]
pub fn filter<'a>(
    records: &'a [ExpenseRecord],
    category: Option<&str>,
    search: Option<&str>,
) -> Vec<&'a ExpenseRecord> {
    let category = category.filter(|c| !c.is_empty());
    let needle = search.filter(|s| !s.is_empty()).map(str::to_lowercase);

    records
        .iter()
        .filter(|r| category.is_none_or(|c| r.category == c))
        .filter(|r| {
            needle.as_deref().is_none_or(|needle| {
                r.description.to_lowercase().contains(needle)
                    || r.category.to_lowercase().contains(needle)
            })
        })
        .collect()
}
