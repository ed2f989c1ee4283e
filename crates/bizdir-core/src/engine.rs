//! Pure filter/sort transformation from (records, criteria) to an
//! ordered result view.

use std::cmp::Ordering;

use crate::types::{Criteria, Record, SortKey};
use crate::view::ResultView;

/// Applies `criteria` to `records` and returns the ordered matches.
///
/// Pure and idempotent: identical inputs produce identical output, and
/// the input slice is never touched. All sorting is stable, so records
/// that compare equal keep their relative store order.
pub fn apply<'a>(records: &'a [Record], criteria: &Criteria) -> ResultView<'a> {
    let mut matches: Vec<&Record> = records
        .iter()
        .filter(|record| matches(record, criteria))
        .collect();
    match criteria.sort_key {
        SortKey::Relevance => {}
        SortKey::RatingDesc => matches.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::RatingAsc => matches.sort_by(|a, b| a.rating.total_cmp(&b.rating)),
        SortKey::NameAsc => matches.sort_by(|a, b| name_cmp(a, b)),
        SortKey::NameDesc => matches.sort_by(|a, b| name_cmp(b, a)),
    }
    tracing::debug!(
        total = records.len(),
        matched = matches.len(),
        sort = criteria.sort_key.label(),
        "recomputed result view"
    );
    ResultView::new(matches)
}

/// Conjunction of the six filter predicates, cheapest checks first.
/// The predicates are independent, so the order never changes the result.
pub fn matches(record: &Record, criteria: &Criteria) -> bool {
    if criteria.premium_only && !record.premium {
        return false;
    }
    if record.rating < criteria.min_rating {
        return false;
    }
    if let Some(size) = criteria.size.as_deref() {
        if !size.is_empty() && record.size != size {
            return false;
        }
    }
    if let Some(location) = criteria.location.as_deref() {
        if !location.is_empty() && record.location != location {
            return false;
        }
    }
    if !criteria.categories.is_empty() && !criteria.categories.contains(&record.category) {
        return false;
    }
    if !criteria.search_text.is_empty() && !matches_search(record, &criteria.search_text) {
        return false;
    }
    true
}

/// Case-insensitive substring containment over the record's searchable
/// text: name, category, and location, space-joined.
fn matches_search(record: &Record, needle: &str) -> bool {
    let haystack = format!(
        "{} {} {}",
        record.name, record.category, record.location
    )
    .to_lowercase();
    haystack.contains(needle)
}

/// Case-insensitive lexicographic name ordering. Unicode lower-casing
/// stands in for locale collation; ties fall through to the stable sort.
fn name_cmp(a: &Record, b: &Record) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}
