//! The filter engine: derives the visible subset of a collection.
//!
//! Pure and total. Runs to completion synchronously inside whatever event
//! handler invoked it, and never mutates its input.

use crate::criteria::FilterCriteria;
use crate::record::{Category, SchoolRecord};

/// Selects the records matching `criteria`, preserving input order.
///
/// A record matches when the category filter is absent or equal to the
/// record's tag, AND the query is empty or a substring of the lower-cased
/// name, location, or description. The result is a new sequence; no sorting
/// is applied, and an empty input yields an empty output.
#[must_use]
pub fn apply(records: &[SchoolRecord], criteria: &FilterCriteria) -> Vec<SchoolRecord> {
    let query = criteria.normalized_query();
    let category = criteria.active_category();

    records
        .iter()
        .filter(|record| matches(record, category, &query))
        .cloned()
        .collect()
}

/// One record against one (pre-normalized) criteria pair.
fn matches(record: &SchoolRecord, category: Option<&Category>, query: &str) -> bool {
    if let Some(tag) = category {
        if record.category != *tag {
            return false;
        }
    }

    if query.is_empty() {
        return true;
    }

    record.name.to_lowercase().contains(query)
        || record.location.to_lowercase().contains(query)
        || record.description.to_lowercase().contains(query)
}
