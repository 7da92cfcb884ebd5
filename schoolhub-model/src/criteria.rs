//! The user's current filter selection.

use crate::record::Category;
use serde::{Deserialize, Serialize};

/// Transient filter value, recomputed from UI input on every change.
///
/// Never persisted. The query is matched case-insensitively after trimming;
/// the category, when present and non-empty, must exactly match a record's
/// tag as stored. An empty-string category counts as "no category filter" —
/// that is what a reset `<select>` produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text search input, as typed.
    #[serde(default)]
    pub query: String,

    /// Selected category, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl FilterCriteria {
    /// No filtering: every record matches.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Sets the search text.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Sets the category pick.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<Category>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// The query as compared: trimmed and lower-cased.
    #[must_use]
    pub fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }

    /// The category filter actually in effect. Empty-string tags are
    /// treated as no selection.
    #[must_use]
    pub fn active_category(&self) -> Option<&Category> {
        self.category.as_ref().filter(|tag| !tag.is_empty())
    }

    /// Whether these criteria select every record.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.normalized_query().is_empty() && self.active_category().is_none()
    }
}
