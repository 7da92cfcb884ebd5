//! Directory records and their category tags.

use schoolhub_types::RecordId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A school's category tag.
///
/// The set is open-ended: admins can introduce new tags, so this is a thin
/// string wrapper rather than a closed enum. Matching is exact and
/// case-sensitive, as stored. [`Category::KNOWN`] lists the tags the
/// directory ships with, for form validation and reporting.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// The tags the directory ships with.
    pub const KNOWN: [&'static str; 6] = [
        "Kindergarten",
        "Nursery",
        "Primary",
        "Secondary",
        "Technical",
        "University",
    ];

    /// Creates a category from a tag string.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Returns the tag string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is one of the shipped tags.
    #[must_use]
    pub fn is_known(&self) -> bool {
        Self::KNOWN.contains(&self.0.as_str())
    }

    /// Whether the tag is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(tag: &str) -> Self {
        Self(tag.to_owned())
    }
}

impl From<String> for Category {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

/// One school directory listing.
///
/// Absent numeric fields deserialize to 0 rather than being omitted, and
/// absent text fields deserialize to the empty string, so a record parsed
/// from a sparse payload is always fully populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolRecord {
    /// Opaque identifier, unique within a collection and stable for the
    /// record's lifetime.
    pub id: RecordId,

    /// Display name.
    pub name: String,

    /// Free-text location, conventionally "City, Country".
    pub location: String,

    /// Category tag.
    pub category: Category,

    /// Enrolled student count.
    #[serde(default)]
    pub students: u32,

    /// Year the school was established, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub established: Option<i32>,

    /// Free-text description shown on the listing card.
    #[serde(default)]
    pub description: String,

    /// Program names offered, in display order.
    #[serde(default)]
    pub programs: Vec<String>,
}

impl SchoolRecord {
    /// Creates a record with a fresh ID and defaulted optional fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        category: impl Into<Category>,
    ) -> Self {
        Self {
            id: RecordId::new(),
            name: name.into(),
            location: location.into(),
            category: category.into(),
            students: 0,
            established: None,
            description: String::new(),
            programs: Vec::new(),
        }
    }

    /// Replaces the generated ID with an existing one.
    ///
    /// For records whose identity predates this construction: seed data,
    /// or an edit form resubmitting a record it was shown.
    #[must_use]
    pub fn with_id(mut self, id: RecordId) -> Self {
        self.id = id;
        self
    }

    /// Sets the student count.
    #[must_use]
    pub fn with_students(mut self, students: u32) -> Self {
        self.students = students;
        self
    }

    /// Sets the establishment year.
    #[must_use]
    pub fn with_established(mut self, year: i32) -> Self {
        self.established = Some(year);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the program list.
    #[must_use]
    pub fn with_programs<I, S>(mut self, programs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.programs = programs.into_iter().map(Into::into).collect();
        self
    }
}
