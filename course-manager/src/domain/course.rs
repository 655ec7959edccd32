//! Course records and the editable course fields.
//!
//! A [`Course`] is either persisted (non-empty [`CourseId`]) or a new record
//! awaiting its first save. The record store assigns identifiers; nothing in
//! the domain mints them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::author::AuthorId;

/// Store-assigned course identifier.
///
/// The empty identifier marks a record that has not been persisted yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    /// Wrap an identifier issued by the record store.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Return `true` when the store has not assigned an identifier yet.
    #[must_use]
    pub fn is_unassigned(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A course record as held by the record store and edited by the page.
///
/// ## Invariants
/// - `id` is empty until the store accepts the record for the first time.
///
/// # Examples
/// ```
/// use course_manager::domain::{Course, CourseField};
///
/// let draft = Course::empty().with_field(CourseField::Title, "Clean Code");
/// assert!(draft.id.is_unassigned());
/// assert_eq!(draft.title, "Clean Code");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(default)]
    pub id: CourseId,
    pub title: String,
    #[serde(default)]
    pub author_id: AuthorId,
    #[serde(default)]
    pub category: String,
}

impl Course {
    /// The blank template used when creating a new course.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Return a copy of this record with exactly one field replaced.
    #[must_use]
    pub fn with_field(&self, field: CourseField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            CourseField::Title => next.title = value,
            CourseField::AuthorId => next.author_id = AuthorId::new(value),
            CourseField::Category => next.category = value,
        }
        next
    }

    /// Read the current value of an editable field.
    #[must_use]
    pub fn field(&self, field: CourseField) -> &str {
        match field {
            CourseField::Title => self.title.as_str(),
            CourseField::AuthorId => self.author_id.as_str(),
            CourseField::Category => self.category.as_str(),
        }
    }
}

/// Look up a course by identifier.
///
/// Returns the new-record template when no course matches, so callers always
/// receive something they can seed a draft from.
#[must_use]
pub fn get_course_by_id(courses: &[Course], id: &CourseId) -> Course {
    courses
        .iter()
        .find(|course| &course.id == id)
        .cloned()
        .unwrap_or_default()
}

/// Fields of a [`Course`] that the edit form may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CourseField {
    Title,
    AuthorId,
    Category,
}

impl CourseField {
    /// Every editable field in form order.
    pub const ALL: [Self; 3] = [Self::Title, Self::AuthorId, Self::Category];

    /// Input name used by the form and as the key in field-error maps.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::AuthorId => "authorId",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for CourseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raised when a form input name does not map to an editable course field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown course field: {name}")]
pub struct UnknownCourseField {
    pub name: String,
}

impl FromStr for CourseField {
    type Err = UnknownCourseField;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == value)
            .ok_or_else(|| UnknownCourseField {
                name: value.to_owned(),
            })
    }
}
