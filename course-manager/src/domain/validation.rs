//! Course validation and the field-error map shown next to form inputs.
//!
//! Validation is a list of independent rules. Each rule inspects the draft and
//! may contribute one message keyed by field name; the draft is valid only
//! when no rule contributes anything.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::course::{Course, CourseField};

/// Minimum number of characters a course title must contain.
pub const TITLE_MIN_CHARS: usize = 2;

/// Message reported when the title is shorter than [`TITLE_MIN_CHARS`].
pub const TITLE_TOO_SHORT: &str = "Title must be at least 2 characters.";

/// Reserved key carrying the failure reason of the last save attempt.
pub const ON_SAVE_KEY: &str = "onSave";

/// Mapping from field name to a human-readable message.
///
/// Maps are built fresh for every validation or save attempt and replace the
/// previous map wholesale.
///
/// # Examples
/// ```
/// use course_manager::domain::FieldErrors;
///
/// let errors = FieldErrors::on_save("network error");
/// assert_eq!(errors.get("onSave"), Some("network error"));
/// assert_eq!(errors.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map holding only the save failure reason.
    pub fn on_save(reason: impl Into<String>) -> Self {
        Self::new().with(ON_SAVE_KEY, reason)
    }

    /// Return this map with one more entry.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.0.insert(key.into(), message.into());
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, message)| (key.as_str(), message.as_str()))
    }
}

/// Result of running every validation rule against a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub is_valid: bool,
    pub errors: FieldErrors,
}

type Rule = fn(&Course) -> Option<(CourseField, &'static str)>;

const RULES: &[Rule] = &[title_has_minimum_length];

fn title_has_minimum_length(course: &Course) -> Option<(CourseField, &'static str)> {
    (course.title.chars().count() < TITLE_MIN_CHARS).then_some((CourseField::Title, TITLE_TOO_SHORT))
}

/// Validate a course draft.
///
/// Total and side-effect free: every draft yields a [`Validation`].
///
/// # Examples
/// ```
/// use course_manager::domain::{validate_course, Course, CourseField};
///
/// let outcome = validate_course(&Course::empty().with_field(CourseField::Title, "A"));
/// assert!(!outcome.is_valid);
/// assert_eq!(
///     outcome.errors.get("title"),
///     Some("Title must be at least 2 characters.")
/// );
/// ```
#[must_use]
pub fn validate_course(course: &Course) -> Validation {
    let errors = RULES
        .iter()
        .filter_map(|rule| rule(course))
        .fold(FieldErrors::new(), |errors, (field, message)| {
            errors.with(field.name(), message)
        });

    Validation {
        is_valid: errors.is_empty(),
        errors,
    }
}
