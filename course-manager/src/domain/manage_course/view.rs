//! What the course page shows for a given controller state.

use serde::Serialize;

use super::ManageCourseState;
use crate::domain::{Author, AuthorOption, Course, FieldErrors, author_options};

/// Props handed to the course form renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseFormView {
    pub course: Course,
    pub errors: FieldErrors,
    pub authors: Vec<AuthorOption>,
    pub saving: bool,
}

/// Rendered page: a spinner until authors are available, then the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PageView {
    Loading,
    Form(CourseFormView),
}

impl PageView {
    pub(super) fn render(state: &ManageCourseState, authors: &[Author]) -> Self {
        if authors.is_empty() {
            return Self::Loading;
        }
        Self::Form(CourseFormView {
            course: state.draft().clone(),
            errors: state.field_errors().clone(),
            authors: author_options(authors),
            saving: state.saving(),
        })
    }
}
