//! Route parameters understood by the course pages.
//!
//! The edit page lives at `/course/:id`; `/course` without an id opens the
//! page for a new course. After a successful save the user is sent to
//! [`COURSES_PATH`].

use super::course::{Course, CourseId, get_course_by_id};

/// Path of the course listing page.
pub const COURSES_PATH: &str = "/courses";

const COURSE_PREFIX: &str = "/course";

/// Errors raised while parsing a course page path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("path `{path}` does not address a course page")]
    Unrecognised { path: String },
}

/// Which course the edit page was asked to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseRoute {
    /// `/course`: create a new course.
    New,
    /// `/course/:id`: edit an existing course.
    Edit(CourseId),
}

impl CourseRoute {
    /// Parse a path such as `/course/clean-code`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Unrecognised`] for paths outside `/course`, or
    /// with more than one segment after it.
    ///
    /// # Examples
    /// ```
    /// use course_manager::domain::{CourseId, CourseRoute};
    ///
    /// assert_eq!(CourseRoute::parse("/course"), Ok(CourseRoute::New));
    /// assert_eq!(
    ///     CourseRoute::parse("/course/clean-code"),
    ///     Ok(CourseRoute::Edit(CourseId::new("clean-code")))
    /// );
    /// ```
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let unrecognised = || RouteError::Unrecognised {
            path: path.to_owned(),
        };
        let rest = path.strip_prefix(COURSE_PREFIX).ok_or_else(unrecognised)?;
        if rest.is_empty() || rest == "/" {
            return Ok(Self::New);
        }
        let id = rest.strip_prefix('/').ok_or_else(unrecognised)?;
        let id = id.strip_suffix('/').unwrap_or(id);
        if id.contains('/') {
            return Err(unrecognised());
        }
        if id.is_empty() {
            return Ok(Self::New);
        }
        Ok(Self::Edit(CourseId::new(id)))
    }

    /// The id segment, if the route addresses an existing course.
    #[must_use]
    pub const fn course_id(&self) -> Option<&CourseId> {
        match self {
            Self::New => None,
            Self::Edit(id) => Some(id),
        }
    }

    /// Resolve the course the page should edit given the loaded collection.
    ///
    /// Until courses are loaded, or when the route carries no id, the page
    /// edits the new-record template.
    #[must_use]
    pub fn requested_course(&self, courses: &[Course]) -> Course {
        match self.course_id() {
            Some(id) if !courses.is_empty() => get_course_by_id(courses, id),
            _ => Course::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::CourseField;
    use rstest::rstest;

    #[rstest]
    #[case("/course")]
    #[case("/course/")]
    fn bare_course_path_is_new(#[case] path: &str) {
        assert_eq!(CourseRoute::parse(path), Ok(CourseRoute::New));
    }

    #[rstest]
    #[case("/course/clean-code", "clean-code")]
    #[case("/course/clean-code/", "clean-code")]
    fn id_segment_is_extracted(#[case] path: &str, #[case] id: &str) {
        assert_eq!(
            CourseRoute::parse(path),
            Ok(CourseRoute::Edit(CourseId::new(id)))
        );
    }

    #[rstest]
    #[case("/courses")]
    #[case("/authors/cory-house")]
    #[case("/course/a/b")]
    #[case("")]
    fn foreign_paths_are_rejected(#[case] path: &str) {
        assert_eq!(
            CourseRoute::parse(path),
            Err(RouteError::Unrecognised {
                path: path.to_owned()
            })
        );
    }

    #[rstest]
    fn requested_course_waits_for_loaded_collection() {
        let route = CourseRoute::Edit(CourseId::new("clean-code"));
        let loaded = vec![Course {
            id: CourseId::new("clean-code"),
            ..Course::empty().with_field(CourseField::Title, "Clean Code")
        }];

        assert_eq!(route.requested_course(&[]), Course::empty());
        assert_eq!(route.requested_course(&loaded).title, "Clean Code");
        assert_eq!(CourseRoute::New.requested_course(&loaded), Course::empty());
    }
}
