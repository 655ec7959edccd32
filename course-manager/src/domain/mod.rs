//! Domain records, rules and the course edit-page controller.
//!
//! Purpose: keep course management behaviour independent of any UI toolkit
//! or storage technology. Collaborators are reached only through the traits
//! in [`ports`].
//!
//! Public surface:
//! - Course / Author records and the editable [`CourseField`]s.
//! - [`validate_course`] and the [`FieldErrors`] map.
//! - [`CourseRoute`] for `/course/:id` paths.
//! - [`ManageCourseController`], the edit-page controller.

pub mod author;
pub mod course;
pub mod manage_course;
pub mod ports;
pub mod routing;
pub mod slug;
pub mod validation;

pub use self::author::{Author, AuthorId, AuthorOption, author_options};
pub use self::course::{Course, CourseField, CourseId, UnknownCourseField, get_course_by_id};
pub use self::manage_course::{
    COURSE_SAVED_MESSAGE, CourseFormView, ManageCourseController, ManageCourseState, MountLoads,
    PageView, SubmitOutcome,
};
pub use self::routing::{COURSES_PATH, CourseRoute, RouteError};
pub use self::validation::{
    FieldErrors, ON_SAVE_KEY, TITLE_MIN_CHARS, TITLE_TOO_SHORT, Validation, validate_course,
};
