//! UI binding for the "manage course" page.
//!
//! The binding plays the role a component framework would: it resolves the
//! route against the store to find the requested course, forwards form
//! events by input name, and re-derives the requested course after store
//! changes so the controller can re-seed its draft.

use std::sync::Arc;

use crate::domain::ports::{Navigator, Notifier, RecordStore};
use crate::domain::{
    CourseField, CourseRoute, ManageCourseController, ManageCourseState, MountLoads, PageView,
    RouteError, SubmitOutcome, UnknownCourseField,
};

/// The course edit page bound to one route.
pub struct ManageCoursePage<S, N, V> {
    route: CourseRoute,
    store: Arc<S>,
    controller: ManageCourseController<S, N, V>,
}

impl<S, N, V> ManageCoursePage<S, N, V>
where
    S: RecordStore + 'static,
    N: Notifier,
    V: Navigator,
{
    /// Open the page for `path` (`/course` or `/course/:id`).
    ///
    /// # Errors
    ///
    /// Returns [`RouteError`] when `path` is not a course page.
    pub fn open(
        path: &str,
        store: Arc<S>,
        notifier: Arc<N>,
        navigator: Arc<V>,
    ) -> Result<Self, RouteError> {
        let route = CourseRoute::parse(path)?;
        let requested = route.requested_course(&store.courses());
        let controller =
            ManageCourseController::new(Arc::clone(&store), notifier, navigator, requested);
        Ok(Self {
            route,
            store,
            controller,
        })
    }

    #[must_use]
    pub const fn route(&self) -> &CourseRoute {
        &self.route
    }

    #[must_use]
    pub const fn state(&self) -> &ManageCourseState {
        self.controller.state()
    }

    /// Show the page, requesting any missing collections.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn mount(&self) -> MountLoads {
        self.controller.on_mount()
    }

    /// Re-derive the requested course from the store.
    ///
    /// Call after the store changes. Returns whether the draft was re-seeded.
    pub fn sync_with_store(&mut self) -> bool {
        let requested = self.route.requested_course(&self.store.courses());
        self.controller.on_external_identity_change(requested)
    }

    /// Forward a form input change.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownCourseField`] when `name` is not an editable field;
    /// the draft is left untouched.
    pub fn handle_change(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), UnknownCourseField> {
        let field: CourseField = name.parse()?;
        self.controller.on_field_change(field, value);
        Ok(())
    }

    /// Submit the form.
    pub async fn handle_save(&mut self) -> SubmitOutcome {
        self.controller.on_submit().await
    }

    #[must_use]
    pub fn render(&self) -> PageView {
        self.controller.view()
    }
}

#[cfg(test)]
mod tests {
    //! Binding-level tests; the controller itself is covered in the domain.
    use super::*;
    use crate::domain::ports::{MockNavigator, MockNotifier, MockRecordStore};
    use crate::domain::{AuthorId, Course, CourseId};
    use rstest::rstest;

    type MockPage = ManageCoursePage<MockRecordStore, MockNotifier, MockNavigator>;

    fn clean_code() -> Course {
        Course {
            id: CourseId::new("clean-code"),
            title: "Clean Code: Writing Code for Humans".to_owned(),
            author_id: AuthorId::new("cory-house"),
            category: "Software Practices".to_owned(),
        }
    }

    fn open_with(path: &str, store: MockRecordStore) -> Result<MockPage, RouteError> {
        ManageCoursePage::open(
            path,
            Arc::new(store),
            Arc::new(MockNotifier::new()),
            Arc::new(MockNavigator::new()),
        )
    }

    #[rstest]
    fn open_rejects_foreign_paths() {
        let result = open_with("/authors", MockRecordStore::new());

        assert!(matches!(result, Err(RouteError::Unrecognised { .. })));
    }

    #[rstest]
    fn open_seeds_draft_from_loaded_collection() {
        let mut store = MockRecordStore::new();
        store.expect_courses().returning(|| vec![clean_code()]);

        let page = open_with("/course/clean-code", store).expect("course route");

        assert_eq!(page.state().draft(), &clean_code());
        assert_eq!(
            page.route(),
            &CourseRoute::Edit(CourseId::new("clean-code"))
        );
    }

    #[rstest]
    fn sync_reseeds_once_courses_arrive() {
        let mut store = MockRecordStore::new();
        let mut calls = 0_u8;
        store.expect_courses().returning(move || {
            calls += 1;
            if calls == 1 {
                Vec::new()
            } else {
                vec![clean_code()]
            }
        });
        let mut page = open_with("/course/clean-code", store).expect("course route");
        assert_eq!(page.state().draft(), &Course::empty());

        assert!(page.sync_with_store());
        assert_eq!(page.state().draft(), &clean_code());
        assert!(!page.sync_with_store(), "same identity keeps the draft");
    }

    #[rstest]
    #[case("title", "Refactoring")]
    #[case("authorId", "scott-allen")]
    #[case("category", "Craft")]
    fn handle_change_routes_by_input_name(#[case] name: &str, #[case] value: &str) {
        let mut store = MockRecordStore::new();
        store.expect_courses().returning(Vec::new);
        let mut page = open_with("/course", store).expect("course route");

        page.handle_change(name, value).expect("known field");

        let field: CourseField = name.parse().expect("known field");
        assert_eq!(page.state().draft().field(field), value);
    }

    #[rstest]
    fn handle_change_rejects_unknown_inputs() {
        let mut store = MockRecordStore::new();
        store.expect_courses().returning(Vec::new);
        let mut page = open_with("/course", store).expect("course route");

        let error = page.handle_change("id", "forged").expect_err("id is not editable");

        assert_eq!(error.to_string(), "unknown course field: id");
        assert_eq!(page.state().draft(), &Course::empty());
    }
}
