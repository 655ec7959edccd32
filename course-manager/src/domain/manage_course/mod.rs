//! Edit-page controller for a single course.
//!
//! The controller owns a draft copy of the course being edited and mediates
//! between the record store and the form. It holds no UI framework state;
//! a binding layer calls the lifecycle methods explicitly:
//!
//! - [`ManageCourseController::new`] when the page is created,
//! - [`ManageCourseController::on_mount`] once the page is shown,
//! - [`ManageCourseController::on_external_identity_change`] whenever the
//!   requested course may have changed,
//! - [`ManageCourseController::on_field_change`] for every form edit,
//! - [`ManageCourseController::on_submit`] when the form is submitted.
//!
//! Per session the controller moves between `Idle` and `Saving`:
//! an invalid submit stays idle with field errors, a valid submit enters
//! `Saving`, success ends the session by navigating away, and failure
//! returns to idle with the save error.

mod mount;
mod view;

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::ports::{Navigator, Notifier, RecordStore, RecordStoreError};
use crate::domain::{COURSES_PATH, Course, CourseField, FieldErrors, validate_course};

pub use mount::MountLoads;
pub use view::{CourseFormView, PageView};

/// Success toast emitted after a course is persisted.
pub const COURSE_SAVED_MESSAGE: &str = "Course saved.";

/// Observable state of an editing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManageCourseState {
    draft: Course,
    field_errors: FieldErrors,
    saving: bool,
}

impl ManageCourseState {
    fn seeded(course: Course) -> Self {
        Self {
            draft: course,
            field_errors: FieldErrors::new(),
            saving: false,
        }
    }

    /// The uncommitted copy of the course being edited.
    #[must_use]
    pub const fn draft(&self) -> &Course {
        &self.draft
    }

    #[must_use]
    pub const fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    /// `true` while a save is outstanding. Advisory only.
    #[must_use]
    pub const fn saving(&self) -> bool {
        self.saving
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent to the store.
    Invalid,
    /// The store accepted the course; the user was sent to the listing.
    Saved(Course),
    /// The store rejected the course; the reason is under `onSave`.
    Failed(RecordStoreError),
}

/// Controller behind the "manage course" page.
pub struct ManageCourseController<S, N, V> {
    store: Arc<S>,
    notifier: Arc<N>,
    navigator: Arc<V>,
    state: ManageCourseState,
}

impl<S, N, V> ManageCourseController<S, N, V> {
    /// Start a session editing a copy of `initial_course`.
    pub fn new(store: Arc<S>, notifier: Arc<N>, navigator: Arc<V>, initial_course: Course) -> Self {
        Self {
            store,
            notifier,
            navigator,
            state: ManageCourseState::seeded(initial_course),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &ManageCourseState {
        &self.state
    }

    /// Re-seed the draft when the requested course changes identity.
    ///
    /// Identity is the course id. When it differs from the draft's id the
    /// draft is replaced wholesale and unsaved edits are dropped. Returns
    /// whether the draft was replaced.
    pub fn on_external_identity_change(&mut self, requested: Course) -> bool {
        if requested.id == self.state.draft.id {
            return false;
        }
        debug!(
            from = %self.state.draft.id,
            to = %requested.id,
            "requested course changed; replacing draft"
        );
        self.state.draft = requested;
        true
    }

    /// Replace one field of the draft.
    pub fn on_field_change(&mut self, field: CourseField, value: impl Into<String>) {
        self.state.draft = self.state.draft.with_field(field, value);
    }

    /// Apply several field edits in order.
    ///
    /// Equivalent to calling [`Self::on_field_change`] once per edit.
    pub fn apply_field_changes<I, T>(&mut self, changes: I)
    where
        I: IntoIterator<Item = (CourseField, T)>,
        T: Into<String>,
    {
        for (field, value) in changes {
            self.on_field_change(field, value);
        }
    }

    /// Validate the draft and, when valid, enter the saving state.
    ///
    /// The field-error map is replaced by the validation result either way.
    /// Returns the draft to persist, or `None` when validation failed.
    pub fn begin_submit(&mut self) -> Option<Course> {
        let validation = validate_course(&self.state.draft);
        self.state.field_errors = validation.errors;
        if !validation.is_valid {
            debug!(
                errors = self.state.field_errors.len(),
                "course draft failed validation"
            );
            return None;
        }
        self.state.saving = true;
        Some(self.state.draft.clone())
    }
}

impl<S, N, V> ManageCourseController<S, N, V>
where
    S: RecordStore + 'static,
    N: Notifier,
    V: Navigator,
{
    /// Request loads for whichever collections are still empty.
    ///
    /// Loads run as detached tasks; this method never waits for them.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn on_mount(&self) -> MountLoads {
        MountLoads::request(&self.store)
    }

    /// Apply the settled result of a save started by [`Self::begin_submit`].
    ///
    /// Success notifies and navigates to the course listing without touching
    /// local state. Failure clears `saving` and replaces every field error
    /// with the failure reason under `onSave`.
    pub fn finish_submit(&mut self, result: Result<Course, RecordStoreError>) -> SubmitOutcome {
        match result {
            Ok(saved) => {
                info!(course_id = %saved.id, "course saved");
                self.notifier.success(COURSE_SAVED_MESSAGE);
                self.navigator.push(COURSES_PATH);
                SubmitOutcome::Saved(saved)
            }
            Err(error) => {
                warn!(%error, "course save failed");
                self.state.saving = false;
                self.state.field_errors = FieldErrors::on_save(error.to_string());
                SubmitOutcome::Failed(error)
            }
        }
    }

    /// Validate, persist and settle the draft.
    ///
    /// The completion step runs exactly once, after the save settles.
    pub async fn on_submit(&mut self) -> SubmitOutcome {
        let Some(draft) = self.begin_submit() else {
            return SubmitOutcome::Invalid;
        };
        let result = self.store.save_course(draft).await;
        self.finish_submit(result)
    }

    /// Render the page from the current state and store contents.
    #[must_use]
    pub fn view(&self) -> PageView {
        PageView::render(&self.state, &self.store.authors())
    }
}
