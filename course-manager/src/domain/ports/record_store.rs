//! Driven port for the shared course and author collections.
//!
//! The record store owns the authoritative lists the pages read from. Reads
//! are synchronous snapshots; loading and saving are asynchronous because
//! adapters typically reach a remote API.

use async_trait::async_trait;

use crate::domain::{Author, Course};

use super::define_port_error;

define_port_error! {
    /// Errors raised by record store adapters.
    ///
    /// The rendered message is the failure reason shown to the user.
    pub enum RecordStoreError {
        /// A bulk load could not be completed.
        Load { message: String } => "{message}",
        /// The store refused or failed to persist a course.
        Save { message: String } => "{message}",
        /// An update referenced a course the store does not hold.
        NotFound { id: String } => "course {id} was not found",
    }
}

/// Port for reading, loading and persisting course records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Snapshot of the currently loaded courses. Empty until loaded.
    fn courses(&self) -> Vec<Course>;

    /// Snapshot of the currently loaded authors. Empty until loaded.
    fn authors(&self) -> Vec<Author>;

    /// Populate the course collection.
    async fn load_courses(&self) -> Result<(), RecordStoreError>;

    /// Populate the author collection.
    async fn load_authors(&self) -> Result<(), RecordStoreError>;

    /// Persist a course, returning the canonical stored record.
    ///
    /// New records (unassigned id) come back with the id the store chose.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError`] when the store rejects the record or
    /// cannot be reached.
    async fn save_course(&self, course: Course) -> Result<Course, RecordStoreError>;
}

/// Fixture implementation for tests that do not exercise store contents.
///
/// Holds no records; saves echo the course back unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRecordStore;

#[async_trait]
impl RecordStore for FixtureRecordStore {
    fn courses(&self) -> Vec<Course> {
        Vec::new()
    }

    fn authors(&self) -> Vec<Author> {
        Vec::new()
    }

    async fn load_courses(&self) -> Result<(), RecordStoreError> {
        Ok(())
    }

    async fn load_authors(&self) -> Result<(), RecordStoreError> {
        Ok(())
    }

    async fn save_course(&self, course: Course) -> Result<Course, RecordStoreError> {
        Ok(course)
    }
}
