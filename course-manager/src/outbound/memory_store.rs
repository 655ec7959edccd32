//! In-memory record store standing in for the course and author API.
//!
//! The store keeps two views of the data: the "remote" catalogue, playing the
//! part of the server, and the client-side collections the pages read. Loads
//! copy remote into client; saves write remote first and then append or
//! replace the record in the client collection.

use std::sync::{Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::catalogue::Catalogue;
use crate::domain::ports::{RecordStore, RecordStoreError};
use crate::domain::slug::unique_slug;
use crate::domain::{Author, Course, CourseId};

/// Rejection reason for titles the remote side refuses outright.
pub const EMPTY_TITLE_MESSAGE: &str = "Title must be at least 1 characters.";

/// Behaviour knobs for [`InMemoryRecordStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Delay applied before every load and save completes.
    pub latency: Duration,
    /// When set, every save fails with this reason.
    pub save_failure: Option<String>,
}

/// Record store holding everything in process memory.
#[derive(Debug)]
pub struct InMemoryRecordStore {
    remote: Mutex<Catalogue>,
    courses: RwLock<Vec<Course>>,
    authors: RwLock<Vec<Author>>,
    options: StoreOptions,
}

impl InMemoryRecordStore {
    /// Create a store whose remote side holds `catalogue`.
    ///
    /// Client collections start empty until loaded.
    #[must_use]
    pub fn new(catalogue: Catalogue, options: StoreOptions) -> Self {
        Self {
            remote: Mutex::new(catalogue),
            courses: RwLock::new(Vec::new()),
            authors: RwLock::new(Vec::new()),
            options,
        }
    }

    /// Courses currently held on the remote side.
    #[must_use]
    pub fn remote_courses(&self) -> Vec<Course> {
        lock(&self.remote).courses.clone()
    }

    async fn simulate_latency(&self) {
        if !self.options.latency.is_zero() {
            tokio::time::sleep(self.options.latency).await;
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    fn courses(&self) -> Vec<Course> {
        read(&self.courses).clone()
    }

    fn authors(&self) -> Vec<Author> {
        read(&self.authors).clone()
    }

    async fn load_courses(&self) -> Result<(), RecordStoreError> {
        self.simulate_latency().await;
        let remote = lock(&self.remote);
        debug!(count = remote.courses.len(), "courses loaded");
        *write(&self.courses) = remote.courses.clone();
        Ok(())
    }

    async fn load_authors(&self) -> Result<(), RecordStoreError> {
        self.simulate_latency().await;
        let remote = lock(&self.remote);
        debug!(count = remote.authors.len(), "authors loaded");
        *write(&self.authors) = remote.authors.clone();
        Ok(())
    }

    async fn save_course(&self, course: Course) -> Result<Course, RecordStoreError> {
        self.simulate_latency().await;
        if let Some(reason) = &self.options.save_failure {
            return Err(RecordStoreError::save(reason.as_str()));
        }
        if course.title.trim().is_empty() {
            return Err(RecordStoreError::save(EMPTY_TITLE_MESSAGE));
        }
        // Remote before client, in every path that touches both.
        let mut remote = lock(&self.remote);
        let saved = persist_remote(&mut remote, course)?;
        apply_to_client(&mut write(&self.courses), &saved);
        Ok(saved)
    }
}

fn persist_remote(remote: &mut Catalogue, course: Course) -> Result<Course, RecordStoreError> {
    if course.id.is_unassigned() {
        let id = unique_slug(&course.title, |candidate| {
            remote
                .courses
                .iter()
                .any(|existing| existing.id.as_str() == candidate)
        });
        let created = Course {
            id: CourseId::new(id),
            ..course
        };
        debug!(course_id = %created.id, "course created");
        remote.courses.push(created.clone());
        return Ok(created);
    }

    let slot = remote
        .courses
        .iter_mut()
        .find(|existing| existing.id == course.id)
        .ok_or_else(|| RecordStoreError::not_found(course.id.as_str()))?;
    *slot = course.clone();
    debug!(course_id = %course.id, "course updated");
    Ok(course)
}

fn apply_to_client(courses: &mut Vec<Course>, saved: &Course) {
    match courses.iter_mut().find(|existing| existing.id == saved.id) {
        Some(existing) => *existing = saved.clone(),
        None => courses.push(saved.clone()),
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
