//! Collection loads requested when the course page mounts.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::ports::RecordStore;

#[derive(Debug, Clone, Copy)]
enum Collection {
    Courses,
    Authors,
}

impl Collection {
    const fn name(self) -> &'static str {
        match self {
            Self::Courses => "courses",
            Self::Authors => "authors",
        }
    }
}

/// Handles for the loads started by [`super::ManageCourseController::on_mount`].
///
/// Dropping the handle leaves the loads running. Callers that need to know
/// when the store has been populated may await [`MountLoads::settled`].
#[derive(Debug, Default)]
#[must_use = "drop explicitly to detach, or await `settled` to observe completion"]
pub struct MountLoads {
    courses: Option<JoinHandle<()>>,
    authors: Option<JoinHandle<()>>,
}

impl MountLoads {
    pub(super) fn request<S>(store: &Arc<S>) -> Self
    where
        S: RecordStore + 'static,
    {
        let courses = store
            .courses()
            .is_empty()
            .then(|| spawn_load(Arc::clone(store), Collection::Courses));
        let authors = store
            .authors()
            .is_empty()
            .then(|| spawn_load(Arc::clone(store), Collection::Authors));
        Self { courses, authors }
    }

    /// Whether a course load was started.
    #[must_use]
    pub const fn requested_courses(&self) -> bool {
        self.courses.is_some()
    }

    /// Whether an author load was started.
    #[must_use]
    pub const fn requested_authors(&self) -> bool {
        self.authors.is_some()
    }

    /// Wait until every requested load has finished, successfully or not.
    pub async fn settled(self) {
        for handle in [self.courses, self.authors].into_iter().flatten() {
            if let Err(error) = handle.await {
                warn!(%error, "collection load task did not complete");
            }
        }
    }
}

fn spawn_load<S>(store: Arc<S>, collection: Collection) -> JoinHandle<()>
where
    S: RecordStore + 'static,
{
    debug!(collection = collection.name(), "requesting collection load");
    tokio::spawn(async move {
        let result = match collection {
            Collection::Courses => store.load_courses().await,
            Collection::Authors => store.load_authors().await,
        };
        if let Err(error) = result {
            warn!(collection = collection.name(), %error, "collection load failed");
        }
    })
}
