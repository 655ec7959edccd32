//! Runtime settings loaded via OrthoConfig.

use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::{Catalogue, CatalogueError, StoreOptions};

/// Settings controlling the record store behind a course manager session.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "COURSE_MANAGER")]
pub struct ManagerSettings {
    /// Catalogue JSON used to seed the store; the bundled one when unset.
    pub fixtures_path: Option<PathBuf>,
    /// Simulated API latency in milliseconds.
    #[ortho_config(default = 0)]
    pub latency_ms: u64,
    /// Reason every save should fail with, for exercising error paths.
    pub save_failure: Option<String>,
}

impl ManagerSettings {
    /// Store options derived from these settings.
    #[must_use]
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            latency: Duration::from_millis(self.latency_ms),
            save_failure: self.save_failure.clone(),
        }
    }

    /// Load the configured catalogue, falling back to the bundled one.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError`] when the catalogue cannot be read or parsed.
    pub fn catalogue(&self) -> Result<Catalogue, CatalogueError> {
        self.fixtures_path
            .as_deref()
            .map_or_else(Catalogue::bundled, Catalogue::from_path)
    }
}
