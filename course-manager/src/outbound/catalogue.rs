//! Seed catalogue of authors and courses.

use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};
use serde::{Deserialize, Serialize};

use crate::domain::slug::is_valid_slug;
use crate::domain::{Author, Course};

const BUNDLED_CATALOGUE: &str = include_str!("../../fixtures/catalogue.json");

/// Errors raised while reading a catalogue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueError {
    #[error("read catalogue '{path}': {message}")]
    Read { path: String, message: String },
    #[error("parse catalogue: {message}")]
    Parse { message: String },
}

/// Authors and courses used to populate a record store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalogue {
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl Catalogue {
    /// The catalogue shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Parse`] if the bundled fixture is malformed.
    pub fn bundled() -> Result<Self, CatalogueError> {
        Self::from_json(BUNDLED_CATALOGUE)
    }

    /// Parse a catalogue from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Parse`] when the text is not a catalogue or
    /// a course id is not a slug.
    pub fn from_json(raw: &str) -> Result<Self, CatalogueError> {
        let catalogue: Self = serde_json::from_str(raw).map_err(|error| CatalogueError::Parse {
            message: error.to_string(),
        })?;
        if let Some(course) = catalogue
            .courses
            .iter()
            .find(|course| !is_valid_slug(course.id.as_str()))
        {
            return Err(CatalogueError::Parse {
                message: format!("course id '{}' is not a slug", course.id),
            });
        }
        Ok(catalogue)
    }

    /// Read a catalogue from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Read`] when the file cannot be opened or
    /// read, and [`CatalogueError::Parse`] when its contents are invalid.
    pub fn from_path(path: &Path) -> Result<Self, CatalogueError> {
        let read_error = |message: String| CatalogueError::Read {
            path: path.display().to_string(),
            message,
        };
        let parent = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let file_name = path
            .file_name()
            .ok_or_else(|| read_error("path must name a file".to_owned()))?;
        let directory = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|error| read_error(format!("open parent directory: {error}")))?;
        let raw = directory
            .read_to_string(Path::new(file_name))
            .map_err(|error| read_error(error.to_string()))?;
        Self::from_json(&raw)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use std::io::Write;

    use rstest::rstest;
    use tempfile::NamedTempFile;

    #[rstest]
    fn bundled_catalogue_parses() {
        let catalogue = Catalogue::bundled().expect("bundled catalogue");

        assert_eq!(catalogue.authors.len(), 3);
        assert_eq!(catalogue.courses.len(), 5);
        assert!(catalogue.courses.iter().all(|course| !course.id.is_unassigned()));
    }

    #[rstest]
    fn reads_catalogue_from_file() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{"authors":[{{"id":"dan-wahlin","name":"Dan Wahlin"}}],"courses":[]}}"#
        )
        .expect("write catalogue");

        let catalogue = Catalogue::from_path(file.path()).expect("catalogue should load");

        assert_eq!(catalogue.authors.len(), 1);
        assert!(catalogue.courses.is_empty());
    }

    #[rstest]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.json");

        let error = Catalogue::from_path(&path).expect_err("file is missing");

        assert!(matches!(error, CatalogueError::Read { .. }));
    }

    #[rstest]
    fn malformed_json_is_a_parse_error() {
        let error = Catalogue::from_json("{\"authors\": 3}").expect_err("invalid catalogue");

        assert!(matches!(error, CatalogueError::Parse { .. }));
    }

    #[rstest]
    #[case(r#"{"courses":[{"id":"Clean Code","title":"Clean Code"}]}"#)]
    #[case(r#"{"courses":[{"title":"No Id"}]}"#)]
    #[case(r#"{"courses":[{"id":"--","title":"Dashes"}]}"#)]
    fn course_ids_must_be_slugs(#[case] raw: &str) {
        let error = Catalogue::from_json(raw).expect_err("invalid course id");

        assert!(matches!(error, CatalogueError::Parse { .. }));
    }
}
