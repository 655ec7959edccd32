//! Author records and the dropdown options derived from them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an author, referenced by [`crate::domain::Course::author_id`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(String);

impl AuthorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Author as loaded from the record store. Read-only for the course page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
}

/// One entry of the author selection control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorOption {
    pub value: String,
    pub text: String,
}

impl From<&Author> for AuthorOption {
    fn from(author: &Author) -> Self {
        Self {
            value: author.id.to_string(),
            text: author.name.clone(),
        }
    }
}

/// Map authors to selection options, preserving store order.
#[must_use]
pub fn author_options(authors: &[Author]) -> Vec<AuthorOption> {
    authors.iter().map(AuthorOption::from).collect()
}
