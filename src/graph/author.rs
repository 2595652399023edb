//! Author: a leaf entity holding the articles it wrote

use super::article::ArticleId;
use super::sealed::Sealed;
use uuid::Uuid;

/// Unique identifier for an author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthorId(Uuid);

impl AuthorId {
    /// Create a new random AuthorId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AuthorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AuthorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "author:{}", self.0)
    }
}

/// A writer of articles
///
/// The name is fixed at construction. The article list is a back-reference
/// index maintained by the [`Catalog`](super::Catalog); every article listed
/// here names this author as its `author`.
#[derive(Debug, Clone)]
pub struct Author {
    id: AuthorId,
    name: Sealed<String>,
    pub(crate) articles: Vec<ArticleId>,
}

impl Author {
    pub(crate) fn new(name: String) -> Self {
        Self {
            id: AuthorId::new(),
            name: Sealed::new(name),
            articles: Vec::new(),
        }
    }

    /// Unique identifier
    pub fn id(&self) -> AuthorId {
        self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        self.name.get()
    }

    /// Attempt to rename the author.
    ///
    /// The name is write-once, so this never changes anything and returns
    /// `false`.
    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        self.name.set(name.into())
    }

    /// Snapshot of the articles written by this author, in registration order
    pub fn articles(&self) -> Vec<ArticleId> {
        self.articles.clone()
    }

    /// Number of articles currently attributed to this author
    pub fn article_count(&self) -> usize {
        self.articles.len()
    }
}
