//! Article: the join entity between an author and a magazine

use super::author::AuthorId;
use super::magazine::MagazineId;
use super::sealed::Sealed;
use uuid::Uuid;

/// Unique identifier for an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(Uuid);

impl ArticleId {
    /// Create a new random ArticleId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ArticleId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "article:{}", self.0)
    }
}

/// An article written by one author and published in one magazine
///
/// Both endpoints are always set. They can only be changed through
/// [`Catalog::set_article_author`](super::Catalog::set_article_author) and
/// [`Catalog::set_article_magazine`](super::Catalog::set_article_magazine),
/// which keep the endpoint article lists in step.
#[derive(Debug, Clone)]
pub struct Article {
    id: ArticleId,
    pub(crate) author: AuthorId,
    pub(crate) magazine: MagazineId,
    title: Sealed<String>,
}

impl Article {
    pub(crate) fn new(author: AuthorId, magazine: MagazineId, title: String) -> Self {
        Self {
            id: ArticleId::new(),
            author,
            magazine,
            title: Sealed::new(title),
        }
    }

    /// Unique identifier
    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn magazine(&self) -> MagazineId {
        self.magazine
    }

    pub fn title(&self) -> &str {
        self.title.get()
    }

    /// Attempt to retitle the article.
    ///
    /// Titles are write-once; the call is ignored and returns `false`.
    pub fn set_title(&mut self, title: impl Into<String>) -> bool {
        self.title.set(title.into())
    }
}
