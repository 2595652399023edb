//! Magazine: a leaf entity holding the articles it published

use super::article::ArticleId;
use uuid::Uuid;

/// Unique identifier for a magazine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MagazineId(Uuid);

impl MagazineId {
    /// Create a new random MagazineId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MagazineId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MagazineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "magazine:{}", self.0)
    }
}

/// A publication with a name and a category
///
/// Name and category stay mutable after construction, but only through the
/// [`Catalog`](super::Catalog), which applies the same limits as
/// construction and silently drops invalid values.
#[derive(Debug, Clone)]
pub struct Magazine {
    id: MagazineId,
    pub(crate) name: String,
    pub(crate) category: String,
    pub(crate) articles: Vec<ArticleId>,
}

impl Magazine {
    pub(crate) fn new(name: String, category: String) -> Self {
        Self {
            id: MagazineId::new(),
            name,
            category,
            articles: Vec::new(),
        }
    }

    /// Unique identifier
    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Topic area, e.g. "Fashion" or "Technology"
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Snapshot of the articles published here, in registration order
    pub fn articles(&self) -> Vec<ArticleId> {
        self.articles.clone()
    }

    /// Number of articles currently published here
    pub fn article_count(&self) -> usize {
        self.articles.len()
    }
}
