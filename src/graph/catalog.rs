//! Catalog: the arena and registries for authors, magazines and articles

use super::article::{Article, ArticleId};
use super::author::{Author, AuthorId};
use super::magazine::{Magazine, MagazineId};
use super::validation::{check_length, ValidationConfig};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur in catalog operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A value or endpoint handed to a constructor or rebind was rejected
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Author not found: {0}")]
    AuthorNotFound(AuthorId),

    #[error("Magazine not found: {0}")]
    MagazineNotFound(MagazineId),

    #[error("Article not found: {0}")]
    ArticleNotFound(ArticleId),
}

/// Coarse classification of a [`CatalogError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            CatalogError::AuthorNotFound(_)
            | CatalogError::MagazineNotFound(_)
            | CatalogError::ArticleNotFound(_) => ErrorKind::NotFound,
        }
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Owner of every author, magazine and article
///
/// Each entity type has an append-only registry that preserves construction
/// order. Articles are only created through [`Catalog::add_article`], which
/// registers the article with both of its endpoints, and only move through
/// [`Catalog::set_article_author`] / [`Catalog::set_article_magazine`].
///
/// The catalog provides no internal locking; wrap it in a mutex if it has to
/// be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    config: ValidationConfig,
    authors: HashMap<AuthorId, Author>,
    magazines: HashMap<MagazineId, Magazine>,
    articles: HashMap<ArticleId, Article>,
    author_registry: Vec<AuthorId>,
    magazine_registry: Vec<MagazineId>,
    article_registry: Vec<ArticleId>,
}

impl Catalog {
    /// Create an empty catalog with the default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty catalog with custom limits
    pub fn with_config(config: ValidationConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Forget every entity. Limits are kept.
    pub fn reset(&mut self) {
        self.authors.clear();
        self.magazines.clear();
        self.articles.clear();
        self.author_registry.clear();
        self.magazine_registry.clear();
        self.article_registry.clear();
        debug!("catalog reset");
    }

    // --- construction ---

    /// Register a new author
    pub fn add_author(&mut self, name: impl Into<String>) -> CatalogResult<AuthorId> {
        let name = name.into();
        check_length("author name", &name, self.config.author_name)?;

        let author = Author::new(name);
        let id = author.id();
        debug!(author_id = %id, name = author.name(), "registered author");
        self.authors.insert(id, author);
        self.author_registry.push(id);
        Ok(id)
    }

    /// Register a new magazine
    pub fn add_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> CatalogResult<MagazineId> {
        let name = name.into();
        let category = category.into();
        check_length("magazine name", &name, self.config.magazine_name)?;
        check_length("magazine category", &category, self.config.magazine_category)?;

        let magazine = Magazine::new(name, category);
        let id = magazine.id();
        debug!(magazine_id = %id, name = magazine.name(), "registered magazine");
        self.magazines.insert(id, magazine);
        self.magazine_registry.push(id);
        Ok(id)
    }

    /// Create an article linking `author` and `magazine`
    ///
    /// All checks run before anything is registered, so a failed call leaves
    /// the catalog untouched. On success the article is appended to the
    /// article registry and to both endpoints' article lists.
    pub fn add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<ArticleId> {
        let title = title.into();
        self.ensure_author_endpoint(author)?;
        self.ensure_magazine_endpoint(magazine)?;
        check_length("article title", &title, self.config.article_title)?;

        let article = Article::new(author, magazine, title);
        let id = article.id();
        self.articles.insert(id, article);
        self.article_registry.push(id);
        if let Some(a) = self.authors.get_mut(&author) {
            a.articles.push(id);
        }
        if let Some(m) = self.magazines.get_mut(&magazine) {
            m.articles.push(id);
        }
        debug!(article_id = %id, author_id = %author, magazine_id = %magazine, "registered article");
        Ok(id)
    }

    /// Let `author` write a new article for `magazine`
    ///
    /// Same as [`Catalog::add_article`] except that an unknown `author` is
    /// reported as [`CatalogError::AuthorNotFound`].
    pub fn author_add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<ArticleId> {
        self.require_author(author)?;
        self.add_article(author, magazine, title)
    }

    // --- lookup ---

    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.get(&id)
    }

    pub fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines.get(&id)
    }

    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.get(&id)
    }

    /// All authors in construction order
    pub fn authors(&self) -> impl Iterator<Item = &Author> {
        self.author_registry.iter().filter_map(move |id| self.authors.get(id))
    }

    /// All magazines in construction order
    pub fn magazines(&self) -> impl Iterator<Item = &Magazine> {
        self.magazine_registry.iter().filter_map(move |id| self.magazines.get(id))
    }

    /// All articles in construction order
    pub fn articles(&self) -> impl Iterator<Item = &Article> {
        self.article_registry.iter().filter_map(move |id| self.articles.get(id))
    }

    pub fn author_count(&self) -> usize {
        self.author_registry.len()
    }

    pub fn magazine_count(&self) -> usize {
        self.magazine_registry.len()
    }

    pub fn article_count(&self) -> usize {
        self.article_registry.len()
    }

    pub(crate) fn require_author(&self, id: AuthorId) -> CatalogResult<&Author> {
        self.authors.get(&id).ok_or(CatalogError::AuthorNotFound(id))
    }

    pub(crate) fn require_magazine(&self, id: MagazineId) -> CatalogResult<&Magazine> {
        self.magazines.get(&id).ok_or(CatalogError::MagazineNotFound(id))
    }

    fn ensure_author_endpoint(&self, id: AuthorId) -> CatalogResult<()> {
        if self.authors.contains_key(&id) {
            Ok(())
        } else {
            Err(CatalogError::InvalidArgument(format!("unknown author {}", id)))
        }
    }

    fn ensure_magazine_endpoint(&self, id: MagazineId) -> CatalogResult<()> {
        if self.magazines.contains_key(&id) {
            Ok(())
        } else {
            Err(CatalogError::InvalidArgument(format!("unknown magazine {}", id)))
        }
    }

    // --- lenient setters ---

    /// Attempt to rename an author. Names are write-once, so this is always
    /// ignored and returns `Ok(false)`.
    pub fn set_author_name(&mut self, id: AuthorId, name: impl Into<String>) -> CatalogResult<bool> {
        let author = self.authors.get_mut(&id).ok_or(CatalogError::AuthorNotFound(id))?;
        if !author.set_name(name) {
            trace!(author_id = %id, "ignored write to author name");
            return Ok(false);
        }
        Ok(true)
    }

    /// Attempt to retitle an article. Titles are write-once, so this is
    /// always ignored and returns `Ok(false)`.
    pub fn set_article_title(
        &mut self,
        id: ArticleId,
        title: impl Into<String>,
    ) -> CatalogResult<bool> {
        let article = self.articles.get_mut(&id).ok_or(CatalogError::ArticleNotFound(id))?;
        if !article.set_title(title) {
            trace!(article_id = %id, "ignored write to article title");
            return Ok(false);
        }
        Ok(true)
    }

    /// Rename a magazine
    ///
    /// A name outside the configured limits is dropped without error and
    /// `Ok(false)` is returned.
    pub fn set_magazine_name(
        &mut self,
        id: MagazineId,
        name: impl Into<String>,
    ) -> CatalogResult<bool> {
        let name = name.into();
        let bounds = self.config.magazine_name;
        let magazine = self.magazines.get_mut(&id).ok_or(CatalogError::MagazineNotFound(id))?;
        if check_length("magazine name", &name, bounds).is_err() {
            trace!(magazine_id = %id, "ignored write to magazine name");
            return Ok(false);
        }
        magazine.name = name;
        Ok(true)
    }

    /// Change a magazine's category
    ///
    /// An empty category is dropped without error and `Ok(false)` is
    /// returned.
    pub fn set_magazine_category(
        &mut self,
        id: MagazineId,
        category: impl Into<String>,
    ) -> CatalogResult<bool> {
        let category = category.into();
        let bounds = self.config.magazine_category;
        let magazine = self.magazines.get_mut(&id).ok_or(CatalogError::MagazineNotFound(id))?;
        if check_length("magazine category", &category, bounds).is_err() {
            trace!(magazine_id = %id, "ignored write to magazine category");
            return Ok(false);
        }
        magazine.category = category;
        Ok(true)
    }

    // --- relationship migration ---

    /// Move an article to a different author
    ///
    /// The article leaves the previous author's list and is appended to the
    /// new author's list in the same call. Rebinding to the current author
    /// moves the article to the end of that author's list.
    pub fn set_article_author(&mut self, article: ArticleId, author: AuthorId) -> CatalogResult<()> {
        let previous = self
            .articles
            .get(&article)
            .ok_or(CatalogError::ArticleNotFound(article))?
            .author;
        self.ensure_author_endpoint(author)?;

        if let Some(old) = self.authors.get_mut(&previous) {
            detach(&mut old.articles, article);
        }
        if let Some(new) = self.authors.get_mut(&author) {
            new.articles.push(article);
        }
        if let Some(a) = self.articles.get_mut(&article) {
            a.author = author;
        }
        debug!(article_id = %article, from = %previous, to = %author, "moved article to author");
        Ok(())
    }

    /// Move an article to a different magazine
    ///
    /// Mirror of [`Catalog::set_article_author`].
    pub fn set_article_magazine(
        &mut self,
        article: ArticleId,
        magazine: MagazineId,
    ) -> CatalogResult<()> {
        let previous = self
            .articles
            .get(&article)
            .ok_or(CatalogError::ArticleNotFound(article))?
            .magazine;
        self.ensure_magazine_endpoint(magazine)?;

        if let Some(old) = self.magazines.get_mut(&previous) {
            detach(&mut old.articles, article);
        }
        if let Some(new) = self.magazines.get_mut(&magazine) {
            new.articles.push(article);
        }
        if let Some(a) = self.articles.get_mut(&article) {
            a.magazine = magazine;
        }
        debug!(article_id = %article, from = %previous, to = %magazine, "moved article to magazine");
        Ok(())
    }
}

/// Remove the single entry for `article`, keeping the order of the rest
fn detach(list: &mut Vec<ArticleId>, article: ArticleId) {
    if let Some(pos) = list.iter().position(|id| *id == article) {
        list.remove(pos);
    }
}
