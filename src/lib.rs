//! Bylines: an in-memory author / magazine / article graph
//!
//! Authors and magazines are related many-to-many through articles. Each
//! article names exactly one author and one magazine, and the catalog keeps
//! both sides' article lists in step with the article's endpoints.
//!
//! # Core Concepts
//!
//! - **Authors**: write-once name, list of written articles
//! - **Magazines**: mutable name and category, list of published articles
//! - **Articles**: the join entity, with a write-once title
//! - **Catalog**: owns everything and keeps one registry per entity kind
//!
//! Constructors are strict and return [`CatalogError::InvalidArgument`] on
//! bad input. Setters are lenient: an invalid magazine name or category, and
//! any write to an author name or article title, is silently dropped.
//!
//! # Example
//!
//! ```
//! use bylines::Catalog;
//!
//! let mut catalog = Catalog::new();
//! let author = catalog.add_author("Carry Bradshaw")?;
//! let vogue = catalog.add_magazine("Vogue", "Fashion")?;
//! catalog.add_article(author, vogue, "How to wear a tutu")?;
//!
//! assert_eq!(catalog.topic_areas(author)?, Some(vec!["Fashion"]));
//! assert_eq!(catalog.top_publisher(), Some(vogue));
//! # Ok::<(), bylines::CatalogError>(())
//! ```

mod graph;
pub mod logging;
mod query;

pub use graph::{
    Article, ArticleId, Author, AuthorId, Catalog, CatalogError, CatalogResult, ErrorKind,
    LengthBounds, Magazine, MagazineId, Sealed, ValidationConfig,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
