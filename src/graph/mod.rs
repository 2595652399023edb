//! Core entity graph

mod article;
mod author;
mod catalog;
mod magazine;
mod sealed;
mod validation;


pub use article::{Article, ArticleId};
pub use author::{Author, AuthorId};
pub use catalog::{Catalog, CatalogError, CatalogResult, ErrorKind};
pub use magazine::{Magazine, MagazineId};
pub use sealed::Sealed;
pub use validation::{LengthBounds, ValidationConfig};
