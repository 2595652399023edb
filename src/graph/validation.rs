//! Length limits shared by constructors and setters

use super::catalog::{CatalogError, CatalogResult};

/// Inclusive bounds on a string length, counted in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub min: usize,
    /// `None` means unbounded
    pub max: Option<usize>,
}

impl LengthBounds {
    pub const fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    /// Panics in debug builds if `min > max`.
    pub const fn between(min: usize, max: usize) -> Self {
        debug_assert!(min <= max, "length bounds must have min <= max");
        Self { min, max: Some(max) }
    }

    pub fn contains(&self, len: usize) -> bool {
        len >= self.min && self.max.map_or(true, |max| len <= max)
    }
}

impl std::fmt::Display for LengthBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.max {
            Some(max) => write!(f, "between {} and {} characters", self.min, max),
            None => write!(f, "at least {} characters", self.min),
        }
    }
}

/// Limits applied to entity fields
///
/// Custom bounds replace the default limits outright; they are not
/// intersected with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationConfig {
    pub author_name: LengthBounds,
    pub magazine_name: LengthBounds,
    pub magazine_category: LengthBounds,
    pub article_title: LengthBounds,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            author_name: LengthBounds::at_least(1),
            magazine_name: LengthBounds::between(2, 16),
            magazine_category: LengthBounds::at_least(1),
            article_title: LengthBounds::between(5, 50),
        }
    }
}

impl ValidationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_author_name(mut self, bounds: LengthBounds) -> Self {
        self.author_name = bounds;
        self
    }

    pub fn with_magazine_name(mut self, bounds: LengthBounds) -> Self {
        self.magazine_name = bounds;
        self
    }

    pub fn with_magazine_category(mut self, bounds: LengthBounds) -> Self {
        self.magazine_category = bounds;
        self
    }

    pub fn with_article_title(mut self, bounds: LengthBounds) -> Self {
        self.article_title = bounds;
        self
    }
}

/// Reject `value` if its character count falls outside `bounds`
pub(crate) fn check_length(field: &str, value: &str, bounds: LengthBounds) -> CatalogResult<()> {
    let len = value.chars().count();
    if bounds.contains(len) {
        Ok(())
    } else {
        Err(CatalogError::InvalidArgument(format!(
            "{} must be {}, got {}",
            field, bounds, len
        )))
    }
}
