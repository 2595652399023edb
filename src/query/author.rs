//! Author-side queries

use crate::graph::{ArticleId, AuthorId, Catalog, CatalogResult, MagazineId};
use std::collections::HashSet;

impl Catalog {
    /// Snapshot of the articles written by `author`
    pub fn author_articles(&self, author: AuthorId) -> CatalogResult<Vec<ArticleId>> {
        Ok(self.require_author(author)?.articles())
    }

    /// Distinct magazines `author` has written for
    pub fn author_magazines(&self, author: AuthorId) -> CatalogResult<Vec<MagazineId>> {
        let author = self.require_author(author)?;
        let mut seen = HashSet::new();
        Ok(author
            .articles
            .iter()
            .filter_map(|id| self.article(*id))
            .map(|article| article.magazine())
            .filter(|magazine| seen.insert(*magazine))
            .collect())
    }

    /// Distinct categories of the magazines `author` has written for
    ///
    /// Returns `None` when the author has no articles.
    pub fn topic_areas(&self, author: AuthorId) -> CatalogResult<Option<Vec<&str>>> {
        if self.require_author(author)?.article_count() == 0 {
            return Ok(None);
        }
        let mut seen = HashSet::new();
        let categories = self
            .author_magazines(author)?
            .into_iter()
            .filter_map(|id| self.magazine(id))
            .map(|magazine| magazine.category())
            .filter(|category| seen.insert(*category))
            .collect();
        Ok(Some(categories))
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{AuthorId, Catalog, CatalogError};

    #[test]
    fn magazines_are_deduplicated_in_first_seen_order() {
        let mut catalog = Catalog::new();
        let author = catalog.add_author("Carry Bradshaw").unwrap();
        let vogue = catalog.add_magazine("Vogue", "Fashion").unwrap();
        let afar = catalog.add_magazine("AFAR", "Travel").unwrap();
        catalog.add_article(author, afar, "2023 Eccentric Travel Awards").unwrap();
        catalog.add_article(author, vogue, "How to wear a tutu").unwrap();
        catalog.add_article(author, afar, "Carefree Adventures").unwrap();

        assert_eq!(catalog.author_magazines(author).unwrap(), vec![afar, vogue]);
    }

    #[test]
    fn topic_areas_none_without_articles() {
        let mut catalog = Catalog::new();
        let author = catalog.add_author("Carry Bradshaw").unwrap();
        assert_eq!(catalog.topic_areas(author).unwrap(), None);
    }

    #[test]
    fn topic_areas_deduplicates_categories() {
        let mut catalog = Catalog::new();
        let author = catalog.add_author("Carry Bradshaw").unwrap();
        let vogue = catalog.add_magazine("Vogue", "Fashion").unwrap();
        let gq = catalog.add_magazine("GQ", "Fashion").unwrap();
        let afar = catalog.add_magazine("AFAR", "Travel").unwrap();
        catalog.add_article(author, vogue, "How to wear a tutu").unwrap();
        catalog.add_article(author, gq, "Dating life in NYC").unwrap();
        catalog.add_article(author, afar, "Carefree Adventures").unwrap();

        assert_eq!(catalog.topic_areas(author).unwrap(), Some(vec!["Fashion", "Travel"]));
    }

    #[test]
    fn topic_areas_follow_category_changes() {
        let mut catalog = Catalog::new();
        let author = catalog.add_author("Carry Bradshaw").unwrap();
        let vogue = catalog.add_magazine("Vogue", "Fashion").unwrap();
        catalog.add_article(author, vogue, "How to wear a tutu").unwrap();

        catalog.set_magazine_category(vogue, "Lifestyle").unwrap();

        assert_eq!(catalog.topic_areas(author).unwrap(), Some(vec!["Lifestyle"]));
    }

    #[test]
    fn unknown_author_is_not_found() {
        let catalog = Catalog::new();
        let ghost = AuthorId::new();
        assert_eq!(catalog.author_articles(ghost), Err(CatalogError::AuthorNotFound(ghost)));
        assert_eq!(catalog.topic_areas(ghost), Err(CatalogError::AuthorNotFound(ghost)));
    }
}
