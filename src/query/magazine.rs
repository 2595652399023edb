//! Magazine-side queries and publisher ranking

use crate::graph::{Article, ArticleId, AuthorId, Catalog, CatalogResult, Magazine, MagazineId};
use std::collections::{HashMap, HashSet};

/// An author must have strictly more than this many articles in a magazine
/// to count as a contributing author
const CONTRIBUTING_THRESHOLD: usize = 2;

impl Catalog {
    /// Snapshot of the articles published in `magazine`
    pub fn magazine_articles(&self, magazine: MagazineId) -> CatalogResult<Vec<ArticleId>> {
        Ok(self.require_magazine(magazine)?.articles())
    }

    /// Distinct authors who have written for `magazine`
    pub fn contributors(&self, magazine: MagazineId) -> CatalogResult<Vec<AuthorId>> {
        let mut seen = HashSet::new();
        Ok(self
            .published(magazine)?
            .map(|article| article.author())
            .filter(|author| seen.insert(*author))
            .collect())
    }

    /// Titles of the articles in `magazine`, or `None` if it has none
    pub fn article_titles(&self, magazine: MagazineId) -> CatalogResult<Option<Vec<&str>>> {
        let titles: Vec<&str> = self.published(magazine)?.map(|a| a.title()).collect();
        Ok(if titles.is_empty() { None } else { Some(titles) })
    }

    /// Authors with more than two articles in `magazine`
    ///
    /// Counts are per author handle, not per name. Returns `None` when no
    /// author qualifies.
    pub fn contributing_authors(&self, magazine: MagazineId) -> CatalogResult<Option<Vec<AuthorId>>> {
        let mut order = Vec::new();
        let mut counts: HashMap<AuthorId, usize> = HashMap::new();
        for article in self.published(magazine)? {
            let count = counts.entry(article.author()).or_insert_with(|| {
                order.push(article.author());
                0
            });
            *count += 1;
        }

        let qualifying: Vec<AuthorId> = order
            .into_iter()
            .filter(|author| counts.get(author).copied().unwrap_or(0) > CONTRIBUTING_THRESHOLD)
            .collect();
        Ok(if qualifying.is_empty() { None } else { Some(qualifying) })
    }

    /// The magazine with the most articles
    ///
    /// Magazines without articles are not candidates. Ties go to the
    /// magazine registered first. Returns `None` if no magazine has any
    /// articles.
    pub fn top_publisher(&self) -> Option<MagazineId> {
        // Iterator::max_by_key would keep the last maximum, not the first.
        let mut best: Option<&Magazine> = None;
        for magazine in self.magazines().filter(|m| m.article_count() > 0) {
            if best.map_or(true, |b| magazine.article_count() > b.article_count()) {
                best = Some(magazine);
            }
        }
        best.map(|m| m.id())
    }

    fn published(&self, magazine: MagazineId) -> CatalogResult<impl Iterator<Item = &Article>> {
        let magazine = self.require_magazine(magazine)?;
        Ok(magazine.articles.iter().filter_map(move |id| self.article(*id)))
    }
}
