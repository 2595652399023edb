//! Small publishing graph used across integration tests

use bylines::{ArticleId, AuthorId, Catalog, MagazineId};

/// Configuration for building a fixture catalog
#[derive(Debug, Clone)]
pub struct FixtureConfig {
    /// Number of articles Carry writes for Vogue
    pub carry_in_vogue: usize,
    /// Number of articles Nathaniel writes for Vogue
    pub nathaniel_in_vogue: usize,
    /// Number of articles Nathaniel writes for AFAR
    pub nathaniel_in_afar: usize,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            carry_in_vogue: 3,
            nathaniel_in_vogue: 2,
            nathaniel_in_afar: 1,
        }
    }
}

/// A built catalog with handles to its entities
#[derive(Debug)]
pub struct Fixture {
    pub catalog: Catalog,
    pub carry: AuthorId,
    pub nathaniel: AuthorId,
    pub vogue: MagazineId,
    pub afar: MagazineId,
    /// Magazine that never publishes anything
    pub quiet: MagazineId,
    pub articles: Vec<ArticleId>,
}

pub fn build_fixture(config: &FixtureConfig) -> Fixture {
    bylines::logging::init_tracing();

    let mut catalog = Catalog::new();
    let carry = catalog.add_author("Carry Bradshaw").expect("valid author");
    let nathaniel = catalog.add_author("Nathaniel Hawthorne").expect("valid author");
    let vogue = catalog.add_magazine("Vogue", "Fashion").expect("valid magazine");
    let afar = catalog.add_magazine("AFAR", "Travel").expect("valid magazine");
    let quiet = catalog.add_magazine("Quiet Times", "Poetry").expect("valid magazine");

    let mut articles = Vec::new();
    let plan = [
        (carry, vogue, config.carry_in_vogue),
        (nathaniel, vogue, config.nathaniel_in_vogue),
        (nathaniel, afar, config.nathaniel_in_afar),
    ];
    for (author, magazine, count) in plan {
        for _ in 0..count {
            let title = format!("Article number {}", articles.len());
            articles.push(catalog.add_article(author, magazine, title).expect("valid article"));
        }
    }

    Fixture {
        catalog,
        carry,
        nathaniel,
        vogue,
        afar,
        quiet,
        articles,
    }
}
