// 📚 Catalog - Context object owning every registry
//
// Authors write Articles published in Magazines. The catalog is the only
// place where ids are resolved against registries, so every cross-entity
// check and every relationship query lives here.
//
// A caller (or test harness) creates one Catalog per scenario and may
// `reset()` it between scenarios. There are no process-wide globals.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

use crate::entities::{
    Article, ArticleId, ArticleRegistry, Author, AuthorId, AuthorRegistry, Magazine, MagazineId,
    MagazineRegistry,
};
use crate::error::{Result, ValidationError};

/// An author must have strictly more than this many articles in a magazine
/// to count as a contributing author of it.
pub const CONTRIBUTING_AUTHOR_THRESHOLD: usize = 2;

// ============================================================================
// SNAPSHOT
// ============================================================================

/// Point-in-time copy of every registry, in registration order.
///
/// Output only: it serializes but cannot be decoded back into entities.
///
/// ```compile_fail
/// use magazine_catalog::CatalogSnapshot;
///
/// let snapshot: CatalogSnapshot = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogSnapshot {
    pub taken_at: DateTime<Utc>,
    pub authors: Vec<Author>,
    pub magazines: Vec<Magazine>,
    pub articles: Vec<Article>,
}

// ============================================================================
// CATALOG
// ============================================================================

#[derive(Debug, Default)]
pub struct Catalog {
    authors: AuthorRegistry,
    magazines: MagazineRegistry,
    articles: ArticleRegistry,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog {
            authors: AuthorRegistry::new(),
            magazines: MagazineRegistry::new(),
            articles: ArticleRegistry::new(),
        }
    }

    /// Drop every author, magazine and article.
    ///
    /// Registries have no delete API of their own; this is the teardown a
    /// harness uses between scenarios.
    pub fn reset(&mut self) {
        debug!(
            authors = self.authors.count(),
            magazines = self.magazines.count(),
            articles = self.articles.count(),
            "catalog reset"
        );
        self.authors.clear();
        self.magazines.clear();
        self.articles.clear();
    }

    pub fn authors(&self) -> &AuthorRegistry {
        &self.authors
    }

    pub fn magazines(&self) -> &MagazineRegistry {
        &self.magazines
    }

    pub fn articles(&self) -> &ArticleRegistry {
        &self.articles
    }

    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.find_by_id(id)
    }

    pub fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines.find_by_id(id)
    }

    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.find_by_id(id)
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            taken_at: Utc::now(),
            authors: self.authors.all_authors().to_vec(),
            magazines: self.magazines.all_magazines().to_vec(),
            articles: self.articles.all_articles().to_vec(),
        }
    }

    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    pub fn add_author(&mut self, name: impl Into<String>) -> Result<AuthorId> {
        let author = Author::new(name)?;
        let id = self.authors.register(author);
        debug!(author_id = %id, "author registered");
        Ok(id)
    }

    pub fn add_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<MagazineId> {
        let magazine = Magazine::new(name, category)?;
        let id = self.magazines.register(magazine);
        debug!(magazine_id = %id, "magazine registered");
        Ok(id)
    }

    /// Create and register an article.
    ///
    /// Checks run author, magazine, then title; the article is registered only
    /// if all three pass.
    pub fn add_article(
        &mut self,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> Result<ArticleId> {
        self.require_author(author_id)?;
        self.require_magazine(magazine_id)?;
        let article = Article::new(author_id, magazine_id, title)?;

        let id = self.articles.register(article);
        debug!(
            article_id = %id,
            author_id = %author_id,
            magazine_id = %magazine_id,
            "article registered"
        );
        Ok(id)
    }

    /// Author-side article factory.
    ///
    /// Returns `Ok(None)` without creating anything when `magazine_id` is not
    /// a registered magazine. Every other failure is an error, exactly as from
    /// `add_article`.
    pub fn author_add_article(
        &mut self,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> Result<Option<ArticleId>> {
        if !self.magazines.contains(magazine_id) {
            debug!(
                magazine_id = %magazine_id,
                "author_add_article: unknown magazine, nothing created"
            );
            return Ok(None);
        }
        self.add_article(author_id, magazine_id, title).map(Some)
    }

    // ========================================================================
    // MUTATION
    // ========================================================================

    pub fn rename_magazine(&mut self, id: MagazineId, name: impl Into<String>) -> Result<()> {
        self.magazines.update_magazine(id, |m| m.set_name(name))
    }

    pub fn recategorize_magazine(
        &mut self,
        id: MagazineId,
        category: impl Into<String>,
    ) -> Result<()> {
        self.magazines.update_magazine(id, |m| m.set_category(category))
    }

    /// Point an article at another registered author.
    pub fn reassign_author(&mut self, article_id: ArticleId, author_id: AuthorId) -> Result<()> {
        self.require_author(author_id)?;
        let article = self
            .articles
            .find_by_id_mut(article_id)
            .ok_or(ValidationError::UnknownArticle { id: article_id })?;
        article.set_author(author_id);
        debug!(article_id = %article_id, author_id = %author_id, "article author reassigned");
        Ok(())
    }

    /// Point an article at another registered magazine.
    pub fn reassign_magazine(
        &mut self,
        article_id: ArticleId,
        magazine_id: MagazineId,
    ) -> Result<()> {
        self.require_magazine(magazine_id)?;
        let article = self
            .articles
            .find_by_id_mut(article_id)
            .ok_or(ValidationError::UnknownArticle { id: article_id })?;
        article.set_magazine(magazine_id);
        debug!(article_id = %article_id, magazine_id = %magazine_id, "article magazine reassigned");
        Ok(())
    }

    fn require_author(&self, id: AuthorId) -> Result<()> {
        if !self.authors.contains(id) {
            warn!(author_id = %id, "rejected: author not registered");
            return Err(ValidationError::UnknownAuthor { id });
        }
        Ok(())
    }

    fn require_magazine(&self, id: MagazineId) -> Result<()> {
        if !self.magazines.contains(id) {
            warn!(magazine_id = %id, "rejected: magazine not registered");
            return Err(ValidationError::UnknownMagazine { id });
        }
        Ok(())
    }

    // ========================================================================
    // AUTHOR QUERIES
    // ========================================================================

    /// Articles written by the author, in registration order.
    pub fn author_articles(&self, author_id: AuthorId) -> Vec<&Article> {
        self.articles.by_author(author_id)
    }

    /// Unique magazines the author has written for, first appearance first.
    pub fn author_magazines(&self, author_id: AuthorId) -> Vec<&Magazine> {
        let mut seen = HashSet::new();
        self.author_articles(author_id)
            .into_iter()
            .map(|a| a.magazine_id())
            .filter(|id| seen.insert(*id))
            .filter_map(|id| self.magazines.find_by_id(id))
            .collect()
    }

    /// Unique categories of the author's magazines, or `None` when the author
    /// has not written for any magazine.
    pub fn topic_areas(&self, author_id: AuthorId) -> Option<Vec<String>> {
        let magazines = self.author_magazines(author_id);
        if magazines.is_empty() {
            return None;
        }

        let mut seen = HashSet::new();
        Some(
            magazines
                .into_iter()
                .map(|m| m.category())
                .filter(|category| seen.insert(*category))
                .map(str::to_string)
                .collect(),
        )
    }

    // ========================================================================
    // MAGAZINE QUERIES
    // ========================================================================

    /// Articles published in the magazine, in registration order.
    pub fn magazine_articles(&self, magazine_id: MagazineId) -> Vec<&Article> {
        self.articles.by_magazine(magazine_id)
    }

    /// Unique authors with at least one article in the magazine.
    pub fn contributors(&self, magazine_id: MagazineId) -> Vec<&Author> {
        let mut seen = HashSet::new();
        self.magazine_articles(magazine_id)
            .into_iter()
            .map(|a| a.author_id())
            .filter(|id| seen.insert(*id))
            .filter_map(|id| self.authors.find_by_id(id))
            .collect()
    }

    /// Titles of the magazine's articles, or `None` when it has none.
    pub fn article_titles(&self, magazine_id: MagazineId) -> Option<Vec<&str>> {
        let articles = self.magazine_articles(magazine_id);
        if articles.is_empty() {
            return None;
        }
        Some(articles.into_iter().map(|a| a.title()).collect())
    }

    /// Contributors with more than `CONTRIBUTING_AUTHOR_THRESHOLD` articles in
    /// the magazine, or `None` when there are none. Order is not guaranteed.
    pub fn contributing_authors(&self, magazine_id: MagazineId) -> Option<Vec<&Author>> {
        let mut counts: HashMap<AuthorId, usize> = HashMap::new();
        for article in self.magazine_articles(magazine_id) {
            *counts.entry(article.author_id()).or_insert(0) += 1;
        }

        let authors: Vec<&Author> = self
            .contributors(magazine_id)
            .into_iter()
            .filter(|author| {
                counts.get(&author.id()).copied().unwrap_or(0) > CONTRIBUTING_AUTHOR_THRESHOLD
            })
            .collect();

        if authors.is_empty() {
            return None;
        }
        Some(authors)
    }

    /// Magazine with the most articles, or `None` when no article exists.
    ///
    /// Ties go to the magazine registered first.
    pub fn top_publisher(&self) -> Option<&Magazine> {
        if self.articles.is_empty() {
            return None;
        }

        let mut best: Option<(&Magazine, usize)> = None;
        for magazine in self.magazines.all_magazines() {
            let count = self.magazine_articles(magazine.id()).len();
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((magazine, count)),
            }
        }
        best.map(|(magazine, _)| magazine)
    }
}

// ============================================================================
// TESTS
// ============================================================================
