// 📝 Article Entity - Link between one Author and one Magazine
//
// - author_id and magazine_id are foreign keys into the catalog's registries
// - Title (5-50 chars) is validated once and has no setter
// - Foreign keys may be reassigned; the catalog checks they resolve first

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;
use uuid::Uuid;

use super::{AuthorId, MagazineId};
use crate::error::{Result, ValidationError};

pub const TITLE_MIN_LEN: usize = 5;
pub const TITLE_MAX_LEN: usize = 50;

// ============================================================================
// ARTICLE ID
// ============================================================================

/// Stable identity of an Article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(Uuid);

impl ArticleId {
    pub fn new() -> Self {
        ArticleId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ArticleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ARTICLE ENTITY
// ============================================================================

/// Article Entity
///
/// Identity: `id` (never changes)
/// Value: `title` (validated once, then read-only)
/// Relationships: `author_id` → Author, `magazine_id` → Magazine
///
/// ```
/// use magazine_catalog::{Article, AuthorId, MagazineId};
///
/// let article = Article::new(AuthorId::new(), MagazineId::new(), "A Very Good Title").unwrap();
/// assert_eq!(article.title(), "A Very Good Title");
/// ```
///
/// The title is write-once:
///
/// ```compile_fail
/// use magazine_catalog::{Article, AuthorId, MagazineId};
///
/// let (author, magazine) = (AuthorId::new(), MagazineId::new());
/// let mut article = Article::new(author, magazine, "A Very Good Title").unwrap();
/// article.title = String::from("Another Title");
/// ```
///
/// and articles are never decoded from JSON:
///
/// ```compile_fail
/// use magazine_catalog::Article;
///
/// let article: Article = serde_json::from_str(r#"{"title": "x"}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    id: ArticleId,
    author_id: AuthorId,
    magazine_id: MagazineId,
    title: String,
    created_at: DateTime<Utc>,
}

impl Article {
    /// Create a new article. Only the title is checked here; whether the
    /// ids resolve is decided by whoever owns the registries.
    pub fn new(
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self> {
        let title = title.into();
        validate_title(&title)?;

        Ok(Article {
            id: ArticleId::new(),
            author_id,
            magazine_id,
            title,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn author_id(&self) -> AuthorId {
        self.author_id
    }

    pub fn magazine_id(&self) -> MagazineId {
        self.magazine_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn set_author(&mut self, author_id: AuthorId) {
        self.author_id = author_id;
    }

    pub(crate) fn set_magazine(&mut self, magazine_id: MagazineId) {
        self.magazine_id = magazine_id;
    }
}

fn validate_title(title: &str) -> Result<()> {
    let len = title.chars().count();
    if !(TITLE_MIN_LEN..=TITLE_MAX_LEN).contains(&len) {
        warn!(len, "rejected article title");
        return Err(ValidationError::TitleLength { len });
    }
    Ok(())
}

// ============================================================================
// ARTICLE REGISTRY
// ============================================================================

/// Registry of every article created in a catalog (append-only, never delete)
#[derive(Debug, Default)]
pub struct ArticleRegistry {
    articles: Vec<Article>,
}

impl ArticleRegistry {
    pub fn new() -> Self {
        ArticleRegistry {
            articles: Vec::new(),
        }
    }

    /// Register a new article (append-only)
    pub fn register(&mut self, article: Article) -> ArticleId {
        let id = article.id;
        self.articles.push(article);
        id
    }

    pub fn find_by_id(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    pub(crate) fn find_by_id_mut(&mut self, id: ArticleId) -> Option<&mut Article> {
        self.articles.iter_mut().find(|a| a.id == id)
    }

    /// All articles in registration order
    pub fn all_articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn count(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Articles written by `author_id`, in registration order
    pub fn by_author(&self, author_id: AuthorId) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| a.author_id == author_id)
            .collect()
    }

    /// Articles published in `magazine_id`, in registration order
    pub fn by_magazine(&self, magazine_id: MagazineId) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| a.magazine_id == magazine_id)
            .collect()
    }

    /// Harness-level teardown; only `Catalog::reset` calls this.
    pub(crate) fn clear(&mut self) {
        self.articles.clear();
    }
}

// ============================================================================
// TESTS
// ============================================================================
