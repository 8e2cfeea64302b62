// ✍️ Author Entity - Stable identity + write-once name
//
// "Author name is set once, Author UUID is IDENTITY"
//
// - Name is validated at construction and has no setter afterwards
// - Articles point at authors through AuthorId, never through the name
// - Registry is append-only: authors are never removed

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;
use uuid::Uuid;

use crate::error::{Result, ValidationError};

/// Shortest accepted author name, in characters.
pub const AUTHOR_NAME_MIN_LEN: usize = 1;

// ============================================================================
// AUTHOR ID
// ============================================================================

/// Stable identity of an Author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(Uuid);

impl AuthorId {
    pub fn new() -> Self {
        AuthorId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for AuthorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// AUTHOR ENTITY
// ============================================================================

/// Author Entity
///
/// Identity: `id` (never changes)
/// Value: `name` (validated once, then read-only)
///
/// The only way to build one is `Author::new`:
///
/// ```
/// use magazine_catalog::Author;
///
/// let author = Author::new("Ama").unwrap();
/// assert_eq!(author.name(), "Ama");
/// ```
///
/// The name cannot be reassigned afterwards:
///
/// ```compile_fail
/// use magazine_catalog::Author;
///
/// let mut author = Author::new("Ama").unwrap();
/// author.name = String::from("Kofi");
/// ```
///
/// Nor can an author be decoded from JSON, which would skip validation:
///
/// ```compile_fail
/// use magazine_catalog::Author;
///
/// let author: Author = serde_json::from_str(r#"{"name": ""}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Author {
    id: AuthorId,
    name: String,
    created_at: DateTime<Utc>,
}

impl Author {
    /// Create a new author. Fails when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;

        Ok(Author {
            id: AuthorId::new(),
            name,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.chars().count() < AUTHOR_NAME_MIN_LEN {
        warn!("rejected author: empty name");
        return Err(ValidationError::EmptyAuthorName);
    }
    Ok(())
}

// ============================================================================
// AUTHOR REGISTRY
// ============================================================================

/// Registry of every author created in a catalog (append-only, never delete)
#[derive(Debug, Default)]
pub struct AuthorRegistry {
    authors: Vec<Author>,
}

impl AuthorRegistry {
    pub fn new() -> Self {
        AuthorRegistry {
            authors: Vec::new(),
        }
    }

    /// Register a new author (append-only)
    pub fn register(&mut self, author: Author) -> AuthorId {
        let id = author.id;
        self.authors.push(author);
        id
    }

    pub fn find_by_id(&self, id: AuthorId) -> Option<&Author> {
        self.authors.iter().find(|a| a.id == id)
    }

    pub fn contains(&self, id: AuthorId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// All authors in registration order
    pub fn all_authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn count(&self) -> usize {
        self.authors.len()
    }

    /// Harness-level teardown; only `Catalog::reset` calls this.
    pub(crate) fn clear(&mut self) {
        self.authors.clear();
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_creation() {
        let author = Author::new("Ama").unwrap();

        assert_eq!(author.name(), "Ama");
        assert!(!author.id().as_uuid().is_nil());
        assert!(author.created_at() <= Utc::now());
    }

    #[test]
    fn test_author_rejects_empty_name() {
        let result = Author::new("");
        assert_eq!(result.unwrap_err(), ValidationError::EmptyAuthorName);
    }

    #[test]
    fn test_single_character_name_is_valid() {
        assert!(Author::new("Q").is_ok());
        // Multi-byte characters count once
        assert!(Author::new("é").is_ok());
    }

    #[test]
    fn test_authors_with_same_name_are_distinct() {
        let a = Author::new("Kofi").unwrap();
        let b = Author::new("Kofi").unwrap();

        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn test_registry_register_and_find() {
        let mut registry = AuthorRegistry::new();
        assert_eq!(registry.count(), 0);

        let id = registry.register(Author::new("Ama").unwrap());
        registry.register(Author::new("Kofi").unwrap());

        assert_eq!(registry.count(), 2);
        assert!(registry.contains(id));
        assert_eq!(registry.find_by_id(id).unwrap().name(), "Ama");
        assert!(registry.find_by_id(AuthorId::new()).is_none());
    }

    #[test]
    fn test_registry_preserves_insertion_order() {
        let mut registry = AuthorRegistry::new();
        for name in ["first", "second", "third"] {
            registry.register(Author::new(name).unwrap());
        }

        let names: Vec<&str> = registry.all_authors().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_author_serializes_id_as_string() {
        let author = Author::new("Ama").unwrap();
        let json = serde_json::to_value(&author).unwrap();

        assert_eq!(json["id"], author.id().to_string());
        assert_eq!(json["name"], "Ama");
    }
}
