// Validation errors for the catalog
// Every rejected construction or mutation maps to exactly one variant.

use crate::entities::{ArticleId, AuthorId, MagazineId};
use serde::{Deserialize, Serialize};

/// The single error kind of the catalog.
///
/// Returned synchronously by the failing constructor or setter. A call that
/// returns this error has not mutated anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "error_kind", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("author name must not be empty")]
    EmptyAuthorName,

    #[error("magazine name must be 2-16 characters, got {len}")]
    MagazineNameLength { len: usize },

    #[error("magazine category must not be empty")]
    EmptyCategory,

    #[error("article title must be 5-50 characters, got {len}")]
    TitleLength { len: usize },

    #[error("author not found: {id}")]
    UnknownAuthor { id: AuthorId },

    #[error("magazine not found: {id}")]
    UnknownMagazine { id: MagazineId },

    #[error("article not found: {id}")]
    UnknownArticle { id: ArticleId },
}

pub type Result<T> = std::result::Result<T, ValidationError>;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_length() {
        let err = ValidationError::TitleLength { len: 3 };
        assert_eq!(err.to_string(), "article title must be 5-50 characters, got 3");

        let err = ValidationError::MagazineNameLength { len: 20 };
        assert!(err.to_string().contains("got 20"));
    }

    #[test]
    fn test_unknown_ids_render_uuid() {
        let id = AuthorId::new();
        let err = ValidationError::UnknownAuthor { id };
        assert!(err.to_string().contains(&id.to_string()));
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let json = serde_json::to_value(ValidationError::EmptyCategory).unwrap();
        assert_eq!(json["error_kind"], "empty_category");

        let id = MagazineId::new();
        let json = serde_json::to_value(ValidationError::UnknownMagazine { id }).unwrap();
        assert_eq!(json["error_kind"], "unknown_magazine");
        assert_eq!(json["id"], id.to_string());
    }
}
