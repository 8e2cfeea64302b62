// Magazine Catalog - Core Library
// Authors write Articles published in Magazines.
// Exposes the entity models and the catalog that owns their registries.

pub mod catalog;
pub mod entities;
pub mod error;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogSnapshot, CONTRIBUTING_AUTHOR_THRESHOLD};
pub use entities::{
    Article, ArticleId, ArticleRegistry,
    Author, AuthorId, AuthorRegistry,
    Magazine, MagazineId, MagazineRegistry,
};
pub use error::{Result, ValidationError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
