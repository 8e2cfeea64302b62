// Entity Models
//
// Each entity has:
// - Stable identity (UUID newtype) that NEVER changes
// - Validated values (write-once or re-validated on every assignment)
// - Append-only registry for lookups

pub mod article;
pub mod author;
pub mod magazine;

pub use article::{Article, ArticleId, ArticleRegistry, TITLE_MAX_LEN, TITLE_MIN_LEN};
pub use author::{Author, AuthorId, AuthorRegistry, AUTHOR_NAME_MIN_LEN};
pub use magazine::{
    Magazine, MagazineId, MagazineRegistry, MAGAZINE_NAME_MAX_LEN, MAGAZINE_NAME_MIN_LEN,
};
