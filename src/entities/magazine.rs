// 📰 Magazine Entity - Stable identity + re-validated values
//
// "Magazine name is a VALUE (can change), Magazine UUID is IDENTITY (never changes)"
//
// - Name (2-16 chars) and category (non-empty) may be reassigned at any time
// - Every assignment goes through the same check as construction
// - A rejected assignment keeps the previous value

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{Result, ValidationError};

pub const MAGAZINE_NAME_MIN_LEN: usize = 2;
pub const MAGAZINE_NAME_MAX_LEN: usize = 16;

// ============================================================================
// MAGAZINE ID
// ============================================================================

/// Stable identity of a Magazine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MagazineId(Uuid);

impl MagazineId {
    pub fn new() -> Self {
        MagazineId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for MagazineId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MagazineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// MAGAZINE ENTITY
// ============================================================================

/// Magazine Entity
///
/// Identity: `id` (never changes)
/// Values: `name`, `category` (can change, always valid)
///
/// Changes go through the validating setters:
///
/// ```
/// use magazine_catalog::Magazine;
///
/// let mut magazine = Magazine::new("TechLife", "Tech").unwrap();
/// assert!(magazine.set_name("ThisNameIsWayTooLong").is_err());
/// assert_eq!(magazine.name(), "TechLife");
/// ```
///
/// Decoding from JSON would bypass them, so it is not supported:
///
/// ```compile_fail
/// use magazine_catalog::Magazine;
///
/// let magazine: Magazine =
///     serde_json::from_str(r#"{"name": "ThisNameIsWayTooLong", "category": ""}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
    created_at: DateTime<Utc>,
}

impl Magazine {
    /// Create a new magazine, validating both fields.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let category = category.into();
        validate_name(&name)?;
        validate_category(&category)?;

        Ok(Magazine {
            id: MagazineId::new(),
            name,
            category,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Rename the magazine. On error the old name is kept.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        validate_name(&name)?;
        debug!(magazine_id = %self.id, old = %self.name, new = %name, "magazine renamed");
        self.name = name;
        Ok(())
    }

    /// Change the category. On error the old category is kept.
    pub fn set_category(&mut self, category: impl Into<String>) -> Result<()> {
        let category = category.into();
        validate_category(&category)?;
        debug!(
            magazine_id = %self.id,
            old = %self.category,
            new = %category,
            "magazine recategorized"
        );
        self.category = category;
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<()> {
    let len = name.chars().count();
    if !(MAGAZINE_NAME_MIN_LEN..=MAGAZINE_NAME_MAX_LEN).contains(&len) {
        warn!(len, "rejected magazine name");
        return Err(ValidationError::MagazineNameLength { len });
    }
    Ok(())
}

fn validate_category(category: &str) -> Result<()> {
    if category.is_empty() {
        warn!("rejected magazine category: empty");
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

// ============================================================================
// MAGAZINE REGISTRY
// ============================================================================

/// Registry of every magazine created in a catalog (append-only, never delete)
#[derive(Debug, Default)]
pub struct MagazineRegistry {
    magazines: Vec<Magazine>,
}

impl MagazineRegistry {
    pub fn new() -> Self {
        MagazineRegistry {
            magazines: Vec::new(),
        }
    }

    /// Register a new magazine (append-only)
    pub fn register(&mut self, magazine: Magazine) -> MagazineId {
        let id = magazine.id;
        self.magazines.push(magazine);
        id
    }

    pub fn find_by_id(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines.iter().find(|m| m.id == id)
    }

    pub fn contains(&self, id: MagazineId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Apply a fallible update to one magazine in place.
    ///
    /// Unknown ids are reported as `UnknownMagazine`; errors from `update_fn`
    /// are passed through unchanged.
    pub fn update_magazine<F>(&mut self, id: MagazineId, update_fn: F) -> Result<()>
    where
        F: FnOnce(&mut Magazine) -> Result<()>,
    {
        let magazine = self
            .magazines
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(ValidationError::UnknownMagazine { id })?;
        update_fn(magazine)
    }

    /// All magazines in registration order
    pub fn all_magazines(&self) -> &[Magazine] {
        &self.magazines
    }

    pub fn count(&self) -> usize {
        self.magazines.len()
    }

    /// Harness-level teardown; only `Catalog::reset` calls this.
    pub(crate) fn clear(&mut self) {
        self.magazines.clear();
    }
}

// ============================================================================
// TESTS
// ============================================================================
