//! Book domain model.
//!
//! # Responsibility
//! - Define the canonical catalog record persisted in the `books` relation.
//!
//! # Invariants
//! - `id` is assigned by the store at creation time and never changes.
//! - `title` and `author` carry no uniqueness or non-null constraints;
//!   duplicates and absent values are both valid.
//! - `author` follows "Last, First" by convention only, never structurally.

use serde::{Deserialize, Serialize};

/// Surrogate identifier assigned by the catalog store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type BookId = i64;

/// Canonical catalog record.
///
/// Both text fields stay optional on purpose: the storage contract permits
/// records with either or both absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Store-assigned surrogate key, strictly increasing per insertion order.
    pub id: BookId,
    /// Book title. No uniqueness constraint.
    pub title: Option<String>,
    /// Free-form author string, "Last, First" by convention.
    pub author: Option<String>,
}

impl Book {
    /// Builds a record with a known identifier, typically when rehydrating
    /// a persisted row.
    pub fn new(id: BookId, title: Option<String>, author: Option<String>) -> Self {
        Self { id, title, author }
    }

    /// Returns the title, or a stable placeholder for untitled records.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("(untitled)")
    }

    /// Returns the author, or a stable placeholder for unattributed records.
    pub fn display_author(&self) -> &str {
        self.author.as_deref().unwrap_or("(unknown)")
    }
}
