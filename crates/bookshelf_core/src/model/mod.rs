//! Domain model for the book catalog.
//!
//! # Responsibility
//! - Define the canonical record shape used by core catalog logic.
//!
//! # Invariants
//! - Every catalog record is identified by a store-assigned `BookId`.
//! - Identifiers are never reused, even after a record is removed.

pub mod book;
