//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for catalog callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::book::{Book, BookId};
use crate::repo::book_repo::{BookListQuery, BookRepository, RepoResult};

/// Use-case service wrapper for catalog CRUD operations.
pub struct CatalogService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> CatalogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a book to the catalog and returns its store-assigned identifier.
    ///
    /// # Contract
    /// - Either field may be absent; duplicates of existing records are valid.
    /// - The returned id is strictly greater than any previously assigned id.
    pub fn add_book(&self, title: Option<&str>, author: Option<&str>) -> RepoResult<BookId> {
        self.repo.create_book(title, author)
    }

    /// Gets one book by identifier.
    pub fn get_book(&self, id: BookId) -> RepoResult<Option<Book>> {
        self.repo.get_book(id)
    }

    /// Lists books in insertion order using filter and pagination options.
    pub fn list_books(&self, query: &BookListQuery) -> RepoResult<Vec<Book>> {
        self.repo.list_books(query)
    }

    /// Updates an existing book by its stable identifier.
    ///
    /// Returns repository-level not-found errors unchanged.
    pub fn update_book(&self, book: &Book) -> RepoResult<()> {
        self.repo.update_book(book)
    }

    /// Removes a book by identifier. The identifier is never reallocated.
    pub fn remove_book(&self, id: BookId) -> RepoResult<()> {
        self.repo.delete_book(id)
    }
}
