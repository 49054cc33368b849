//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `bookshelf_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use bookshelf_core::db::{open_db, open_db_in_memory};
use bookshelf_core::{BookListQuery, BookRepository, SqliteBookRepository};
use std::process::ExitCode;

fn main() -> ExitCode {
    // An optional path argument bootstraps (or reopens) a file-backed
    // catalog; without it the probe runs against an in-memory store.
    let conn = match std::env::args().nth(1) {
        Some(path) => open_db(path),
        None => open_db_in_memory(),
    };

    let conn = match conn {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("bookshelf: bootstrap failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    let repo = SqliteBookRepository::new(&conn);
    let books = match repo.list_books(&BookListQuery::default()) {
        Ok(books) => books,
        Err(err) => {
            eprintln!("bookshelf: listing failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("bookshelf_core version={}", bookshelf_core::core_version());
    for book in &books {
        println!(
            "{:>4}  {} by {}",
            book.id,
            book.display_title(),
            book.display_author()
        );
    }

    ExitCode::SUCCESS
}
