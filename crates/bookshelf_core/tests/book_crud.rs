use bookshelf_core::db::open_db_in_memory;
use bookshelf_core::{
    Book, BookListQuery, BookRepository, CatalogService, RepoError, SqliteBookRepository,
};

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let id = repo
        .create_book(Some("The Rust Programming Language"), Some("Klabnik, Steve"))
        .unwrap();

    let loaded = repo.get_book(id).unwrap().unwrap();
    assert_eq!(loaded.id, id);
    assert_eq!(
        loaded.title.as_deref(),
        Some("The Rust Programming Language")
    );
    assert_eq!(loaded.author.as_deref(), Some("Klabnik, Steve"));
}

#[test]
fn create_accepts_absent_title_and_author() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let id = repo.create_book(None, None).unwrap();

    let loaded = repo.get_book(id).unwrap().unwrap();
    assert_eq!(loaded.title, None);
    assert_eq!(loaded.author, None);
    assert_eq!(loaded.display_title(), "(untitled)");
}

#[test]
fn get_missing_book_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    assert!(repo.get_book(9999).unwrap().is_none());
}

#[test]
fn update_existing_book() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let id = repo.create_book(Some("draft title"), None).unwrap();

    let book = Book::new(
        id,
        Some("Hands-on Rust".to_string()),
        Some("Wolverson, Herbert".to_string()),
    );
    repo.update_book(&book).unwrap();

    let loaded = repo.get_book(id).unwrap().unwrap();
    assert_eq!(loaded, book);
}

#[test]
fn update_missing_book_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let book = Book::new(9999, Some("ghost".to_string()), None);
    match repo.update_book(&book).unwrap_err() {
        RepoError::NotFound(id) => assert_eq!(id, 9999),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn delete_existing_book_removes_it() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let id = repo.create_book(Some("short lived"), None).unwrap();
    repo.delete_book(id).unwrap();

    assert!(repo.get_book(id).unwrap().is_none());
}

#[test]
fn delete_missing_book_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    match repo.delete_book(9999).unwrap_err() {
        RepoError::NotFound(id) => assert_eq!(id, 9999),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn identifiers_are_never_reused_after_delete() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let first = repo.create_book(Some("one"), None).unwrap();
    repo.delete_book(first).unwrap();

    let second = repo.create_book(Some("two"), None).unwrap();
    assert!(second > first);
}

#[test]
fn list_books_orders_by_insertion_and_paginates() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    // Two seed rows are already present.
    repo.create_book(Some("third"), Some("A, Author")).unwrap();
    repo.create_book(Some("fourth"), Some("B, Author")).unwrap();

    let all = repo.list_books(&BookListQuery::default()).unwrap();
    assert_eq!(all.len(), 4);
    for pair in all.windows(2) {
        assert!(pair[0].id < pair[1].id);
    }

    let page = repo
        .list_books(&BookListQuery {
            author: None,
            limit: Some(2),
            offset: 2,
        })
        .unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].title.as_deref(), Some("third"));
    assert_eq!(page[1].title.as_deref(), Some("fourth"));
}

#[test]
fn list_books_filters_by_exact_author() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    repo.create_book(Some("extra"), Some("Klabnik, Steve"))
        .unwrap();

    let query = BookListQuery {
        author: Some("Klabnik, Steve".to_string()),
        ..BookListQuery::default()
    };
    let books = repo.list_books(&query).unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title.as_deref(), Some("extra"));
}

#[test]
fn service_delegates_catalog_crud_to_repository() {
    let conn = open_db_in_memory().unwrap();
    let service = CatalogService::new(SqliteBookRepository::new(&conn));

    let id = service
        .add_book(Some("Rust Brain Teasers"), Some("Wolverson, Herbert"))
        .unwrap();

    let loaded = service.get_book(id).unwrap().unwrap();
    assert_eq!(loaded.title.as_deref(), Some("Rust Brain Teasers"));

    let mut book = loaded;
    book.title = Some("Rust Brain Teasers, 2nd ed.".to_string());
    service.update_book(&book).unwrap();

    let listed = service.list_books(&BookListQuery::default()).unwrap();
    assert_eq!(listed.len(), 3);

    service.remove_book(id).unwrap();
    assert!(service.get_book(id).unwrap().is_none());
}
