use bookshelf_core::db::open_db_in_memory;
use bookshelf_core::{BookListQuery, BookRepository, SqliteBookRepository};

#[test]
fn bootstrap_loads_exactly_the_two_seed_rows_in_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let books = repo.list_books(&BookListQuery::default()).unwrap();
    assert_eq!(books.len(), 2);

    assert_eq!(books[0].title.as_deref(), Some("Hands-on Rust"));
    assert_eq!(books[0].author.as_deref(), Some("Wolverson, Herbert"));
    assert_eq!(books[1].title.as_deref(), Some("Rust Brain Teasers"));
    assert_eq!(books[1].author.as_deref(), Some("Wolverson, Herbert"));

    // First seed row gets the lower identifier.
    assert!(books[0].id < books[1].id);
}

#[test]
fn inserting_after_seed_assigns_a_strictly_greater_identifier() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let seeded = repo.list_books(&BookListQuery::default()).unwrap();
    let max_seeded = seeded.iter().map(|book| book.id).max().unwrap();

    let id = repo
        .create_book(Some("Rust Brain Teasers"), Some("Wolverson, Herbert"))
        .unwrap();
    assert!(id > max_seeded);

    // Duplicate title/author pairs are permitted.
    let books = repo.list_books(&BookListQuery::default()).unwrap();
    assert_eq!(books.len(), 3);
}

#[test]
fn seed_author_filter_matches_both_rows() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let query = BookListQuery {
        author: Some("Wolverson, Herbert".to_string()),
        ..BookListQuery::default()
    };
    let books = repo.list_books(&query).unwrap();
    assert_eq!(books.len(), 2);
}
