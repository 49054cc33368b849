//! SQLite migration registry and executor.
//!
//! # Responsibility
//! - Register schema migrations and seed data in strictly increasing order.
//! - Apply pending migrations atomically.
//! - Detect foreign `books` relations before touching them.
//!
//! # Invariants
//! - `version` values must remain monotonic.
//! - Applied migration version is mirrored to `PRAGMA user_version`.
//! - Seed rows are loaded at most once per store lifetime.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        sql: include_str!("0001_books.sql"),
    },
    Migration {
        version: 2,
        sql: include_str!("0002_seed.sql"),
    },
];

/// Expected shape of the `books` relation: (name, declared type, is primary key),
/// in column order.
const BOOKS_COLUMNS: &[(&str, &str, bool)] = &[
    ("id", "INTEGER", true),
    ("title", "TEXT", false),
    ("author", "TEXT", false),
];

/// Returns the latest migration version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Applies all pending migrations on the provided connection.
///
/// A store at version 0 that already carries a `books` relation was created
/// by someone else. If its shape matches ours it is adopted as-is (stamped
/// to the latest version, seed rows skipped); otherwise the bootstrap fails
/// with [`DbError::SchemaConflict`].
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let current_version = current_user_version(conn)?;
    let latest = latest_version();

    if current_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: latest,
        });
    }

    if current_version == latest {
        return Ok(());
    }

    if current_version == 0 && table_exists(conn, "books")? {
        check_books_shape(conn)?;
        // Foreign but compatible relation. Stamp it ours without re-creating
        // the table or loading seed rows a second time.
        conn.execute_batch(&format!("PRAGMA user_version = {latest};"))?;
        return Ok(());
    }

    let tx = conn.transaction()?;
    for migration in MIGRATIONS {
        if migration.version <= current_version {
            continue;
        }

        tx.execute_batch(migration.sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
    }
    tx.commit()?;

    Ok(())
}

fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

fn table_exists(conn: &Connection, table_name: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table_name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn check_books_shape(conn: &Connection) -> DbResult<()> {
    let mut stmt = conn.prepare("PRAGMA table_info(books);")?;
    let mut rows = stmt.query([])?;
    let mut actual: Vec<(String, String, bool)> = Vec::new();

    while let Some(row) = rows.next()? {
        let name: String = row.get("name")?;
        let declared_type: String = row.get("type")?;
        let pk: i64 = row.get("pk")?;
        actual.push((name, declared_type.to_ascii_uppercase(), pk != 0));
    }

    if actual.len() != BOOKS_COLUMNS.len() {
        return Err(DbError::SchemaConflict {
            table: "books",
            details: format!(
                "expected {} columns, found {}",
                BOOKS_COLUMNS.len(),
                actual.len()
            ),
        });
    }

    for (found, expected) in actual.iter().zip(BOOKS_COLUMNS) {
        if found.0 != expected.0 || found.1 != expected.1 || found.2 != expected.2 {
            return Err(DbError::SchemaConflict {
                table: "books",
                details: format!(
                    "column `{}` ({}, pk={}) does not match expected `{}` ({}, pk={})",
                    found.0, found.1, found.2, expected.0, expected.1, expected.2
                ),
            });
        }
    }

    Ok(())
}
