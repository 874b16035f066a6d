//! SQLite persistence for extracted documents.
//!
//! One append-only table, `documents (nome_arquivo, texto)`. Rows are never
//! updated or deleted here, and nothing enforces filename uniqueness:
//! uploading the same file twice appends two rows.

use std::path::Path;

use rusqlite::{Connection, params};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Connection open or SQL execution failure.
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),
    /// The task running the store call was cancelled or panicked.
    #[error("{0}")]
    Task(String),
}

/// Open a new connection to the database file at `path`.
///
/// Every caller gets its own connection; none are pooled or reused across
/// requests. Open failures propagate.
pub fn connect(path: &Path) -> Result<Connection, StoreError> {
    Ok(Connection::open(path)?)
}

/// Create the documents table when missing. Run once at startup.
pub fn init_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS documents (
            nome_arquivo TEXT NOT NULL,
            texto TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Insert one extracted document row and commit.
///
/// Opens a fresh connection, binds both values as parameters (never
/// interpolated into the SQL) and executes a single autocommitted INSERT.
/// Statement and connection are released by drop on success and on error
/// propagation alike; there is no rollback and no retry.
pub fn save_document(db_path: &Path, nome_arquivo: &str, texto: &str) -> Result<(), StoreError> {
    let conn = connect(db_path)?;
    conn.execute(
        "INSERT INTO documents (nome_arquivo, texto) VALUES (?1, ?2)",
        params![nome_arquivo, texto],
    )?;
    tracing::debug!(file = nome_arquivo, chars = texto.len(), "document row inserted");
    Ok(())
}
