//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define per-collection data access contracts for the five stores
//!   (cases, followups, companies, responsibles, meta).
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `put` is create-or-replace and propagates storage failures; point
//!   `get` propagates as well.
//! - Whole-collection reads degrade to empty on storage failure and
//!   deletes degrade to success (idempotent-delete policy). Both paths
//!   log the swallowed error.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod case_repo;
pub mod followup_repo;
pub mod meta_repo;
pub mod party_repo;

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by repository operations.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying SQLite/bootstrap failure.
    Db(DbError),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing from the connection.
    MissingRequiredTable(&'static str),
    /// Persisted data cannot be converted to a valid record.
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "store requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "store requires table `{table}`")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// SQLite-backed store implementing every collection contract.
///
/// One lightweight handle over a migrated connection; the per-collection
/// trait implementations live next to their contracts.
#[derive(Clone, Copy)]
pub struct SqliteStore<'conn> {
    pub(crate) conn: &'conn Connection,
}

impl<'conn> SqliteStore<'conn> {
    /// Constructs a store handle from a migrated connection.
    ///
    /// Rejects connections whose schema version or tables do not match
    /// this binary.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        ensure_store_ready(conn)?;
        Ok(Self { conn })
    }
}

/// Verifies the connection has been migrated and carries every collection.
fn ensure_store_ready(conn: &Connection) -> StoreResult<()> {
    let expected = latest_version();
    let actual: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual != expected {
        return Err(StoreError::UninitializedConnection {
            expected_version: expected,
            actual_version: actual,
        });
    }

    for table in ["cases", "followups", "companies", "responsibles", "meta"] {
        if !table_exists(conn, table)? {
            return Err(StoreError::MissingRequiredTable(table));
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> StoreResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
