//! Metadata repository and the case-id sequence generator.
//!
//! # Responsibility
//! - Persist the single-key metadata collection.
//! - Allocate monotonically increasing, zero-padded case identifiers.
//!
//! # Invariants
//! - `seed_counter` never resets an existing counter.
//! - `next_case_id` persists the incremented counter before returning the
//!   pre-increment value, so durability precedes handout.
//! - No concurrent-writer protection exists; the store has exactly one
//!   writer at a time.

use crate::repo::{SqliteStore, StoreResult};
use rusqlite::{params, OptionalExtension};

const NEXT_ID_KEY: &str = "nextId";
const CASE_ID_WIDTH: usize = 5;

/// Repository interface for the metadata collection.
///
/// `seed_counter` and `next_case_id` are provided on top of the raw k/v
/// contract, so every implementation shares the sequence semantics.
pub trait MetaRepository {
    /// Point lookup of one metadata value. Failures propagate.
    fn get_meta(&self, key: &str) -> StoreResult<Option<i64>>;
    /// Creates or replaces one metadata value. Failures propagate.
    fn set_meta(&self, key: &str, value: i64) -> StoreResult<()>;

    /// Initializes the case-id counter to 1 only when absent.
    ///
    /// Safe to call on every startup; an in-progress sequence is never
    /// reset.
    fn seed_counter(&self) -> StoreResult<()> {
        if self.get_meta(NEXT_ID_KEY)?.is_none() {
            self.set_meta(NEXT_ID_KEY, 1)?;
        }
        Ok(())
    }

    /// Allocates the next case id as a 5-digit zero-padded decimal string.
    ///
    /// Reads the counter (defaulting to 1 when absent), durably writes
    /// back `counter + 1`, and returns the pre-increment value.
    fn next_case_id(&self) -> StoreResult<String> {
        let current = self.get_meta(NEXT_ID_KEY)?.unwrap_or(1);
        self.set_meta(NEXT_ID_KEY, current + 1)?;
        Ok(format!("{current:0width$}", width = CASE_ID_WIDTH))
    }
}

impl MetaRepository for SqliteStore<'_> {
    fn get_meta(&self, key: &str) -> StoreResult<Option<i64>> {
        let value = self
            .conn
            .query_row("SELECT v FROM meta WHERE k = ?1;", [key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    fn set_meta(&self, key: &str, value: i64) -> StoreResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO meta (k, v) VALUES (?1, ?2);",
            params![key, value],
        )?;
        Ok(())
    }
}
