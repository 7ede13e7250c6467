//! Read-only query and filter layer.
//!
//! # Responsibility
//! - Filter and sort in-memory snapshots of the collections.
//! - Resolve case references to directory names through an explicit cache.
//!
//! # Invariants
//! - Nothing in this module mutates the store.
//! - Missing references resolve to absent, never to an error.

pub mod cases;
pub mod directory;
