//! Domain model for the case-tracking core.
//!
//! # Responsibility
//! - Define canonical record shapes shared by storage, services and the
//!   snapshot document.
//!
//! # Invariants
//! - Every record is identified by a stable string key owned by its
//!   collection.
//! - Serialized field names are the snapshot document's names; storage and
//!   export never disagree on shape.

pub mod case;
pub mod catalog;
pub mod followup;
pub mod party;
