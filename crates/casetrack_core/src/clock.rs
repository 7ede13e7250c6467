//! Wall-clock timestamp helpers.
//!
//! # Responsibility
//! - Produce the ISO-8601 UTC strings stamped on records and snapshots.
//!
//! # Invariants
//! - Output is millisecond precision with a `Z` suffix, so lexicographic
//!   order equals chronological order across all stamped fields.

use chrono::{SecondsFormat, Utc};

/// Current UTC instant as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
