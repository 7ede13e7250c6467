//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `casetrack_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("casetrack_core version={}", casetrack_core::core_version());
}
