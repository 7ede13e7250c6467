//! Snapshot export, destructive import and full reset.
//!
//! # Responsibility
//! - Serialize the complete store into one JSON-shaped document.
//! - Replace all persisted state from a snapshot (recreate-on-import).
//! - Wipe the store back to an empty, seeded state.
//!
//! # Invariants
//! - Export is a pure read; no mutation happens on that path.
//! - Import and reset rebuild the schema from scratch and reseed the case
//!   counter to 1. The counter is not derived from imported case ids, so
//!   ids allocated after an import can collide with imported ones.

use crate::clock::now_iso;
use crate::db::migrations::reset_database;
use crate::model::case::Case;
use crate::model::catalog::Catalog;
use crate::model::followup::Followup;
use crate::model::party::{Company, Responsible};
use crate::repo::case_repo::CaseRepository;
use crate::repo::followup_repo::FollowupRepository;
use crate::repo::meta_repo::MetaRepository;
use crate::repo::party_repo::{CompanyRepository, ResponsibleRepository};
use crate::repo::{SqliteStore, StoreError, StoreResult};
use log::info;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

/// Complete serialized contents of the store.
///
/// Field names match the camelCase export document; unknown or missing
/// collections deserialize to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub exported_at: String,
    #[serde(default)]
    pub catalog: Catalog,
    #[serde(default)]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub responsibles: Vec<Responsible>,
    #[serde(default)]
    pub cases: Vec<Case>,
    #[serde(default)]
    pub followups: Vec<Followup>,
}

impl Snapshot {
    /// Serializes the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> StoreResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| StoreError::InvalidData(format!("snapshot serialization: {err}")))
    }

    /// Parses a snapshot from its JSON form.
    pub fn from_json(text: &str) -> StoreResult<Snapshot> {
        serde_json::from_str(text)
            .map_err(|err| StoreError::InvalidData(format!("snapshot parse: {err}")))
    }
}

/// Reads every collection into one timestamped snapshot.
pub fn export_snapshot(conn: &Connection) -> StoreResult<Snapshot> {
    let store = SqliteStore::try_new(conn)?;
    let snapshot = Snapshot {
        exported_at: now_iso(),
        catalog: Catalog::fixed(),
        companies: store.list_companies(),
        responsibles: store.list_responsibles(),
        cases: store.list_cases(),
        followups: store.list_followups(),
    };
    info!(
        "event=snapshot_export module=snapshot status=ok cases={} followups={} companies={} responsibles={}",
        snapshot.cases.len(),
        snapshot.followups.len(),
        snapshot.companies.len(),
        snapshot.responsibles.len()
    );
    Ok(snapshot)
}

/// Destructively replaces all persisted state with the snapshot contents.
///
/// The store is dropped and recreated empty, the counter reseeded to 1,
/// then every record is written back. Insertion order is irrelevant;
/// duplicate keys resolve last-write-wins.
pub fn import_snapshot(conn: &mut Connection, snapshot: &Snapshot) -> StoreResult<()> {
    reset_database(conn)?;

    let store = SqliteStore::try_new(conn)?;
    store.seed_counter()?;

    for company in &snapshot.companies {
        store.put_company(company)?;
    }
    for responsible in &snapshot.responsibles {
        store.put_responsible(responsible)?;
    }
    for case in &snapshot.cases {
        store.put_case(case)?;
    }
    for followup in &snapshot.followups {
        store.put_followup(followup)?;
    }

    info!(
        "event=snapshot_import module=snapshot status=ok cases={} followups={} companies={} responsibles={}",
        snapshot.cases.len(),
        snapshot.followups.len(),
        snapshot.companies.len(),
        snapshot.responsibles.len()
    );
    Ok(())
}

/// Discards all persisted state and reseeds the counter to 1.
pub fn reset_store(conn: &mut Connection) -> StoreResult<()> {
    reset_database(conn)?;
    let store = SqliteStore::try_new(conn)?;
    store.seed_counter()?;
    info!("event=store_reset module=snapshot status=ok");
    Ok(())
}
