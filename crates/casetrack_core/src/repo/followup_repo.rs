//! Follow-up repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist audit-trail entries keyed by `fid` with a secondary lookup by
//!   owning case.
//!
//! # Invariants
//! - Per-case listing is deterministic: `fecha ASC, fid ASC`.
//! - No per-entry update exists; the trail is append-only.

use crate::model::followup::{Accion, Followup};
use crate::repo::{SqliteStore, StoreError, StoreResult};
use log::warn;
use rusqlite::{params, Row};

const FOLLOWUP_SELECT_SQL: &str = "SELECT
    fid,
    case_id,
    fecha,
    responsable_rid,
    accion,
    nota,
    proximo
FROM followups";

/// Repository interface for the followups collection.
pub trait FollowupRepository {
    /// Creates or replaces one trail entry. Failures propagate.
    fn put_followup(&self, followup: &Followup) -> StoreResult<()>;
    /// Entries owned by one case, ordered by `fecha` ascending.
    /// Storage failures degrade to empty.
    fn list_followups_for_case(&self, case_id: &str) -> Vec<Followup>;
    /// Whole-collection read (export path). Storage failures degrade to
    /// empty.
    fn list_followups(&self) -> Vec<Followup>;
    /// Delete by id. Storage failures degrade to success.
    fn delete_followup(&self, fid: &str);
}

impl FollowupRepository for SqliteStore<'_> {
    fn put_followup(&self, followup: &Followup) -> StoreResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO followups (
                fid,
                case_id,
                fecha,
                responsable_rid,
                accion,
                nota,
                proximo
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                followup.fid,
                followup.case_id,
                followup.fecha,
                followup.responsable_rid,
                followup.accion.as_str(),
                followup.nota,
                followup.proximo,
            ],
        )?;
        Ok(())
    }

    fn list_followups_for_case(&self, case_id: &str) -> Vec<Followup> {
        let query = format!(
            "{FOLLOWUP_SELECT_SQL}
             WHERE case_id = ?1
             ORDER BY fecha ASC, fid ASC;"
        );
        match self.collect_rows(&query, Some(case_id)) {
            Ok(followups) => followups,
            Err(err) => {
                warn!(
                    "event=list_followups module=repo status=degraded case_id={case_id} error={err}"
                );
                Vec::new()
            }
        }
    }

    fn list_followups(&self) -> Vec<Followup> {
        match self.collect_rows(&format!("{FOLLOWUP_SELECT_SQL};"), None) {
            Ok(followups) => followups,
            Err(err) => {
                warn!("event=list_followups module=repo status=degraded error={err}");
                Vec::new()
            }
        }
    }

    fn delete_followup(&self, fid: &str) {
        if let Err(err) = self
            .conn
            .execute("DELETE FROM followups WHERE fid = ?1;", [fid])
        {
            warn!("event=delete_followup module=repo status=degraded fid={fid} error={err}");
        }
    }
}

impl SqliteStore<'_> {
    fn collect_rows(&self, sql: &str, key: Option<&str>) -> StoreResult<Vec<Followup>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = match key {
            Some(value) => stmt.query([value])?,
            None => stmt.query([])?,
        };
        let mut followups = Vec::new();
        while let Some(row) = rows.next()? {
            followups.push(parse_followup_row(row)?);
        }
        Ok(followups)
    }
}

fn parse_followup_row(row: &Row<'_>) -> StoreResult<Followup> {
    let accion_text: String = row.get("accion")?;
    let accion = Accion::parse(&accion_text).ok_or_else(|| {
        StoreError::InvalidData(format!(
            "invalid action `{accion_text}` in followups.accion"
        ))
    })?;

    Ok(Followup {
        fid: row.get("fid")?,
        case_id: row.get("case_id")?,
        fecha: row.get("fecha")?,
        responsable_rid: row.get("responsable_rid")?,
        accion,
        nota: row.get("nota")?,
        proximo: row.get("proximo")?,
    })
}
