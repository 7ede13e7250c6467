//! Case repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide keyed create-or-replace, point lookup, whole-collection read
//!   and delete for case records.
//!
//! # Invariants
//! - `put_case` persists every field; merge/patch decisions live in the
//!   service layer, never here.
//! - `list_cases` and `delete_case` follow the degrade policies documented
//!   on [`crate::repo`].

use crate::model::case::Case;
use crate::model::catalog::{Canal, Estado, Modulo, Prioridad, Tipo};
use crate::repo::{SqliteStore, StoreError, StoreResult};
use log::warn;
use rusqlite::{params, Row};

const CASE_SELECT_SQL: &str = "SELECT
    id,
    fecha,
    modulo,
    tipo,
    canal,
    prioridad,
    empresa_id,
    resp_crear_rid,
    resp_finalizar_rid,
    contacto,
    telefono,
    correo,
    sla,
    ticket_externo,
    observacion,
    imagen,
    estado,
    created_at,
    updated_at,
    fecha_finalizado
FROM cases";

/// Repository interface for the cases collection.
pub trait CaseRepository {
    /// Creates or replaces one case record. Failures propagate.
    fn put_case(&self, case: &Case) -> StoreResult<()>;
    /// Point lookup by id. Failures propagate; a missing record is `None`.
    fn get_case(&self, id: &str) -> StoreResult<Option<Case>>;
    /// Whole-collection read. Storage failures degrade to empty.
    fn list_cases(&self) -> Vec<Case>;
    /// Delete by id. Storage failures degrade to success.
    fn delete_case(&self, id: &str);
}

impl CaseRepository for SqliteStore<'_> {
    fn put_case(&self, case: &Case) -> StoreResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO cases (
                id,
                fecha,
                modulo,
                tipo,
                canal,
                prioridad,
                empresa_id,
                resp_crear_rid,
                resp_finalizar_rid,
                contacto,
                telefono,
                correo,
                sla,
                ticket_externo,
                observacion,
                imagen,
                estado,
                created_at,
                updated_at,
                fecha_finalizado
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10,
                      ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20);",
            params![
                case.id,
                case.fecha,
                case.modulo.as_str(),
                case.tipo.as_str(),
                case.canal.as_str(),
                case.prioridad.as_str(),
                case.empresa_id,
                case.resp_crear_rid,
                case.resp_finalizar_rid,
                case.contacto,
                case.telefono,
                case.correo,
                case.sla,
                case.ticket_externo,
                case.observacion,
                case.imagen.as_deref(),
                case.estado.as_str(),
                case.created_at,
                case.updated_at,
                case.fecha_finalizado.as_deref(),
            ],
        )?;
        Ok(())
    }

    fn get_case(&self, id: &str) -> StoreResult<Option<Case>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CASE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_case_row(row)?));
        }
        Ok(None)
    }

    fn list_cases(&self) -> Vec<Case> {
        match self.list_cases_inner() {
            Ok(cases) => cases,
            Err(err) => {
                warn!("event=list_cases module=repo status=degraded error={err}");
                Vec::new()
            }
        }
    }

    fn delete_case(&self, id: &str) {
        if let Err(err) = self.conn.execute("DELETE FROM cases WHERE id = ?1;", [id]) {
            warn!("event=delete_case module=repo status=degraded id={id} error={err}");
        }
    }
}

impl SqliteStore<'_> {
    fn list_cases_inner(&self) -> StoreResult<Vec<Case>> {
        let mut stmt = self.conn.prepare(&format!("{CASE_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut cases = Vec::new();
        while let Some(row) = rows.next()? {
            cases.push(parse_case_row(row)?);
        }
        Ok(cases)
    }
}

fn parse_case_row(row: &Row<'_>) -> StoreResult<Case> {
    let modulo_text: String = row.get("modulo")?;
    let modulo = Modulo::parse(&modulo_text).ok_or_else(|| {
        StoreError::InvalidData(format!("invalid module `{modulo_text}` in cases.modulo"))
    })?;

    let tipo_text: String = row.get("tipo")?;
    let tipo = Tipo::parse(&tipo_text).ok_or_else(|| {
        StoreError::InvalidData(format!("invalid type `{tipo_text}` in cases.tipo"))
    })?;

    let canal_text: String = row.get("canal")?;
    let canal = Canal::parse(&canal_text).ok_or_else(|| {
        StoreError::InvalidData(format!("invalid channel `{canal_text}` in cases.canal"))
    })?;

    let prioridad_text: String = row.get("prioridad")?;
    let prioridad = Prioridad::parse(&prioridad_text).ok_or_else(|| {
        StoreError::InvalidData(format!(
            "invalid priority `{prioridad_text}` in cases.prioridad"
        ))
    })?;

    let estado_text: String = row.get("estado")?;
    let estado = Estado::parse(&estado_text).ok_or_else(|| {
        StoreError::InvalidData(format!("invalid status `{estado_text}` in cases.estado"))
    })?;

    Ok(Case {
        id: row.get("id")?,
        fecha: row.get("fecha")?,
        modulo,
        tipo,
        canal,
        prioridad,
        empresa_id: row.get("empresa_id")?,
        resp_crear_rid: row.get("resp_crear_rid")?,
        resp_finalizar_rid: row.get("resp_finalizar_rid")?,
        contacto: row.get("contacto")?,
        telefono: row.get("telefono")?,
        correo: row.get("correo")?,
        sla: row.get("sla")?,
        ticket_externo: row.get("ticket_externo")?,
        observacion: row.get("observacion")?,
        imagen: row.get("imagen")?,
        estado,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
        fecha_finalizado: row.get("fecha_finalizado")?,
    })
}
