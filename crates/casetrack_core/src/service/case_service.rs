//! Case lifecycle engine.
//!
//! # Responsibility
//! - Create and edit cases through the typed draft/patch shape.
//! - Record follow-ups and apply the status transition rules.
//! - Cascade-delete a case together with its audit trail.
//!
//! # Invariants
//! - `estado` changes only here, via [`Estado::after`].
//! - Validation rejections happen before any write; a rejected follow-up
//!   leaves both collections untouched.
//! - Every recorded follow-up refreshes the case's `updated_at`.

use crate::clock::now_iso;
use crate::model::case::{Case, CaseDraft};
use crate::model::catalog::Estado;
use crate::model::followup::{Accion, Followup};
use crate::repo::case_repo::CaseRepository;
use crate::repo::followup_repo::FollowupRepository;
use crate::repo::meta_repo::MetaRepository;
use crate::repo::StoreError;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Errors from case lifecycle operations.
#[derive(Debug)]
pub enum CaseServiceError {
    /// A follow-up was submitted without a note.
    EmptyNota,
    /// A finalize action was submitted without a responsible.
    MissingResponsible,
    /// Case creation lacks a module or type classification.
    MissingClassification,
    /// Target case does not exist.
    CaseNotFound(String),
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for CaseServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyNota => write!(f, "follow-up note must not be empty"),
            Self::MissingResponsible => {
                write!(f, "finalizing a case requires a responsible")
            }
            Self::MissingClassification => {
                write!(f, "creating a case requires module and type")
            }
            Self::CaseNotFound(id) => write!(f, "case not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CaseServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for CaseServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Follow-up submission as received from the boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FollowupDraft {
    /// Timestamp of the action as entered by the user.
    pub fecha: String,
    /// Acting responsible. Required when `accion == Finalizar`.
    pub responsable_rid: String,
    pub accion: Accion,
    pub nota: String,
    pub proximo: String,
}

/// Lifecycle engine over the case, follow-up and metadata stores.
pub struct CaseService<S> {
    store: S,
}

impl<S> CaseService<S>
where
    S: CaseRepository + FollowupRepository + MetaRepository,
{
    /// Creates the engine over a combined store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates a case (no id) or merges a draft into an existing one.
    ///
    /// Creation allocates the next sequence id and starts the lifecycle at
    /// `CREADO` with an empty finalizer. Edits merge only the recognized
    /// draft fields; lifecycle fields and an unsupplied attachment are
    /// preserved.
    pub fn upsert_case(
        &self,
        id: Option<&str>,
        draft: &CaseDraft,
    ) -> Result<Case, CaseServiceError> {
        match id {
            None => self.create_case(draft),
            Some(id) => self.edit_case(id, draft),
        }
    }

    fn create_case(&self, draft: &CaseDraft) -> Result<Case, CaseServiceError> {
        let (Some(modulo), Some(tipo)) = (draft.modulo, draft.tipo) else {
            return Err(CaseServiceError::MissingClassification);
        };

        let now = now_iso();
        let mut case = Case {
            id: self.store.next_case_id()?,
            fecha: String::new(),
            modulo,
            tipo,
            canal: draft.canal,
            prioridad: draft.prioridad,
            empresa_id: String::new(),
            resp_crear_rid: String::new(),
            resp_finalizar_rid: String::new(),
            contacto: String::new(),
            telefono: String::new(),
            correo: String::new(),
            sla: String::new(),
            ticket_externo: String::new(),
            observacion: String::new(),
            imagen: None,
            estado: Estado::Creado,
            created_at: now.clone(),
            updated_at: now,
            fecha_finalizado: None,
        };
        case.apply_draft(draft);

        self.store.put_case(&case)?;
        info!(
            "event=case_create module=lifecycle status=ok id={} modulo={}",
            case.id,
            case.modulo.as_str()
        );
        Ok(case)
    }

    fn edit_case(&self, id: &str, draft: &CaseDraft) -> Result<Case, CaseServiceError> {
        let mut case = self
            .store
            .get_case(id)?
            .ok_or_else(|| CaseServiceError::CaseNotFound(id.to_string()))?;

        case.apply_draft(draft);
        case.updated_at = now_iso();

        self.store.put_case(&case)?;
        Ok(case)
    }

    /// Records one follow-up and applies the status transition.
    ///
    /// Rejected submissions (empty note, finalize without responsible,
    /// unknown case) write nothing.
    pub fn add_followup(
        &self,
        case_id: &str,
        draft: &FollowupDraft,
    ) -> Result<Followup, CaseServiceError> {
        let nota = draft.nota.trim();
        if nota.is_empty() {
            return Err(CaseServiceError::EmptyNota);
        }

        let responsable_rid = draft.responsable_rid.trim();
        if draft.accion == Accion::Finalizar && responsable_rid.is_empty() {
            return Err(CaseServiceError::MissingResponsible);
        }

        let mut case = self
            .store
            .get_case(case_id)?
            .ok_or_else(|| CaseServiceError::CaseNotFound(case_id.to_string()))?;

        let followup = Followup {
            fid: Uuid::new_v4().to_string(),
            case_id: case_id.to_string(),
            fecha: draft.fecha.clone(),
            responsable_rid: responsable_rid.to_string(),
            accion: draft.accion,
            nota: nota.to_string(),
            proximo: draft.proximo.trim().to_string(),
        };
        self.store.put_followup(&followup)?;

        case.estado = case.estado.after(draft.accion);
        if draft.accion == Accion::Finalizar {
            case.resp_finalizar_rid = responsable_rid.to_string();
            case.fecha_finalizado = Some(now_iso());
        }
        case.updated_at = now_iso();
        self.store.put_case(&case)?;

        info!(
            "event=followup_add module=lifecycle status=ok case_id={} accion={} estado={}",
            case_id,
            draft.accion.as_str(),
            case.estado.as_str()
        );
        Ok(followup)
    }

    /// Deletes a case and every follow-up it owns.
    ///
    /// Sequential best effort: the case record goes first, then each
    /// dependent entry. After return no follow-up of the case remains
    /// observable.
    pub fn delete_case(&self, id: &str) {
        let trail = self.store.list_followups_for_case(id);
        self.store.delete_case(id);
        for followup in &trail {
            self.store.delete_followup(&followup.fid);
        }
        info!(
            "event=case_delete module=lifecycle status=ok id={id} followups={}",
            trail.len()
        );
    }

    /// Point lookup passthrough for boundary callers.
    pub fn get_case(&self, id: &str) -> Result<Option<Case>, CaseServiceError> {
        Ok(self.store.get_case(id)?)
    }

    /// Trail of one case, ordered by `fecha` ascending.
    pub fn list_followups(&self, case_id: &str) -> Vec<Followup> {
        self.store.list_followups_for_case(case_id)
    }
}
