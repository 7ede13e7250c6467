//! Follow-up domain model.
//!
//! # Responsibility
//! - Define the append-only audit-trail entry attached to a case.
//!
//! # Invariants
//! - `fid` is random and stable; `case_id` owns the record (a follow-up
//!   never outlives its case).
//! - The trail is append-only: no per-entry edit or delete exists outside
//!   whole-case deletion.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Action recorded by a follow-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Accion {
    /// Progress note; moves an open case to `SEGUIMIENTO`.
    #[default]
    Seguimiento,
    /// Closing note; requires a responsible and finalizes the case.
    Finalizar,
}

impl Accion {
    pub fn as_str(self) -> &'static str {
        match self {
            Accion::Seguimiento => "SEGUIMIENTO",
            Accion::Finalizar => "FINALIZAR",
        }
    }

    pub fn parse(value: &str) -> Option<Accion> {
        match value {
            "SEGUIMIENTO" => Some(Accion::Seguimiento),
            "FINALIZAR" => Some(Accion::Finalizar),
            _ => None,
        }
    }
}

/// One timestamped entry of a case's audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Followup {
    pub fid: String,
    pub case_id: String,
    /// Timestamp of the action as entered by the user.
    #[serde(default)]
    pub fecha: String,
    /// Acting responsible. Required when `accion == Finalizar`.
    #[serde(default)]
    pub responsable_rid: String,
    #[serde(default)]
    pub accion: Accion,
    pub nota: String,
    /// Optional next step.
    #[serde(default)]
    pub proximo: String,
}

impl Followup {
    /// Builds a new trail entry with a fresh random id.
    pub fn new(case_id: impl Into<String>, accion: Accion, nota: impl Into<String>) -> Self {
        Self {
            fid: Uuid::new_v4().to_string(),
            case_id: case_id.into(),
            fecha: String::new(),
            responsable_rid: String::new(),
            accion,
            nota: nota.into(),
            proximo: String::new(),
        }
    }
}
