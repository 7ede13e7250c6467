//! Case domain model.
//!
//! # Responsibility
//! - Define the canonical case record and its editable draft shape.
//! - Provide the pure status transition used by the lifecycle engine.
//!
//! # Invariants
//! - `id` is an immutable zero-padded sequence string, never reused.
//! - `estado` only changes through [`Estado::after`] applied by the
//!   lifecycle engine; `Finalizado` is terminal.
//! - `created_at`, `updated_at` and `fecha_finalizado` are stamped by the
//!   engine, never merged from a draft.

use crate::model::catalog::{Canal, Estado, Modulo, Prioridad, Tipo};
use crate::model::followup::Accion;
use serde::{Deserialize, Serialize};

/// Canonical persisted case record.
///
/// Serialized field names match the snapshot document of the storage schema
/// (`empresaId`, `respCrearRid`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    /// Zero-padded sequence number, primary key.
    pub id: String,
    /// Reported date as entered on intake, free date string.
    #[serde(default)]
    pub fecha: String,
    pub modulo: Modulo,
    pub tipo: Tipo,
    #[serde(default)]
    pub canal: Canal,
    #[serde(default)]
    pub prioridad: Prioridad,
    /// Weak reference into companies; may point to a deleted record.
    #[serde(default)]
    pub empresa_id: String,
    /// Responsible who opened the case.
    #[serde(default)]
    pub resp_crear_rid: String,
    /// Responsible who closed the case. Empty until finalized.
    #[serde(default)]
    pub resp_finalizar_rid: String,
    /// Contact snapshot taken at creation/edit time; not synced to the
    /// company record afterwards.
    #[serde(default)]
    pub contacto: String,
    #[serde(default)]
    pub telefono: String,
    #[serde(default)]
    pub correo: String,
    #[serde(default)]
    pub sla: String,
    #[serde(default)]
    pub ticket_externo: String,
    #[serde(default)]
    pub observacion: String,
    /// At most one data-URL attachment.
    #[serde(default)]
    pub imagen: Option<String>,
    #[serde(default)]
    pub estado: Estado,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_finalizado: Option<String>,
}

/// Editable case fields as submitted by intake/edit.
///
/// A draft carries only the fields a caller may set; lifecycle fields are
/// unrepresentable here, so an edit cannot touch them. `imagen = None`
/// means "keep the stored attachment".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseDraft {
    pub fecha: String,
    pub modulo: Option<Modulo>,
    pub tipo: Option<Tipo>,
    pub canal: Canal,
    pub prioridad: Prioridad,
    pub empresa_id: String,
    pub resp_crear_rid: String,
    pub contacto: String,
    pub telefono: String,
    pub correo: String,
    pub sla: String,
    pub ticket_externo: String,
    pub observacion: String,
    pub imagen: Option<String>,
}

impl Case {
    /// Merges the recognized draft fields into this record.
    ///
    /// # Invariants
    /// - `id`, `estado`, `resp_finalizar_rid`, `created_at` and
    ///   `fecha_finalizado` are untouched.
    /// - The stored attachment survives unless the draft supplies one.
    pub fn apply_draft(&mut self, draft: &CaseDraft) {
        self.fecha = draft.fecha.clone();
        if let Some(modulo) = draft.modulo {
            self.modulo = modulo;
        }
        if let Some(tipo) = draft.tipo {
            self.tipo = tipo;
        }
        self.canal = draft.canal;
        self.prioridad = draft.prioridad;
        self.empresa_id = draft.empresa_id.trim().to_string();
        self.resp_crear_rid = draft.resp_crear_rid.trim().to_string();
        self.contacto = draft.contacto.trim().to_string();
        self.telefono = draft.telefono.trim().to_string();
        self.correo = draft.correo.trim().to_string();
        self.sla = draft.sla.clone();
        self.ticket_externo = draft.ticket_externo.trim().to_string();
        self.observacion = draft.observacion.trim().to_string();
        if let Some(imagen) = draft.imagen.as_ref() {
            self.imagen = Some(imagen.clone());
        }
    }
}

impl Estado {
    /// Next status after recording a follow-up action.
    ///
    /// `Seguimiento` actions never reopen a finalized case; `Finalizar`
    /// lands on `Finalizado` even when already there.
    pub fn after(self, accion: Accion) -> Estado {
        match accion {
            Accion::Seguimiento => {
                if self == Estado::Finalizado {
                    Estado::Finalizado
                } else {
                    Estado::Seguimiento
                }
            }
            Accion::Finalizar => Estado::Finalizado,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Case, CaseDraft};
    use crate::model::catalog::{Canal, Estado, Modulo, Prioridad, Tipo};
    use crate::model::followup::Accion;

    fn sample_case() -> Case {
        Case {
            id: "00001".to_string(),
            fecha: "2026-08-01".to_string(),
            modulo: Modulo::Ventas,
            tipo: Tipo::Consulta,
            canal: Canal::Llamada,
            prioridad: Prioridad::Media,
            empresa_id: String::new(),
            resp_crear_rid: String::new(),
            resp_finalizar_rid: String::new(),
            contacto: String::new(),
            telefono: String::new(),
            correo: String::new(),
            sla: String::new(),
            ticket_externo: String::new(),
            observacion: String::new(),
            imagen: Some("data:image/png;base64,AAAA".to_string()),
            estado: Estado::Seguimiento,
            created_at: "2026-08-01T10:00:00.000Z".to_string(),
            updated_at: "2026-08-01T10:00:00.000Z".to_string(),
            fecha_finalizado: None,
        }
    }

    #[test]
    fn transition_table_matches_lifecycle_rules() {
        assert_eq!(Estado::Creado.after(Accion::Seguimiento), Estado::Seguimiento);
        assert_eq!(
            Estado::Seguimiento.after(Accion::Seguimiento),
            Estado::Seguimiento
        );
        assert_eq!(
            Estado::Finalizado.after(Accion::Seguimiento),
            Estado::Finalizado
        );
        assert_eq!(Estado::Creado.after(Accion::Finalizar), Estado::Finalizado);
        assert_eq!(
            Estado::Finalizado.after(Accion::Finalizar),
            Estado::Finalizado
        );
    }

    #[test]
    fn apply_draft_never_touches_lifecycle_fields() {
        let mut case = sample_case();
        let draft = CaseDraft {
            fecha: "2026-08-02".to_string(),
            modulo: Some(Modulo::Compras),
            tipo: Some(Tipo::Incidencia),
            observacion: "  nueva nota  ".to_string(),
            ..CaseDraft::default()
        };

        case.apply_draft(&draft);

        assert_eq!(case.id, "00001");
        assert_eq!(case.estado, Estado::Seguimiento);
        assert_eq!(case.created_at, "2026-08-01T10:00:00.000Z");
        assert_eq!(case.modulo, Modulo::Compras);
        assert_eq!(case.observacion, "nueva nota");
    }

    #[test]
    fn apply_draft_keeps_attachment_unless_replaced() {
        let mut case = sample_case();
        case.apply_draft(&CaseDraft::default());
        assert_eq!(case.imagen.as_deref(), Some("data:image/png;base64,AAAA"));

        let draft = CaseDraft {
            imagen: Some("data:image/png;base64,BBBB".to_string()),
            ..CaseDraft::default()
        };
        case.apply_draft(&draft);
        assert_eq!(case.imagen.as_deref(), Some("data:image/png;base64,BBBB"));
    }

    #[test]
    fn snapshot_json_uses_camel_case_field_names() {
        let case = sample_case();
        let json = serde_json::to_value(&case).unwrap();
        assert_eq!(json["empresaId"], "");
        assert_eq!(json["respCrearRid"], "");
        assert_eq!(json["ticketExterno"], "");
        assert_eq!(json["estado"], "SEGUIMIENTO");
        assert!(json.get("fechaFinalizado").is_none());
    }
}
