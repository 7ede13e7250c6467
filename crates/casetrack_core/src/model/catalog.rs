//! Closed catalogs for case classification fields.
//!
//! # Responsibility
//! - Define the fixed enumerations a case can be classified with.
//! - Provide stable string forms shared by storage and the JSON snapshot.
//!
//! # Invariants
//! - Catalog values are closed sets; no variant is added at runtime.
//! - `as_str` output is the exact uppercase token persisted and exported.

use serde::{Deserialize, Serialize};

/// Product module a case is reported against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Modulo {
    Ventas,
    Compras,
    Tesoreria,
    Reportes,
    Contabilidad,
    Tablas,
    Configuracion,
}

impl Modulo {
    pub const ALL: [Modulo; 7] = [
        Modulo::Ventas,
        Modulo::Compras,
        Modulo::Tesoreria,
        Modulo::Reportes,
        Modulo::Contabilidad,
        Modulo::Tablas,
        Modulo::Configuracion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Modulo::Ventas => "VENTAS",
            Modulo::Compras => "COMPRAS",
            Modulo::Tesoreria => "TESORERIA",
            Modulo::Reportes => "REPORTES",
            Modulo::Contabilidad => "CONTABILIDAD",
            Modulo::Tablas => "TABLAS",
            Modulo::Configuracion => "CONFIGURACION",
        }
    }

    pub fn parse(value: &str) -> Option<Modulo> {
        Modulo::ALL.into_iter().find(|m| m.as_str() == value)
    }
}

/// Nature of the request behind a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tipo {
    Consulta,
    Incidencia,
    Desarrollo,
}

impl Tipo {
    pub const ALL: [Tipo; 3] = [Tipo::Consulta, Tipo::Incidencia, Tipo::Desarrollo];

    pub fn as_str(self) -> &'static str {
        match self {
            Tipo::Consulta => "CONSULTA",
            Tipo::Incidencia => "INCIDENCIA",
            Tipo::Desarrollo => "DESARROLLO",
        }
    }

    pub fn parse(value: &str) -> Option<Tipo> {
        Tipo::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

/// Lifecycle state of a case.
///
/// Only the lifecycle engine ([`crate::service::case_service::CaseService`])
/// moves a case between states; `Finalizado` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Estado {
    /// Initial state set on creation.
    #[default]
    Creado,
    /// At least one follow-up has been recorded.
    Seguimiento,
    /// Closed. Never auto-reverted.
    Finalizado,
}

impl Estado {
    pub const ALL: [Estado; 3] = [Estado::Creado, Estado::Seguimiento, Estado::Finalizado];

    pub fn as_str(self) -> &'static str {
        match self {
            Estado::Creado => "CREADO",
            Estado::Seguimiento => "SEGUIMIENTO",
            Estado::Finalizado => "FINALIZADO",
        }
    }

    pub fn parse(value: &str) -> Option<Estado> {
        Estado::ALL.into_iter().find(|e| e.as_str() == value)
    }
}

/// Channel the case arrived through. Defaults to the intake form default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Canal {
    #[default]
    Llamada,
    Whatsapp,
    Correo,
    Presencial,
    Otro,
}

impl Canal {
    pub const ALL: [Canal; 5] = [
        Canal::Llamada,
        Canal::Whatsapp,
        Canal::Correo,
        Canal::Presencial,
        Canal::Otro,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Canal::Llamada => "LLAMADA",
            Canal::Whatsapp => "WHATSAPP",
            Canal::Correo => "CORREO",
            Canal::Presencial => "PRESENCIAL",
            Canal::Otro => "OTRO",
        }
    }

    pub fn parse(value: &str) -> Option<Canal> {
        Canal::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

/// Case priority. Defaults to the intake form default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Prioridad {
    Baja,
    #[default]
    Media,
    Alta,
    Urgente,
}

impl Prioridad {
    pub const ALL: [Prioridad; 4] = [
        Prioridad::Baja,
        Prioridad::Media,
        Prioridad::Alta,
        Prioridad::Urgente,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Prioridad::Baja => "BAJA",
            Prioridad::Media => "MEDIA",
            Prioridad::Alta => "ALTA",
            Prioridad::Urgente => "URGENTE",
        }
    }

    pub fn parse(value: &str) -> Option<Prioridad> {
        Prioridad::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

/// Catalog document embedded in every export snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub modulos: Vec<Modulo>,
    pub tipos: Vec<Tipo>,
    pub estados: Vec<Estado>,
    pub canales: Vec<Canal>,
    pub prioridades: Vec<Prioridad>,
}

impl Catalog {
    /// Returns the full fixed catalog set.
    pub fn fixed() -> Self {
        Self {
            modulos: Modulo::ALL.to_vec(),
            tipos: Tipo::ALL.to_vec(),
            estados: Estado::ALL.to_vec(),
            canales: Canal::ALL.to_vec(),
            prioridades: Prioridad::ALL.to_vec(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::fixed()
    }
}

#[cfg(test)]
mod tests {
    use super::{Canal, Catalog, Estado, Modulo, Prioridad, Tipo};

    #[test]
    fn string_forms_roundtrip_for_every_variant() {
        for m in Modulo::ALL {
            assert_eq!(Modulo::parse(m.as_str()), Some(m));
        }
        for t in Tipo::ALL {
            assert_eq!(Tipo::parse(t.as_str()), Some(t));
        }
        for e in Estado::ALL {
            assert_eq!(Estado::parse(e.as_str()), Some(e));
        }
        for c in Canal::ALL {
            assert_eq!(Canal::parse(c.as_str()), Some(c));
        }
        for p in Prioridad::ALL {
            assert_eq!(Prioridad::parse(p.as_str()), Some(p));
        }
    }

    #[test]
    fn parse_rejects_unknown_tokens() {
        assert_eq!(Modulo::parse("ventas"), None);
        assert_eq!(Estado::parse("CERRADO"), None);
    }

    #[test]
    fn defaults_match_intake_form_defaults() {
        assert_eq!(Estado::default(), Estado::Creado);
        assert_eq!(Canal::default(), Canal::Llamada);
        assert_eq!(Prioridad::default(), Prioridad::Media);
    }

    #[test]
    fn fixed_catalog_is_complete() {
        let catalog = Catalog::fixed();
        assert_eq!(catalog.modulos.len(), 7);
        assert_eq!(catalog.tipos.len(), 3);
        assert_eq!(catalog.estados.len(), 3);
        assert_eq!(catalog.canales.len(), 5);
        assert_eq!(catalog.prioridades.len(), 4);
    }
}
