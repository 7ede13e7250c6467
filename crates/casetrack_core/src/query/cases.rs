//! Case history filtering and sorting.
//!
//! # Responsibility
//! - Apply the status/module/free-text filter combination to a case
//!   snapshot and return it most-recent-first.
//!
//! # Invariants
//! - Active criteria combine with logical AND.
//! - Free-text search covers the composed field blob including resolved
//!   directory names, so a company rename is immediately searchable after
//!   a cache refresh.

use crate::model::case::Case;
use crate::model::catalog::{Estado, Modulo};
use crate::query::directory::DirectoryCache;

/// Filter criteria for the case history view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseFilter {
    /// Exact status match.
    pub estado: Option<Estado>,
    /// Exact module match.
    pub modulo: Option<Modulo>,
    /// Case-insensitive substring over the composed field blob.
    pub text: String,
}

/// Filters and sorts a case snapshot.
///
/// Result is ordered descending by `created_at`; records without a
/// creation stamp sort last.
pub fn filter_cases(
    cases: Vec<Case>,
    directory: &DirectoryCache,
    filter: &CaseFilter,
) -> Vec<Case> {
    let needle = filter.text.trim().to_lowercase();
    let mut hits: Vec<Case> = cases
        .into_iter()
        .filter(|case| {
            if let Some(estado) = filter.estado {
                if case.estado != estado {
                    return false;
                }
            }
            if let Some(modulo) = filter.modulo {
                if case.modulo != modulo {
                    return false;
                }
            }
            needle.is_empty() || search_blob(case, directory).contains(&needle)
        })
        .collect();

    hits.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    hits
}

fn search_blob(case: &Case, directory: &DirectoryCache) -> String {
    [
        case.id.as_str(),
        directory.company_name(&case.empresa_id),
        directory.responsible_name(&case.resp_crear_rid),
        directory.responsible_name(&case.resp_finalizar_rid),
        case.observacion.as_str(),
        case.modulo.as_str(),
        case.tipo.as_str(),
        case.estado.as_str(),
        case.canal.as_str(),
        case.prioridad.as_str(),
        case.contacto.as_str(),
        case.telefono.as_str(),
        case.correo.as_str(),
        case.ticket_externo.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{filter_cases, CaseFilter};
    use crate::model::case::Case;
    use crate::model::catalog::{Canal, Estado, Modulo, Prioridad, Tipo};
    use crate::query::directory::DirectoryCache;

    fn case(id: &str, modulo: Modulo, estado: Estado, created_at: &str) -> Case {
        Case {
            id: id.to_string(),
            fecha: String::new(),
            modulo,
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
            imagen: None,
            estado,
            created_at: created_at.to_string(),
            updated_at: String::new(),
            fecha_finalizado: None,
        }
    }

    #[test]
    fn criteria_combine_with_and() {
        let cases = vec![
            case("00001", Modulo::Ventas, Estado::Creado, "2026-01-01T00:00:00.000Z"),
            case("00002", Modulo::Ventas, Estado::Finalizado, "2026-01-02T00:00:00.000Z"),
            case("00003", Modulo::Compras, Estado::Creado, "2026-01-03T00:00:00.000Z"),
        ];
        let filter = CaseFilter {
            estado: Some(Estado::Creado),
            modulo: Some(Modulo::Ventas),
            text: String::new(),
        };

        let hits = filter_cases(cases, &DirectoryCache::new(), &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "00001");
    }

    #[test]
    fn sort_is_most_recent_first_with_missing_stamps_last() {
        let cases = vec![
            case("00001", Modulo::Ventas, Estado::Creado, "2026-01-01T00:00:00.000Z"),
            case("00002", Modulo::Ventas, Estado::Creado, ""),
            case("00003", Modulo::Ventas, Estado::Creado, "2026-01-03T00:00:00.000Z"),
        ];

        let hits = filter_cases(cases, &DirectoryCache::new(), &CaseFilter::default());
        let ids: Vec<&str> = hits.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["00003", "00001", "00002"]);
    }

    #[test]
    fn free_text_matches_id_and_catalog_tokens() {
        let cases = vec![
            case("00007", Modulo::Tesoreria, Estado::Creado, "2026-01-01T00:00:00.000Z"),
            case("00008", Modulo::Ventas, Estado::Creado, "2026-01-02T00:00:00.000Z"),
        ];

        let by_id = filter_cases(
            cases.clone(),
            &DirectoryCache::new(),
            &CaseFilter {
                text: "00007".to_string(),
                ..CaseFilter::default()
            },
        );
        assert_eq!(by_id.len(), 1);

        let by_module = filter_cases(
            cases,
            &DirectoryCache::new(),
            &CaseFilter {
                text: "tesoreria".to_string(),
                ..CaseFilter::default()
            },
        );
        assert_eq!(by_module.len(), 1);
        assert_eq!(by_module[0].id, "00007");
    }
}
