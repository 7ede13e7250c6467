use casetrack_core::db::open_db_in_memory;
use casetrack_core::{
    filter_cases, CaseDraft, CaseFilter, CaseRepository, CaseService, CompanyDraft,
    DirectoryCache, DirectoryService, Estado, Modulo, SqliteStore, Tipo,
};

fn create_case(
    service: &CaseService<SqliteStore<'_>>,
    modulo: Modulo,
    empresa_id: &str,
    observacion: &str,
) -> String {
    service
        .upsert_case(
            None,
            &CaseDraft {
                modulo: Some(modulo),
                tipo: Some(Tipo::Consulta),
                empresa_id: empresa_id.to_string(),
                observacion: observacion.to_string(),
                ..CaseDraft::default()
            },
        )
        .unwrap()
        .id
}

#[test]
fn filters_combine_over_the_stored_snapshot() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStore::try_new(&conn).unwrap();
    let service = CaseService::new(store);

    create_case(&service, Modulo::Ventas, "", "invoice missing");
    create_case(&service, Modulo::Compras, "", "supplier delay");
    create_case(&service, Modulo::Ventas, "", "quote revision");

    let hits = filter_cases(
        store.list_cases(),
        &DirectoryCache::new(),
        &CaseFilter {
            modulo: Some(Modulo::Ventas),
            text: "invoice".to_string(),
            ..CaseFilter::default()
        },
    );
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].observacion, "invoice missing");
}

#[test]
fn estado_filter_matches_exactly() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStore::try_new(&conn).unwrap();
    let service = CaseService::new(store);

    create_case(&service, Modulo::Ventas, "", "open one");
    create_case(&service, Modulo::Ventas, "", "open two");

    let hits = filter_cases(
        store.list_cases(),
        &DirectoryCache::new(),
        &CaseFilter {
            estado: Some(Estado::Finalizado),
            ..CaseFilter::default()
        },
    );
    assert!(hits.is_empty());
}

#[test]
fn free_text_reaches_resolved_company_names() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStore::try_new(&conn).unwrap();
    let directory = DirectoryService::new(store);
    let service = CaseService::new(store);

    let company = directory
        .upsert_company(
            None,
            &CompanyDraft {
                name: "Transportes Andinos".to_string(),
                ..CompanyDraft::default()
            },
        )
        .unwrap();

    create_case(&service, Modulo::Ventas, &company.cid, "billing");
    create_case(&service, Modulo::Ventas, "", "billing");

    let mut cache = DirectoryCache::new();
    cache.refresh_companies(&store);

    let hits = filter_cases(
        store.list_cases(),
        &cache,
        &CaseFilter {
            text: "andinos".to_string(),
            ..CaseFilter::default()
        },
    );
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].empresa_id, company.cid);
}

#[test]
fn results_come_back_most_recent_first() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStore::try_new(&conn).unwrap();
    let service = CaseService::new(store);

    let first = create_case(&service, Modulo::Ventas, "", "first");
    let second = create_case(&service, Modulo::Ventas, "", "second");

    let hits = filter_cases(
        store.list_cases(),
        &DirectoryCache::new(),
        &CaseFilter::default(),
    );
    assert_eq!(hits.len(), 2);
    // Identical millisecond stamps keep insertion order ambiguity out of
    // scope; assert only that the later case never sorts below the earlier
    // one when stamps differ.
    if hits[0].created_at != hits[1].created_at {
        assert_eq!(hits[0].id, second);
        assert_eq!(hits[1].id, first);
    }
}
