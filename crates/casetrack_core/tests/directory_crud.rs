use casetrack_core::db::open_db_in_memory;
use casetrack_core::query::directory::{filter_companies, filter_responsibles};
use casetrack_core::{
    CompanyDraft, CompanyRepository, DirectoryCache, DirectoryService, DirectoryServiceError,
    ResponsibleDraft, ResponsibleRepository, SqliteStore,
};

#[test]
fn company_upsert_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStore::try_new(&conn).unwrap();
    let service = DirectoryService::new(store);

    let created = service
        .upsert_company(
            None,
            &CompanyDraft {
                name: "  Acme  ".to_string(),
                contact: "Laura".to_string(),
                phone: "555-0100".to_string(),
                email: "laura@acme.test".to_string(),
                notes: String::new(),
            },
        )
        .unwrap();
    assert_eq!(created.name, "Acme");
    assert!(!created.cid.is_empty());

    let edited = service
        .upsert_company(
            Some(&created.cid),
            &CompanyDraft {
                name: "Acme Corp".to_string(),
                ..CompanyDraft::default()
            },
        )
        .unwrap();
    assert_eq!(edited.cid, created.cid);
    assert_eq!(edited.created_at, created.created_at);

    let loaded = store.get_company(&created.cid).unwrap().unwrap();
    assert_eq!(loaded.name, "Acme Corp");
    assert_eq!(store.list_companies().len(), 1);
}

#[test]
fn blank_names_are_rejected() {
    let conn = open_db_in_memory().unwrap();
    let service = DirectoryService::new(SqliteStore::try_new(&conn).unwrap());

    let company_err = service
        .upsert_company(
            None,
            &CompanyDraft {
                name: "   ".to_string(),
                ..CompanyDraft::default()
            },
        )
        .unwrap_err();
    assert!(matches!(company_err, DirectoryServiceError::EmptyName));

    let responsible_err = service
        .upsert_responsible(None, &ResponsibleDraft::default())
        .unwrap_err();
    assert!(matches!(responsible_err, DirectoryServiceError::EmptyName));
}

#[test]
fn deleting_a_referenced_responsible_leaves_cases_untouched() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStore::try_new(&conn).unwrap();
    let service = DirectoryService::new(store);

    let responsible = service
        .upsert_responsible(
            None,
            &ResponsibleDraft {
                name: "Marta".to_string(),
                ..ResponsibleDraft::default()
            },
        )
        .unwrap();

    service.delete_responsible(&responsible.rid);
    assert!(store.get_responsible(&responsible.rid).unwrap().is_none());

    // A cache lookup for the dangling id resolves to an empty name.
    let mut cache = DirectoryCache::new();
    cache.refresh_responsibles(&store);
    assert_eq!(cache.responsible_name(&responsible.rid), "");
}

#[test]
fn cache_refresh_sorts_by_name() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStore::try_new(&conn).unwrap();
    let service = DirectoryService::new(store);

    for name in ["zeta", "Alfa", "miranda"] {
        service
            .upsert_company(
                None,
                &CompanyDraft {
                    name: name.to_string(),
                    ..CompanyDraft::default()
                },
            )
            .unwrap();
    }

    let mut cache = DirectoryCache::new();
    cache.refresh_companies(&store);
    let names: Vec<&str> = cache.companies().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Alfa", "miranda", "zeta"]);
}

#[test]
fn directory_filters_match_any_field() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStore::try_new(&conn).unwrap();
    let service = DirectoryService::new(store);

    service
        .upsert_company(
            None,
            &CompanyDraft {
                name: "Acme".to_string(),
                email: "sales@acme.test".to_string(),
                ..CompanyDraft::default()
            },
        )
        .unwrap();
    service
        .upsert_responsible(
            None,
            &ResponsibleDraft {
                name: "Marta".to_string(),
                role: "Soporte".to_string(),
                ..ResponsibleDraft::default()
            },
        )
        .unwrap();

    let mut cache = DirectoryCache::new();
    cache.refresh_companies(&store);
    cache.refresh_responsibles(&store);

    assert_eq!(filter_companies(cache.companies(), "ACME.test").len(), 1);
    assert!(filter_companies(cache.companies(), "globex").is_empty());
    assert_eq!(filter_responsibles(cache.responsibles(), "soporte").len(), 1);
    assert_eq!(filter_responsibles(cache.responsibles(), "  ").len(), 1);
}
