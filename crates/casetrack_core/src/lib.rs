//! Core domain logic for CaseTrack.
//! This crate is the single source of truth for business invariants.

pub mod clock;
pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;
pub mod snapshot;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::case::{Case, CaseDraft};
pub use model::catalog::{Canal, Catalog, Estado, Modulo, Prioridad, Tipo};
pub use model::followup::{Accion, Followup};
pub use model::party::{Company, Responsible};
pub use query::cases::{filter_cases, CaseFilter};
pub use query::directory::DirectoryCache;
pub use repo::case_repo::CaseRepository;
pub use repo::followup_repo::FollowupRepository;
pub use repo::meta_repo::MetaRepository;
pub use repo::party_repo::{CompanyRepository, ResponsibleRepository};
pub use repo::{SqliteStore, StoreError, StoreResult};
pub use service::case_service::{CaseService, CaseServiceError, FollowupDraft};
pub use service::directory_service::{
    prefill_contact_from_company, CompanyDraft, DirectoryService, DirectoryServiceError,
    ResponsibleDraft,
};
pub use snapshot::{export_snapshot, import_snapshot, reset_store, Snapshot};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
