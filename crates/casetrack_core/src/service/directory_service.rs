//! Company/responsible directory use-cases.
//!
//! # Responsibility
//! - Create and edit directory records with required-name validation.
//! - Delete directory records without touching cases that reference them.
//! - Prefill empty case contact fields from a company snapshot.
//!
//! # Invariants
//! - A record is never written with an empty name.
//! - Edits preserve `created_at` and refresh `updated_at`.
//! - Deletion performs no reference check; dangling case references are
//!   tolerated and resolve to absent at read time.

use crate::clock::now_iso;
use crate::model::case::CaseDraft;
use crate::model::party::{Company, Responsible};
use crate::repo::party_repo::{CompanyRepository, ResponsibleRepository};
use crate::repo::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Errors from directory operations.
#[derive(Debug)]
pub enum DirectoryServiceError {
    /// Company/responsible name is required.
    EmptyName,
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for DirectoryServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "directory records require a non-empty name"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DirectoryServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::EmptyName => None,
        }
    }
}

impl From<StoreError> for DirectoryServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Editable company fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyDraft {
    pub name: String,
    pub contact: String,
    pub phone: String,
    pub email: String,
    pub notes: String,
}

/// Editable responsible fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponsibleDraft {
    pub name: String,
    pub role: String,
    pub phone: String,
    pub email: String,
}

/// Directory facade over the company and responsible stores.
pub struct DirectoryService<S> {
    store: S,
}

impl<S> DirectoryService<S>
where
    S: CompanyRepository + ResponsibleRepository,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates a company (no id) or replaces the fields of an existing one.
    ///
    /// `created_at` of an existing record survives edits.
    pub fn upsert_company(
        &self,
        cid: Option<&str>,
        draft: &CompanyDraft,
    ) -> Result<Company, DirectoryServiceError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(DirectoryServiceError::EmptyName);
        }

        let cid = cid
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let now = now_iso();
        let created_at = self
            .store
            .get_company(&cid)?
            .map(|existing| existing.created_at)
            .unwrap_or_else(|| now.clone());

        let company = Company {
            cid,
            name: name.to_string(),
            contact: draft.contact.trim().to_string(),
            phone: draft.phone.trim().to_string(),
            email: draft.email.trim().to_string(),
            notes: draft.notes.trim().to_string(),
            created_at,
            updated_at: now,
        };
        self.store.put_company(&company)?;
        Ok(company)
    }

    /// Creates a responsible (no id) or replaces an existing one.
    pub fn upsert_responsible(
        &self,
        rid: Option<&str>,
        draft: &ResponsibleDraft,
    ) -> Result<Responsible, DirectoryServiceError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(DirectoryServiceError::EmptyName);
        }

        let rid = rid
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let now = now_iso();
        let created_at = self
            .store
            .get_responsible(&rid)?
            .map(|existing| existing.created_at)
            .unwrap_or_else(|| now.clone());

        let responsible = Responsible {
            rid,
            name: name.to_string(),
            role: draft.role.trim().to_string(),
            phone: draft.phone.trim().to_string(),
            email: draft.email.trim().to_string(),
            created_at,
            updated_at: now,
        };
        self.store.put_responsible(&responsible)?;
        Ok(responsible)
    }

    /// Deletes a company; cases referencing it keep their dangling id.
    pub fn delete_company(&self, cid: &str) {
        self.store.delete_company(cid);
    }

    /// Deletes a responsible; cases referencing it keep their dangling id.
    pub fn delete_responsible(&self, rid: &str) {
        self.store.delete_responsible(rid);
    }
}

/// Copies company contact data into the empty contact fields of a draft.
///
/// Caller-supplied values always win; only blank fields are filled.
pub fn prefill_contact_from_company(draft: &mut CaseDraft, company: &Company) {
    if draft.contacto.trim().is_empty() {
        draft.contacto = company.contact.clone();
    }
    if draft.telefono.trim().is_empty() {
        draft.telefono = company.phone.clone();
    }
    if draft.correo.trim().is_empty() {
        draft.correo = company.email.clone();
    }
}
