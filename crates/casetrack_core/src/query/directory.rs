//! Directory read-through cache and free-text filters.
//!
//! # Responsibility
//! - Hold name-sorted in-memory copies of companies and responsibles for
//!   render-time lookups without re-querying storage.
//! - Provide free-text substring filtering over directory field blobs.
//!
//! # Invariants
//! - The cache is explicit and owned by the caller; refresh happens after
//!   directory writes, never implicitly.
//! - By-id lookups return `None` for dangling references.

use crate::model::party::{Company, Responsible};
use crate::repo::party_repo::{CompanyRepository, ResponsibleRepository};

/// In-memory directory snapshot, sorted ascending by lowercase name.
#[derive(Debug, Clone, Default)]
pub struct DirectoryCache {
    companies: Vec<Company>,
    responsibles: Vec<Responsible>,
}

impl DirectoryCache {
    /// Creates an empty cache; call the refresh operations to populate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reloads the company list from storage.
    pub fn refresh_companies(&mut self, repo: &impl CompanyRepository) {
        self.companies = repo.list_companies();
        self.companies
            .sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    }

    /// Reloads the responsible list from storage.
    pub fn refresh_responsibles(&mut self, repo: &impl ResponsibleRepository) {
        self.responsibles = repo.list_responsibles();
        self.responsibles
            .sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    }

    /// Companies sorted by name.
    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    /// Responsibles sorted by name.
    pub fn responsibles(&self) -> &[Responsible] {
        &self.responsibles
    }

    /// Company lookup; dangling or empty ids are absent.
    pub fn company_by_id(&self, cid: &str) -> Option<&Company> {
        self.companies.iter().find(|c| c.cid == cid)
    }

    /// Responsible lookup; dangling or empty ids are absent.
    pub fn responsible_by_id(&self, rid: &str) -> Option<&Responsible> {
        self.responsibles.iter().find(|r| r.rid == rid)
    }

    /// Company name for a case reference, empty when absent.
    pub fn company_name(&self, cid: &str) -> &str {
        self.company_by_id(cid).map(|c| c.name.as_str()).unwrap_or("")
    }

    /// Responsible name for a case reference, empty when absent.
    pub fn responsible_name(&self, rid: &str) -> &str {
        self.responsible_by_id(rid)
            .map(|r| r.name.as_str())
            .unwrap_or("")
    }
}

/// Companies whose field blob contains the query, case-insensitively.
///
/// An empty query keeps everything; sort order of the input is preserved.
pub fn filter_companies(companies: &[Company], query: &str) -> Vec<Company> {
    let needle = query.trim().to_lowercase();
    companies
        .iter()
        .filter(|c| {
            needle.is_empty()
                || [
                    c.name.as_str(),
                    c.contact.as_str(),
                    c.phone.as_str(),
                    c.email.as_str(),
                    c.notes.as_str(),
                ]
                .join(" ")
                .to_lowercase()
                .contains(&needle)
        })
        .cloned()
        .collect()
}

/// Responsibles whose field blob contains the query, case-insensitively.
pub fn filter_responsibles(responsibles: &[Responsible], query: &str) -> Vec<Responsible> {
    let needle = query.trim().to_lowercase();
    responsibles
        .iter()
        .filter(|r| {
            needle.is_empty()
                || [
                    r.name.as_str(),
                    r.role.as_str(),
                    r.phone.as_str(),
                    r.email.as_str(),
                ]
                .join(" ")
                .to_lowercase()
                .contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{filter_companies, filter_responsibles, DirectoryCache};
    use crate::model::party::{Company, Responsible};

    fn named_company(name: &str) -> Company {
        Company::new(name)
    }

    #[test]
    fn lookups_resolve_absent_for_dangling_ids() {
        let cache = DirectoryCache::new();
        assert!(cache.company_by_id("missing").is_none());
        assert_eq!(cache.responsible_name("missing"), "");
    }

    #[test]
    fn company_filter_matches_any_field() {
        let mut a = named_company("Acme");
        a.email = "soporte@acme.test".to_string();
        let b = named_company("Borealis");

        let hits = filter_companies(&[a.clone(), b], "SOPORTE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].cid, a.cid);
    }

    #[test]
    fn responsible_filter_empty_query_keeps_all() {
        let list = [Responsible::new("Rosa"), Responsible::new("Luis")];
        assert_eq!(filter_responsibles(&list, "  ").len(), 2);
    }
}
