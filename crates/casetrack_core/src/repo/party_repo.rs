//! Company and responsible repository contracts and SQLite implementations.
//!
//! # Responsibility
//! - Persist the two directory collections cases reference by id.
//!
//! # Invariants
//! - Directory deletes never touch cases; dangling references are resolved
//!   to absent at read time by the query layer.

use crate::model::party::{Company, Responsible};
use crate::repo::{SqliteStore, StoreResult};
use log::warn;
use rusqlite::{params, Row};

/// Repository interface for the companies collection.
pub trait CompanyRepository {
    /// Creates or replaces one company. Failures propagate.
    fn put_company(&self, company: &Company) -> StoreResult<()>;
    /// Point lookup by id. Failures propagate; missing is `None`.
    fn get_company(&self, cid: &str) -> StoreResult<Option<Company>>;
    /// Whole-collection read. Storage failures degrade to empty.
    fn list_companies(&self) -> Vec<Company>;
    /// Delete by id. Storage failures degrade to success.
    fn delete_company(&self, cid: &str);
}

/// Repository interface for the responsibles collection.
pub trait ResponsibleRepository {
    /// Creates or replaces one responsible. Failures propagate.
    fn put_responsible(&self, responsible: &Responsible) -> StoreResult<()>;
    /// Point lookup by id. Failures propagate; missing is `None`.
    fn get_responsible(&self, rid: &str) -> StoreResult<Option<Responsible>>;
    /// Whole-collection read. Storage failures degrade to empty.
    fn list_responsibles(&self) -> Vec<Responsible>;
    /// Delete by id. Storage failures degrade to success.
    fn delete_responsible(&self, rid: &str);
}

impl CompanyRepository for SqliteStore<'_> {
    fn put_company(&self, company: &Company) -> StoreResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO companies (
                cid, name, contact, phone, email, notes, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                company.cid,
                company.name,
                company.contact,
                company.phone,
                company.email,
                company.notes,
                company.created_at,
                company.updated_at,
            ],
        )?;
        Ok(())
    }

    fn get_company(&self, cid: &str) -> StoreResult<Option<Company>> {
        let mut stmt = self.conn.prepare(
            "SELECT cid, name, contact, phone, email, notes, created_at, updated_at
             FROM companies
             WHERE cid = ?1;",
        )?;
        let mut rows = stmt.query([cid])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_company_row(row)?));
        }
        Ok(None)
    }

    fn list_companies(&self) -> Vec<Company> {
        let result = (|| -> StoreResult<Vec<Company>> {
            let mut stmt = self.conn.prepare(
                "SELECT cid, name, contact, phone, email, notes, created_at, updated_at
                 FROM companies;",
            )?;
            let mut rows = stmt.query([])?;
            let mut companies = Vec::new();
            while let Some(row) = rows.next()? {
                companies.push(parse_company_row(row)?);
            }
            Ok(companies)
        })();
        match result {
            Ok(companies) => companies,
            Err(err) => {
                warn!("event=list_companies module=repo status=degraded error={err}");
                Vec::new()
            }
        }
    }

    fn delete_company(&self, cid: &str) {
        if let Err(err) = self
            .conn
            .execute("DELETE FROM companies WHERE cid = ?1;", [cid])
        {
            warn!("event=delete_company module=repo status=degraded cid={cid} error={err}");
        }
    }
}

impl ResponsibleRepository for SqliteStore<'_> {
    fn put_responsible(&self, responsible: &Responsible) -> StoreResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO responsibles (
                rid, name, role, phone, email, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                responsible.rid,
                responsible.name,
                responsible.role,
                responsible.phone,
                responsible.email,
                responsible.created_at,
                responsible.updated_at,
            ],
        )?;
        Ok(())
    }

    fn get_responsible(&self, rid: &str) -> StoreResult<Option<Responsible>> {
        let mut stmt = self.conn.prepare(
            "SELECT rid, name, role, phone, email, created_at, updated_at
             FROM responsibles
             WHERE rid = ?1;",
        )?;
        let mut rows = stmt.query([rid])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_responsible_row(row)?));
        }
        Ok(None)
    }

    fn list_responsibles(&self) -> Vec<Responsible> {
        let result = (|| -> StoreResult<Vec<Responsible>> {
            let mut stmt = self.conn.prepare(
                "SELECT rid, name, role, phone, email, created_at, updated_at
                 FROM responsibles;",
            )?;
            let mut rows = stmt.query([])?;
            let mut responsibles = Vec::new();
            while let Some(row) = rows.next()? {
                responsibles.push(parse_responsible_row(row)?);
            }
            Ok(responsibles)
        })();
        match result {
            Ok(responsibles) => responsibles,
            Err(err) => {
                warn!("event=list_responsibles module=repo status=degraded error={err}");
                Vec::new()
            }
        }
    }

    fn delete_responsible(&self, rid: &str) {
        if let Err(err) = self
            .conn
            .execute("DELETE FROM responsibles WHERE rid = ?1;", [rid])
        {
            warn!("event=delete_responsible module=repo status=degraded rid={rid} error={err}");
        }
    }
}

fn parse_company_row(row: &Row<'_>) -> StoreResult<Company> {
    Ok(Company {
        cid: row.get("cid")?,
        name: row.get("name")?,
        contact: row.get("contact")?,
        phone: row.get("phone")?,
        email: row.get("email")?,
        notes: row.get("notes")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn parse_responsible_row(row: &Row<'_>) -> StoreResult<Responsible> {
    Ok(Responsible {
        rid: row.get("rid")?,
        name: row.get("name")?,
        role: row.get("role")?,
        phone: row.get("phone")?,
        email: row.get("email")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}
