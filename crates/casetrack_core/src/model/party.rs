//! Company and responsible directory records.
//!
//! # Responsibility
//! - Define the two independent directory entities cases reference.
//!
//! # Invariants
//! - `cid`/`rid` are random, stable identifiers.
//! - Directory records have independent lifecycles: deleting one never
//!   cascades into cases that reference it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Customer company a case can be opened against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub cid: String,
    pub name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Company {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            cid: Uuid::new_v4().to_string(),
            name: name.into(),
            contact: String::new(),
            phone: String::new(),
            email: String::new(),
            notes: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}

/// Support staff member who opens and closes cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Responsible {
    pub rid: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Responsible {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            rid: Uuid::new_v4().to_string(),
            name: name.into(),
            role: String::new(),
            phone: String::new(),
            email: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Company, Responsible};

    #[test]
    fn new_records_carry_fresh_ids() {
        let a = Company::new("Acme");
        let b = Company::new("Acme");
        assert_ne!(a.cid, b.cid);

        let r = Responsible::new("Rosa");
        assert!(!r.rid.is_empty());
        assert_eq!(r.name, "Rosa");
    }

    #[test]
    fn sparse_json_deserializes_with_defaults() {
        let c: Company =
            serde_json::from_str(r#"{"cid":"c-1","name":"Acme"}"#).unwrap();
        assert_eq!(c.contact, "");
        assert_eq!(c.created_at, "");
    }
}
