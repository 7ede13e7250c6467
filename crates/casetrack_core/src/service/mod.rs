//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep boundary callers decoupled from storage details.

pub mod case_service;
pub mod directory_service;
