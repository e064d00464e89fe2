//! Use-case services over the repositories.
//!
//! # Responsibility
//! - Orchestrate repository calls into admin/list workflows.
//! - Keep UI layers decoupled from storage and blob-format details.

pub mod content_service;
pub mod session;
