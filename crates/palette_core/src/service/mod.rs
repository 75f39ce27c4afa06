//! Use-case services.
//!
//! # Responsibility
//! - Validate input before any store mutation.
//! - Orchestrate stores and view components into session-level commands.
//! - Emit metadata-only log events for every command outcome.

pub mod dashboard;
pub mod error;
pub mod project_service;
