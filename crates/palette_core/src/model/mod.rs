//! Domain model for the project dashboard.
//!
//! # Responsibility
//! - Define the entities rendered by the dashboard: projects, todos, notes
//!   and file entries.
//! - Define create drafts and partial-update patches for each entity.
//! - Own field validation so that no store is mutated with invalid input.
//!
//! # Invariants
//! - Project progress is always within `0..=100`.
//! - Written projects always end their action list with `EDIT, DELETE`.
//! - Note tags never contain duplicates or blank entries.

pub mod file;
pub mod note;
pub mod project;
pub mod todo;
pub mod validation;
