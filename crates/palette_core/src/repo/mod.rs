//! In-memory entity stores.
//!
//! # Responsibility
//! - Hold the session's project, todo, note and file collections.
//! - Assign identities and report missing ids as semantic `NotFound` errors.
//!
//! # Invariants
//! - Collections keep insertion order.
//! - Nothing here is persisted; a store lives as long as its session.

pub mod ids;
pub mod project_repo;
pub mod store;
pub mod workspace_repo;
