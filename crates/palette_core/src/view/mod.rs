//! View-state coordination for the dashboard.
//!
//! # Responsibility
//! - Track which detail view, tab and confirmation prompt is open.
//! - Track the project editor modal and its form.
//!
//! # Invariants
//! - View state changes only through exhaustive transition tables.
//! - View components never mutate stores; they emit effects instead.

pub mod coordinator;
pub mod editor;
