//! Note content formatting.
//!
//! # Responsibility
//! - Turn raw note text into ordered display blocks for the renderer.
//!
//! # Invariants
//! - Formatting is pure: no hidden state between calls.
//! - Raw content stays the source of truth; blocks are always derived.

pub mod note_format;
