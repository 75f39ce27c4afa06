//! Core domain logic for the project dashboard.
//! This crate is the single source of truth for business invariants.

pub mod config;
pub mod format;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;
pub mod view;

pub use config::{LoggingConfig, SessionConfig};
pub use format::note_format::{format_note, Block, Emphasis, InlineStyle};
pub use logging::{
    default_log_level, flush_logging, init_logging, logging_status, LoggingError,
};
pub use model::file::{FileDraft, FileEntry, FileId, FilePatch};
pub use model::note::{Note, NoteDraft, NoteId, NotePatch};
pub use model::project::{
    IconType, Progress, ProgressColor, Project, ProjectAction, ProjectDraft, ProjectId,
    ProjectPatch,
};
pub use model::todo::{Todo, TodoId, TodoPatch};
pub use model::validation::ValidationError;
pub use repo::store::{EntityKind, RepoError, RepoResult};
pub use service::dashboard::{Dashboard, UserAction};
pub use service::error::{ServiceError, ServiceResult};
pub use view::coordinator::{DetailView, ViewEffect, ViewError, ViewState};
pub use view::editor::{
    EditorMode, EditorSubmission, NoteEditor, NoteEditorMode, NoteSubmission, ProjectEditor,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
