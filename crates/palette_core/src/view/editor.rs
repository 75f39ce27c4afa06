//! Project and note editor modal state.
//!
//! # Responsibility
//! - Hold the create/edit form for a project or a note.
//! - Pre-fill project edits without the managed `EDIT`/`DELETE` actions.
//! - Stage note tags typed into the pending tag input.
//!
//! # Invariants
//! - Opening or closing always resets the form.
//! - Editors never write to stores; they hand out a submission.

use crate::model::note::{Note, NoteDraft, NoteId, NotePatch};
use crate::model::project::{Project, ProjectDraft, ProjectId, ProjectPatch};

/// What the modal is currently doing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorMode {
    #[default]
    Closed,
    Creating,
    Editing(ProjectId),
}

/// Store write requested by a submitted form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorSubmission {
    Create(ProjectDraft),
    Update {
        project_id: ProjectId,
        patch: ProjectPatch,
    },
}

/// Create/edit project modal.
#[derive(Debug, Clone, Default)]
pub struct ProjectEditor {
    mode: EditorMode,
    form: ProjectDraft,
}

impl ProjectEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != EditorMode::Closed
    }

    pub fn form(&self) -> &ProjectDraft {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProjectDraft {
        &mut self.form
    }

    /// Opens an empty form for a new project.
    pub fn open_new(&mut self) {
        self.mode = EditorMode::Creating;
        self.form = ProjectDraft::default();
    }

    /// Opens a form pre-filled from `project`.
    pub fn open_edit(&mut self, project: &Project) {
        self.mode = EditorMode::Editing(project.id.clone());
        self.form = ProjectDraft::from_project(project);
    }

    pub fn close(&mut self) {
        self.mode = EditorMode::Closed;
        self.form = ProjectDraft::default();
    }

    /// The write the current form asks for; `None` when the modal is closed.
    pub fn submission(&self) -> Option<EditorSubmission> {
        match &self.mode {
            EditorMode::Closed => None,
            EditorMode::Creating => Some(EditorSubmission::Create(self.form.clone())),
            EditorMode::Editing(project_id) => Some(EditorSubmission::Update {
                project_id: project_id.clone(),
                patch: self.form.to_patch(),
            }),
        }
    }
}

/// What the note modal is currently doing; both modes are scoped to a project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NoteEditorMode {
    #[default]
    Closed,
    Creating {
        project_id: ProjectId,
    },
    Editing {
        project_id: ProjectId,
        note_id: NoteId,
    },
}

impl NoteEditorMode {
    /// Project the open modal belongs to.
    pub fn project_id(&self) -> Option<&str> {
        match self {
            Self::Closed => None,
            Self::Creating { project_id } | Self::Editing { project_id, .. } => Some(project_id),
        }
    }
}

/// Store write requested by a submitted note form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteSubmission {
    Create {
        project_id: ProjectId,
        draft: NoteDraft,
    },
    Update {
        project_id: ProjectId,
        note_id: NoteId,
        patch: NotePatch,
    },
}

/// Create/edit note modal with a pending tag input.
#[derive(Debug, Clone, Default)]
pub struct NoteEditor {
    mode: NoteEditorMode,
    form: NoteDraft,
    pending_tag: String,
}

impl NoteEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &NoteEditorMode {
        &self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != NoteEditorMode::Closed
    }

    pub fn form(&self) -> &NoteDraft {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut NoteDraft {
        &mut self.form
    }

    pub fn pending_tag(&self) -> &str {
        &self.pending_tag
    }

    pub fn set_pending_tag(&mut self, text: impl Into<String>) {
        self.pending_tag = text.into();
    }

    /// Moves the pending tag into the form.
    ///
    /// Blank or already-listed tags are not added and the input is kept.
    pub fn commit_pending_tag(&mut self) -> bool {
        let tag = self.pending_tag.trim();
        if tag.is_empty() || self.form.tags.iter().any(|existing| existing == tag) {
            return false;
        }
        self.form.tags.push(tag.to_string());
        self.pending_tag.clear();
        true
    }

    /// Drops a tag from the form; `false` when it was not listed.
    pub fn remove_form_tag(&mut self, tag: &str) -> bool {
        let before = self.form.tags.len();
        self.form.tags.retain(|existing| existing != tag);
        self.form.tags.len() != before
    }

    /// Opens an empty form for a new note in `project_id`.
    pub fn open_new(&mut self, project_id: impl Into<ProjectId>) {
        self.mode = NoteEditorMode::Creating {
            project_id: project_id.into(),
        };
        self.form = NoteDraft::default();
        self.pending_tag.clear();
    }

    /// Opens a form pre-filled from `note`.
    pub fn open_edit(&mut self, project_id: impl Into<ProjectId>, note: &Note) {
        self.mode = NoteEditorMode::Editing {
            project_id: project_id.into(),
            note_id: note.id,
        };
        self.form = NoteDraft {
            title: note.title.clone(),
            content: note.content().to_string(),
            tags: note.tags().iter().cloned().collect(),
            date: Some(note.date),
        };
        self.pending_tag.clear();
    }

    pub fn close(&mut self) {
        self.mode = NoteEditorMode::Closed;
        self.form = NoteDraft::default();
        self.pending_tag.clear();
    }

    /// The write the current form asks for; `None` when the modal is closed.
    pub fn submission(&self) -> Option<NoteSubmission> {
        match &self.mode {
            NoteEditorMode::Closed => None,
            NoteEditorMode::Creating { project_id } => Some(NoteSubmission::Create {
                project_id: project_id.clone(),
                draft: self.form.clone(),
            }),
            NoteEditorMode::Editing {
                project_id,
                note_id,
            } => Some(NoteSubmission::Update {
                project_id: project_id.clone(),
                note_id: *note_id,
                patch: NotePatch {
                    title: Some(self.form.title.clone()),
                    content: Some(self.form.content.clone()),
                    tags: Some(self.form.tags.clone()),
                },
            }),
        }
    }
}
