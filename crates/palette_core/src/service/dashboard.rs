//! Dashboard session handle.
//!
//! # Responsibility
//! - Own every store, the view coordinator and the project/note editors for
//!   one session.
//! - Route coordinator effects (edit/delete requests) to the editor and the
//!   project service.
//!
//! # Invariants
//! - Every stored project has exactly one workspace, and vice versa.
//! - Deleting a project drops its workspace and any view state that refers
//!   to it, open editors included. Deleting a note closes a note editor
//!   editing it.
//! - Failed commands are logged at `warn` and leave all state unchanged.

use crate::config::SessionConfig;
use crate::model::file::{FileDraft, FileEntry, FileId, FilePatch};
use crate::model::note::{validate_tag, Note, NoteDraft, NoteId, NotePatch};
use crate::model::project::{Project, ProjectAction, ProjectDraft, ProjectId, ProjectPatch};
use crate::model::todo::{validate_todo_text, Todo, TodoId, TodoPatch};
use crate::repo::project_repo::MemoryProjectRepository;
use crate::repo::store::{EntityKind, RepoError, RepoResult};
use crate::repo::workspace_repo::ProjectWorkspace;
use crate::seed;
use crate::service::error::{log_failure, ServiceError, ServiceResult};
use crate::service::project_service::ProjectService;
use crate::view::coordinator::{DetailView, ViewCoordinator, ViewEffect, ViewEvent, ViewState};
use crate::view::editor::{
    EditorMode, EditorSubmission, NoteEditor, NoteEditorMode, NoteSubmission, ProjectEditor,
};
use chrono::NaiveDate;
use log::{debug, info};
use std::collections::HashMap;

/// User input routed through the view coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// A card button was pressed.
    Card {
        project_id: ProjectId,
        action: ProjectAction,
    },
    SelectTab(DetailView),
    ConfirmDelete,
    CancelDelete,
    CloseDetail,
}

/// One dashboard session.
pub struct Dashboard {
    projects: ProjectService<MemoryProjectRepository>,
    workspaces: HashMap<ProjectId, ProjectWorkspace>,
    coordinator: ViewCoordinator,
    editor: ProjectEditor,
    note_editor: NoteEditor,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::empty()
    }
}

impl Dashboard {
    /// A session without any projects.
    pub fn empty() -> Self {
        Self {
            projects: ProjectService::new(MemoryProjectRepository::new()),
            workspaces: HashMap::new(),
            coordinator: ViewCoordinator::new(),
            editor: ProjectEditor::new(),
            note_editor: NoteEditor::new(),
        }
    }

    /// A session loaded with the sample projects, each with its own copy of
    /// the sample todos, notes and files.
    pub fn seeded() -> ServiceResult<Self> {
        let mut dashboard = Self::empty();
        for project in seed::seed_projects() {
            let workspace = ProjectWorkspace::with_contents(
                seed::seed_todos(),
                seed::seed_notes(),
                seed::seed_files(),
            )?;
            let project_id = project.id.clone();
            dashboard.projects.insert_project(project)?;
            dashboard.workspaces.insert(project_id, workspace);
        }
        info!(
            "event=session_seed module=service status=ok projects={}",
            dashboard.workspaces.len()
        );
        Ok(dashboard)
    }

    pub fn from_config(config: &SessionConfig) -> ServiceResult<Self> {
        if config.seed_fixtures {
            Self::seeded()
        } else {
            debug!("event=session_start module=service status=ok seeded=false");
            Ok(Self::empty())
        }
    }

    // Queries

    /// Projects in insertion order.
    pub fn list_projects(&self) -> &[Project] {
        self.projects.list_projects()
    }

    pub fn get_project(&self, project_id: &str) -> ServiceResult<&Project> {
        Ok(self.projects.get_project(project_id)?)
    }

    pub fn list_todos(&self, project_id: &str) -> ServiceResult<&[Todo]> {
        Ok(self.workspace(project_id)?.todos())
    }

    pub fn list_notes(&self, project_id: &str) -> ServiceResult<&[Note]> {
        Ok(self.workspace(project_id)?.notes())
    }

    pub fn get_note(&self, project_id: &str, note_id: NoteId) -> ServiceResult<&Note> {
        let note = self
            .workspace(project_id)?
            .get_note(note_id)
            .ok_or_else(|| RepoError::not_found(EntityKind::Note, note_id))?;
        Ok(note)
    }

    pub fn list_files(&self, project_id: &str) -> ServiceResult<&[FileEntry]> {
        Ok(self.workspace(project_id)?.files())
    }

    pub fn view_state(&self) -> &ViewState {
        self.coordinator.state()
    }

    pub fn editor(&self) -> &ProjectEditor {
        &self.editor
    }

    /// Form of the open editor, for field-by-field input.
    pub fn project_form_mut(&mut self) -> &mut ProjectDraft {
        self.editor.form_mut()
    }

    pub fn note_editor(&self) -> &NoteEditor {
        &self.note_editor
    }

    /// Open note editor, for form input and pending tag handling.
    pub fn note_editor_mut(&mut self) -> &mut NoteEditor {
        &mut self.note_editor
    }

    // Projects

    /// Creates a project with an empty workspace.
    pub fn create_project(&mut self, draft: &ProjectDraft) -> ServiceResult<ProjectId> {
        let project_id = self
            .projects
            .create_project(draft)
            .inspect_err(|err| log_failure("project_create", err))?;
        self.workspaces
            .insert(project_id.clone(), ProjectWorkspace::new());
        Ok(project_id)
    }

    pub fn update_project(&mut self, project_id: &str, patch: &ProjectPatch) -> ServiceResult<()> {
        self.projects
            .update_project(project_id, patch)
            .inspect_err(|err| log_failure("project_update", err))
    }

    /// Deletes a project together with its contents.
    pub fn delete_project(&mut self, project_id: &str) -> ServiceResult<Project> {
        let removed = self
            .projects
            .delete_project(project_id)
            .inspect_err(|err| log_failure("project_delete", err))?;
        self.workspaces.remove(project_id);
        self.coordinator.forget_project(project_id);
        if matches!(self.editor.mode(), EditorMode::Editing(id) if id == project_id) {
            self.editor.close();
        }
        if self.note_editor.mode().project_id() == Some(project_id) {
            self.note_editor.close();
        }
        Ok(removed)
    }

    // Todos

    pub fn add_todo(&mut self, project_id: &str, text: &str) -> ServiceResult<TodoId> {
        validate_todo_text(text).map_err(|err| fail("todo_add", err))?;
        let workspace = self
            .workspace_mut(project_id)
            .map_err(|err| fail("todo_add", err))?;
        let todo_id = workspace
            .add_todo(text.trim())
            .map_err(|err| fail("todo_add", err))?;
        debug!("event=todo_add module=service status=ok project_id={project_id} todo_id={todo_id}");
        Ok(todo_id)
    }

    /// Flips a todo's completion; returns the new value.
    pub fn toggle_todo(&mut self, project_id: &str, todo_id: TodoId) -> ServiceResult<bool> {
        let completed = self
            .workspace_mut(project_id)
            .and_then(|workspace| workspace.toggle_todo(todo_id))
            .map_err(|err| fail("todo_toggle", err))?;
        debug!(
            "event=todo_toggle module=service status=ok project_id={project_id} todo_id={todo_id} completed={completed}"
        );
        Ok(completed)
    }

    pub fn update_todo(
        &mut self,
        project_id: &str,
        todo_id: TodoId,
        patch: &TodoPatch,
    ) -> ServiceResult<()> {
        patch.validate().map_err(|err| fail("todo_update", err))?;
        self.workspace_mut(project_id)
            .and_then(|workspace| workspace.update_todo(todo_id, patch))
            .map_err(|err| fail("todo_update", err))?;
        debug!("event=todo_update module=service status=ok project_id={project_id} todo_id={todo_id}");
        Ok(())
    }

    pub fn delete_todo(&mut self, project_id: &str, todo_id: TodoId) -> ServiceResult<Todo> {
        let removed = self
            .workspace_mut(project_id)
            .and_then(|workspace| workspace.remove_todo(todo_id))
            .map_err(|err| fail("todo_delete", err))?;
        debug!("event=todo_delete module=service status=ok project_id={project_id} todo_id={todo_id}");
        Ok(removed)
    }

    // Notes

    /// Adds a note; the date defaults to today.
    pub fn add_note(&mut self, project_id: &str, draft: NoteDraft) -> ServiceResult<NoteId> {
        draft.validate().map_err(|err| fail("note_add", err))?;
        let note_id = self
            .workspace_mut(project_id)
            .and_then(|workspace| workspace.add_note(draft, today()))
            .map_err(|err| fail("note_add", err))?;
        info!("event=note_add module=service status=ok project_id={project_id} note_id={note_id}");
        Ok(note_id)
    }

    pub fn update_note(
        &mut self,
        project_id: &str,
        note_id: NoteId,
        patch: &NotePatch,
    ) -> ServiceResult<()> {
        patch.validate().map_err(|err| fail("note_update", err))?;
        self.workspace_mut(project_id)
            .and_then(|workspace| workspace.update_note(note_id, patch))
            .map_err(|err| fail("note_update", err))?;
        info!("event=note_update module=service status=ok project_id={project_id} note_id={note_id}");
        Ok(())
    }

    pub fn delete_note(&mut self, project_id: &str, note_id: NoteId) -> ServiceResult<Note> {
        let removed = self
            .workspace_mut(project_id)
            .and_then(|workspace| workspace.remove_note(note_id))
            .map_err(|err| fail("note_delete", err))?;
        let editing_removed = matches!(
            self.note_editor.mode(),
            NoteEditorMode::Editing { project_id: editing, note_id: id }
                if editing == project_id && *id == note_id
        );
        if editing_removed {
            self.note_editor.close();
        }
        info!("event=note_delete module=service status=ok project_id={project_id} note_id={note_id}");
        Ok(removed)
    }

    /// Returns `false` when the note already carried the tag.
    pub fn add_note_tag(
        &mut self,
        project_id: &str,
        note_id: NoteId,
        tag: &str,
    ) -> ServiceResult<bool> {
        validate_tag(tag).map_err(|err| fail("note_tag_add", err))?;
        let added = self
            .workspace_mut(project_id)
            .and_then(|workspace| workspace.add_note_tag(note_id, tag))
            .map_err(|err| fail("note_tag_add", err))?;
        debug!(
            "event=note_tag_add module=service status=ok project_id={project_id} note_id={note_id} changed={added}"
        );
        Ok(added)
    }

    /// Returns `false` when the note did not carry the tag.
    pub fn remove_note_tag(
        &mut self,
        project_id: &str,
        note_id: NoteId,
        tag: &str,
    ) -> ServiceResult<bool> {
        let removed = self
            .workspace_mut(project_id)
            .and_then(|workspace| workspace.remove_note_tag(note_id, tag))
            .map_err(|err| fail("note_tag_remove", err))?;
        debug!(
            "event=note_tag_remove module=service status=ok project_id={project_id} note_id={note_id} changed={removed}"
        );
        Ok(removed)
    }

    // Files

    /// Adds a file entry; kind is inferred from the name when unset.
    pub fn add_file(&mut self, project_id: &str, draft: FileDraft) -> ServiceResult<FileId> {
        draft.validate().map_err(|err| fail("file_add", err))?;
        let file_id = self
            .workspace_mut(project_id)
            .and_then(|workspace| workspace.add_file(draft, today()))
            .map_err(|err| fail("file_add", err))?;
        info!("event=file_add module=service status=ok project_id={project_id} file_id={file_id}");
        Ok(file_id)
    }

    pub fn update_file(
        &mut self,
        project_id: &str,
        file_id: FileId,
        patch: &FilePatch,
    ) -> ServiceResult<()> {
        patch.validate().map_err(|err| fail("file_update", err))?;
        self.workspace_mut(project_id)
            .and_then(|workspace| workspace.update_file(file_id, patch))
            .map_err(|err| fail("file_update", err))?;
        info!("event=file_update module=service status=ok project_id={project_id} file_id={file_id}");
        Ok(())
    }

    pub fn delete_file(&mut self, project_id: &str, file_id: FileId) -> ServiceResult<FileEntry> {
        let removed = self
            .workspace_mut(project_id)
            .and_then(|workspace| workspace.remove_file(file_id))
            .map_err(|err| fail("file_delete", err))?;
        info!("event=file_delete module=service status=ok project_id={project_id} file_id={file_id}");
        Ok(removed)
    }

    // View routing

    /// Feeds one user action to the coordinator and routes its effect.
    ///
    /// The routed effect is returned so callers can react to it as well.
    pub fn dispatch(&mut self, action: UserAction) -> ServiceResult<Option<ViewEffect>> {
        let effect = self
            .apply_view_action(action)
            .inspect_err(|err| log_failure("view_dispatch", err))?;
        match &effect {
            Some(ViewEffect::EditRequested(project_id)) => {
                self.open_project_editor(Some(project_id.as_str()))?;
            }
            Some(ViewEffect::DeleteRequested(project_id)) => {
                self.delete_project(project_id)?;
            }
            None => {}
        }
        Ok(effect)
    }

    fn apply_view_action(&mut self, action: UserAction) -> ServiceResult<Option<ViewEffect>> {
        let event = match action {
            UserAction::Card { project_id, action } => {
                let project = self.projects.get_project(&project_id)?;
                let effect = self.coordinator.handle(ViewEvent::Action { project, action })?;
                debug!(
                    "event=view_action module=view status=ok project_id={project_id} action={action}"
                );
                return Ok(effect);
            }
            UserAction::SelectTab(view) => ViewEvent::SelectTab(view),
            UserAction::ConfirmDelete => ViewEvent::ConfirmDelete,
            UserAction::CancelDelete => ViewEvent::CancelDelete,
            UserAction::CloseDetail => ViewEvent::Close,
        };
        Ok(self.coordinator.handle(event)?)
    }

    // Editor

    /// Opens the editor: empty for `None`, pre-filled for an existing project.
    pub fn open_project_editor(&mut self, project_id: Option<&str>) -> ServiceResult<()> {
        match project_id {
            None => self.editor.open_new(),
            Some(project_id) => {
                let project = self
                    .projects
                    .get_project(project_id)
                    .map_err(|err| fail("editor_open", err))?;
                self.editor.open_edit(project);
            }
        }
        debug!("event=editor_open module=view status=ok mode={:?}", self.editor.mode());
        Ok(())
    }

    /// Submits the editor form. The editor closes only when the write
    /// succeeds; returns the created project's id for new projects.
    pub fn submit_project_editor(&mut self) -> ServiceResult<Option<ProjectId>> {
        let created = match self.editor.submission() {
            None => return Ok(None),
            Some(EditorSubmission::Create(draft)) => Some(self.create_project(&draft)?),
            Some(EditorSubmission::Update { project_id, patch }) => {
                self.update_project(&project_id, &patch)?;
                None
            }
        };
        self.editor.close();
        Ok(created)
    }

    pub fn close_project_editor(&mut self) {
        self.editor.close();
    }

    /// Opens the note editor in `project_id`: empty for `None`, pre-filled
    /// from the note otherwise.
    pub fn open_note_editor(
        &mut self,
        project_id: &str,
        note_id: Option<NoteId>,
    ) -> ServiceResult<()> {
        match note_id {
            None => {
                self.workspace(project_id)
                    .map_err(|err| fail("note_editor_open", err))?;
                self.note_editor.open_new(project_id);
            }
            Some(note_id) => {
                let note = self
                    .workspaces
                    .get(project_id)
                    .ok_or_else(|| RepoError::not_found(EntityKind::Project, project_id))
                    .and_then(|workspace| {
                        workspace
                            .get_note(note_id)
                            .ok_or_else(|| RepoError::not_found(EntityKind::Note, note_id))
                    })
                    .map_err(|err| fail("note_editor_open", err))?;
                self.note_editor.open_edit(project_id, note);
            }
        }
        debug!(
            "event=note_editor_open module=view status=ok project_id={project_id} editing={}",
            note_id.is_some()
        );
        Ok(())
    }

    /// Submits the note form. The editor closes only when the write
    /// succeeds; returns the created note's id for new notes.
    pub fn submit_note_editor(&mut self) -> ServiceResult<Option<NoteId>> {
        let created = match self.note_editor.submission() {
            None => return Ok(None),
            Some(NoteSubmission::Create { project_id, draft }) => {
                Some(self.add_note(&project_id, draft)?)
            }
            Some(NoteSubmission::Update {
                project_id,
                note_id,
                patch,
            }) => {
                self.update_note(&project_id, note_id, &patch)?;
                None
            }
        };
        self.note_editor.close();
        Ok(created)
    }

    pub fn close_note_editor(&mut self) {
        self.note_editor.close();
    }

    fn workspace(&self, project_id: &str) -> RepoResult<&ProjectWorkspace> {
        self.workspaces
            .get(project_id)
            .ok_or_else(|| RepoError::not_found(EntityKind::Project, project_id))
    }

    fn workspace_mut(&mut self, project_id: &str) -> RepoResult<&mut ProjectWorkspace> {
        self.workspaces
            .get_mut(project_id)
            .ok_or_else(|| RepoError::not_found(EntityKind::Project, project_id))
    }
}

fn fail(event: &str, err: impl Into<ServiceError>) -> ServiceError {
    let err = err.into();
    log_failure(event, &err);
    err
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
