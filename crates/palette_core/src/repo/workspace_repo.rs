//! Per-project content aggregate: todos, notes and file entries.
//!
//! # Responsibility
//! - Own the three content collections of exactly one project.
//! - Assign integer ids per collection.
//!
//! # Invariants
//! - Inputs are validated by the caller; this layer only enforces identity
//!   and existence.
//! - Note content writes always go through `Note::set_content` so derived
//!   blocks stay in sync.

use crate::model::file::{FileDraft, FileEntry, FileId, FilePatch};
use crate::model::note::{Note, NoteDraft, NoteId, NotePatch};
use crate::model::todo::{Todo, TodoId, TodoPatch};
use crate::repo::ids::IdSequence;
use crate::repo::store::{MemoryStore, RepoResult};
use chrono::NaiveDate;

/// Content owned by one project.
#[derive(Debug, Clone, Default)]
pub struct ProjectWorkspace {
    todos: MemoryStore<Todo>,
    notes: MemoryStore<Note>,
    files: MemoryStore<FileEntry>,
    todo_ids: IdSequence,
    note_ids: IdSequence,
    file_ids: IdSequence,
}

impl ProjectWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a workspace from existing records; new ids continue after them.
    pub fn with_contents(
        todos: Vec<Todo>,
        notes: Vec<Note>,
        files: Vec<FileEntry>,
    ) -> RepoResult<Self> {
        let todo_ids = IdSequence::after_max(todos.iter().map(|todo| todo.id));
        let note_ids = IdSequence::after_max(notes.iter().map(|note| note.id));
        let file_ids = IdSequence::after_max(files.iter().map(|file| file.id));
        Ok(Self {
            todos: MemoryStore::from_items(todos)?,
            notes: MemoryStore::from_items(notes)?,
            files: MemoryStore::from_items(files)?,
            todo_ids,
            note_ids,
            file_ids,
        })
    }

    pub fn todos(&self) -> &[Todo] {
        self.todos.list()
    }

    pub fn notes(&self) -> &[Note] {
        self.notes.list()
    }

    pub fn files(&self) -> &[FileEntry] {
        self.files.list()
    }

    pub fn get_note(&self, id: NoteId) -> Option<&Note> {
        self.notes.get(&id)
    }

    pub fn add_todo(&mut self, text: impl Into<String>) -> RepoResult<TodoId> {
        let id = self.todo_ids.next_id();
        self.todos.insert(Todo::new(id, text))?;
        Ok(id)
    }

    pub fn update_todo(&mut self, id: TodoId, patch: &TodoPatch) -> RepoResult<()> {
        self.todos.update_with(&id, |todo| patch.apply_to(todo))
    }

    /// Flips completion; returns the new `completed` value.
    pub fn toggle_todo(&mut self, id: TodoId) -> RepoResult<bool> {
        self.todos.update_with(&id, Todo::toggle)
    }

    pub fn remove_todo(&mut self, id: TodoId) -> RepoResult<Todo> {
        self.todos.remove(&id)
    }

    pub fn add_note(&mut self, draft: NoteDraft, today: NaiveDate) -> RepoResult<NoteId> {
        let id = self.note_ids.next_id();
        self.notes.insert(draft.into_note(id, today))?;
        Ok(id)
    }

    pub fn update_note(&mut self, id: NoteId, patch: &NotePatch) -> RepoResult<()> {
        self.notes.update_with(&id, |note| patch.apply_to(note))
    }

    /// Adds a tag to a note; `Ok(false)` when the tag was already present.
    pub fn add_note_tag(&mut self, id: NoteId, tag: &str) -> RepoResult<bool> {
        self.notes.update_with(&id, |note| note.insert_tag(tag))
    }

    /// Removes a tag from a note; `Ok(false)` when the tag was absent.
    pub fn remove_note_tag(&mut self, id: NoteId, tag: &str) -> RepoResult<bool> {
        self.notes.update_with(&id, |note| note.remove_tag(tag))
    }

    pub fn remove_note(&mut self, id: NoteId) -> RepoResult<Note> {
        self.notes.remove(&id)
    }

    pub fn add_file(&mut self, draft: FileDraft, today: NaiveDate) -> RepoResult<FileId> {
        let id = self.file_ids.next_id();
        self.files.insert(draft.into_entry(id, today))?;
        Ok(id)
    }

    pub fn update_file(&mut self, id: FileId, patch: &FilePatch) -> RepoResult<()> {
        self.files.update_with(&id, |file| patch.apply_to(file))
    }

    pub fn remove_file(&mut self, id: FileId) -> RepoResult<FileEntry> {
        self.files.remove(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectWorkspace;
    use crate::model::note::{NoteDraft, NotePatch};
    use crate::model::todo::Todo;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 2).unwrap()
    }

    #[test]
    fn new_ids_continue_after_seeded_records() {
        let mut workspace =
            ProjectWorkspace::with_contents(vec![Todo::new(3, "seeded")], vec![], vec![]).unwrap();
        assert_eq!(workspace.add_todo("next").unwrap(), 4);
        let note_id = workspace
            .add_note(NoteDraft::new("first", "body"), today())
            .unwrap();
        assert_eq!(note_id, 1);
    }

    #[test]
    fn note_tags_can_be_added_and_removed() {
        let mut workspace = ProjectWorkspace::new();
        let id = workspace
            .add_note(NoteDraft::new("tagged", "body"), today())
            .unwrap();
        assert!(workspace.add_note_tag(id, "ideas").unwrap());
        assert!(!workspace.add_note_tag(id, "ideas").unwrap());
        assert!(workspace.remove_note_tag(id, "ideas").unwrap());
        assert!(workspace.add_note_tag(99, "ideas").unwrap_err().is_not_found());
    }

    #[test]
    fn update_note_refreshes_blocks() {
        let mut workspace = ProjectWorkspace::new();
        let id = workspace
            .add_note(NoteDraft::new("n", "plain"), today())
            .unwrap();
        let patch = NotePatch {
            content: Some("# Heading\n- item".to_string()),
            ..NotePatch::default()
        };
        workspace.update_note(id, &patch).unwrap();
        assert_eq!(workspace.get_note(id).unwrap().blocks().len(), 2);
    }
}
