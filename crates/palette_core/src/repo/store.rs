//! Generic insertion-ordered in-memory store.
//!
//! # Responsibility
//! - Hold one entity collection with unique ids.
//! - Report missing ids as semantic `NotFound` errors.
//!
//! # Invariants
//! - `list()` returns entries in insertion order.
//! - Ids are unique within a store; duplicates are rejected on insert.
//! - A failed update/remove leaves the collection unchanged.

use crate::model::file::{FileEntry, FileId};
use crate::model::note::{Note, NoteId};
use crate::model::project::{Project, ProjectId};
use crate::model::todo::{Todo, TodoId};
use std::borrow::Borrow;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Entity family, used in error messages and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Project,
    Todo,
    Note,
    File,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Todo => "todo",
            Self::Note => "note",
            Self::File => "file",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Store-level error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepoError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: EntityKind, id: String },
}

impl RepoError {
    pub fn not_found(kind: EntityKind, id: impl Display) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Record with a stable identity inside its collection.
pub trait Entity {
    type Id: Eq + Display;
    const KIND: EntityKind;

    fn id(&self) -> &Self::Id;
}

impl Entity for Project {
    type Id = ProjectId;
    const KIND: EntityKind = EntityKind::Project;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Entity for Todo {
    type Id = TodoId;
    const KIND: EntityKind = EntityKind::Todo;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Entity for Note {
    type Id = NoteId;
    const KIND: EntityKind = EntityKind::Note;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Entity for FileEntry {
    type Id = FileId;
    const KIND: EntityKind = EntityKind::File;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Vec-backed collection; lookups are linear, which suits dashboard sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryStore<T: Entity> {
    items: Vec<T>,
}

impl<T: Entity> Default for MemoryStore<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> MemoryStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from existing records, rejecting duplicate ids.
    pub fn from_items(items: impl IntoIterator<Item = T>) -> RepoResult<Self> {
        let mut store = Self::new();
        for item in items {
            store.insert(item)?;
        }
        Ok(store)
    }

    /// Appends a record whose id is not yet present.
    pub fn insert(&mut self, item: T) -> RepoResult<()> {
        if self.position(item.id()).is_some() {
            return Err(RepoError::DuplicateId {
                kind: T::KIND,
                id: item.id().to_string(),
            });
        }
        self.items.push(item);
        Ok(())
    }

    pub fn get<Q>(&self, id: &Q) -> Option<&T>
    where
        T::Id: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.position(id).map(|index| &self.items[index])
    }

    pub fn contains<Q>(&self, id: &Q) -> bool
    where
        T::Id: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.position(id).is_some()
    }

    /// Runs `f` on the matching record in place.
    pub fn update_with<Q, R>(&mut self, id: &Q, f: impl FnOnce(&mut T) -> R) -> RepoResult<R>
    where
        T::Id: Borrow<Q>,
        Q: Eq + Display + ?Sized,
    {
        let index = self
            .position(id)
            .ok_or_else(|| RepoError::not_found(T::KIND, id))?;
        Ok(f(&mut self.items[index]))
    }

    /// Removes the matching record, keeping the relative order of the rest.
    pub fn remove<Q>(&mut self, id: &Q) -> RepoResult<T>
    where
        T::Id: Borrow<Q>,
        Q: Eq + Display + ?Sized,
    {
        let index = self
            .position(id)
            .ok_or_else(|| RepoError::not_found(T::KIND, id))?;
        Ok(self.items.remove(index))
    }

    pub fn list(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position<Q>(&self, id: &Q) -> Option<usize>
    where
        T::Id: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.items
            .iter()
            .position(|item| <T::Id as Borrow<Q>>::borrow(item.id()) == id)
    }
}
