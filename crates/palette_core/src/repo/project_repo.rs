//! Project repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Assign timestamp-derived ids to created projects.
//! - Keep the action list canonical on every write.
//!
//! # Invariants
//! - `create_project` and `update_project` always leave `EDIT, DELETE` as
//!   the trailing actions.
//! - `insert_project` stores records as given so legacy action shapes stay
//!   readable.

use crate::model::project::{Project, ProjectDraft, ProjectId, ProjectPatch};
use crate::repo::ids::ProjectIdClock;
use crate::repo::store::{MemoryStore, RepoResult};

/// Repository interface for project CRUD operations.
pub trait ProjectRepository {
    /// Creates a project from a validated draft and returns its new id.
    fn create_project(&mut self, draft: &ProjectDraft) -> RepoResult<ProjectId>;
    /// Stores an existing record (fixtures, imports) without rewriting it.
    fn insert_project(&mut self, project: Project) -> RepoResult<()>;
    /// Applies a validated patch to the matching project.
    fn update_project(&mut self, id: &str, patch: &ProjectPatch) -> RepoResult<()>;
    fn get_project(&self, id: &str) -> Option<&Project>;
    /// Lists projects in insertion order.
    fn list_projects(&self) -> &[Project];
    /// Removes the matching project and returns it.
    fn delete_project(&mut self, id: &str) -> RepoResult<Project>;
}

/// In-memory project repository, one per session.
#[derive(Debug, Default)]
pub struct MemoryProjectRepository {
    store: MemoryStore<Project>,
    clock: ProjectIdClock,
}

impl MemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_id(&mut self) -> ProjectId {
        loop {
            let token = self.clock.next_token();
            if !self.store.contains(token.as_str()) {
                return token;
            }
        }
    }
}

impl ProjectRepository for MemoryProjectRepository {
    fn create_project(&mut self, draft: &ProjectDraft) -> RepoResult<ProjectId> {
        let id = self.fresh_id();
        self.store.insert(Project::from_draft(id.clone(), draft))?;
        Ok(id)
    }

    fn insert_project(&mut self, project: Project) -> RepoResult<()> {
        self.store.insert(project)
    }

    fn update_project(&mut self, id: &str, patch: &ProjectPatch) -> RepoResult<()> {
        self.store
            .update_with(id, |project| patch.apply_to(project))
    }

    fn get_project(&self, id: &str) -> Option<&Project> {
        self.store.get(id)
    }

    fn list_projects(&self) -> &[Project] {
        self.store.list()
    }

    fn delete_project(&mut self, id: &str) -> RepoResult<Project> {
        self.store.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryProjectRepository, ProjectRepository};
    use crate::model::project::{ProjectAction, ProjectDraft, ProjectPatch};

    #[test]
    fn created_ids_are_unique() {
        let mut repo = MemoryProjectRepository::new();
        let draft = ProjectDraft {
            title: "A".to_string(),
            ..ProjectDraft::default()
        };
        let first = repo.create_project(&draft).unwrap();
        let second = repo.create_project(&draft).unwrap();
        assert_ne!(first, second);
        assert_eq!(repo.list_projects().len(), 2);
    }

    #[test]
    fn update_without_actions_still_canonicalizes_legacy_shape() {
        let mut repo = MemoryProjectRepository::new();
        let draft = ProjectDraft {
            title: "Legacy".to_string(),
            ..ProjectDraft::default()
        };
        let id = repo.create_project(&draft).unwrap();
        let mut legacy = repo.delete_project(&id).unwrap();
        legacy.actions = vec![ProjectAction::Open, ProjectAction::Details];
        repo.insert_project(legacy).unwrap();
        assert_eq!(repo.get_project(&id).unwrap().actions.len(), 2);

        let patch = ProjectPatch {
            description: Some("touched".to_string()),
            ..ProjectPatch::default()
        };
        repo.update_project(&id, &patch).unwrap();
        assert_eq!(
            repo.get_project(&id).unwrap().actions,
            vec![
                ProjectAction::Open,
                ProjectAction::Details,
                ProjectAction::Edit,
                ProjectAction::Delete
            ]
        );
    }
}
