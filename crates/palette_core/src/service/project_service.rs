//! Project use-case service.
//!
//! # Responsibility
//! - Provide project create/update/delete/list APIs.
//! - Validate drafts and patches before the repository is touched.
//!
//! # Invariants
//! - A rejected command performs no write.
//! - Created and updated projects always carry `EDIT, DELETE` last.

use crate::model::project::{Project, ProjectDraft, ProjectId, ProjectPatch};
use crate::repo::project_repo::ProjectRepository;
use crate::repo::store::{EntityKind, RepoError, RepoResult};
use crate::service::error::ServiceResult;
use log::{debug, info};

/// Project service facade over repository implementations.
pub struct ProjectService<R: ProjectRepository> {
    repo: R,
}

impl<R: ProjectRepository> ProjectService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and creates a project; returns the new id.
    pub fn create_project(&mut self, draft: &ProjectDraft) -> ServiceResult<ProjectId> {
        draft.validate()?;
        let id = self.repo.create_project(draft)?;
        info!(
            "event=project_create module=service status=ok project_id={} actions={}",
            id,
            draft.actions.len()
        );
        Ok(id)
    }

    /// Stores a fixture/import record as-is.
    pub fn insert_project(&mut self, project: Project) -> RepoResult<()> {
        let id = project.id.clone();
        self.repo.insert_project(project)?;
        debug!("event=project_insert module=service status=ok project_id={id}");
        Ok(())
    }

    /// Validates and applies a partial update.
    pub fn update_project(&mut self, id: &str, patch: &ProjectPatch) -> ServiceResult<()> {
        patch.validate()?;
        self.repo.update_project(id, patch)?;
        info!("event=project_update module=service status=ok project_id={id}");
        Ok(())
    }

    /// Removes a project and returns the removed record.
    pub fn delete_project(&mut self, id: &str) -> ServiceResult<Project> {
        let removed = self.repo.delete_project(id)?;
        info!("event=project_delete module=service status=ok project_id={id}");
        Ok(removed)
    }

    pub fn get_project(&self, id: &str) -> RepoResult<&Project> {
        self.repo
            .get_project(id)
            .ok_or_else(|| RepoError::not_found(EntityKind::Project, id))
    }

    pub fn list_projects(&self) -> &[Project] {
        self.repo.list_projects()
    }
}
