//! Project detail view state machine.
//!
//! # Responsibility
//! - Apply card actions and detail-view events to the view state.
//! - Emit edit/delete requests for the surrounding session to route.
//!
//! # Invariants
//! - A rejected event leaves the state untouched.
//! - Delete requests are only emitted after an explicit confirmation.

use crate::model::project::{Project, ProjectAction, ProjectId};
use serde::{Deserialize, Serialize};

/// Tab shown in the project detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailView {
    Overview,
    Todo,
    Notes,
    Files,
}

impl DetailView {
    /// Content tabs in the order `OPEN` checks them.
    pub const CONTENT_TABS: [DetailView; 3] = [Self::Todo, Self::Notes, Self::Files];

    /// The content tab a card action jumps to, if any.
    pub fn for_action(action: ProjectAction) -> Option<Self> {
        match action {
            ProjectAction::Todo => Some(Self::Todo),
            ProjectAction::Notes => Some(Self::Notes),
            ProjectAction::Files => Some(Self::Files),
            ProjectAction::Open
            | ProjectAction::Details
            | ProjectAction::Edit
            | ProjectAction::Delete => None,
        }
    }

    fn action(self) -> Option<ProjectAction> {
        match self {
            Self::Overview => None,
            Self::Todo => Some(ProjectAction::Todo),
            Self::Notes => Some(ProjectAction::Notes),
            Self::Files => Some(ProjectAction::Files),
        }
    }
}

/// Snapshot of the detail view state read by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// `None` until a detail view has been opened.
    pub active_view: Option<DetailView>,
    pub detail_open: bool,
    /// Project shown by the detail view.
    pub detail_project: Option<ProjectId>,
    /// Project awaiting delete confirmation.
    pub pending_delete: Option<ProjectId>,
}

impl ViewState {
    pub fn delete_confirm_pending(&self) -> bool {
        self.pending_delete.is_some()
    }
}

/// Input to the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent<'a> {
    /// A card button was pressed on `project`.
    Action {
        project: &'a Project,
        action: ProjectAction,
    },
    /// A tab of the open detail view was selected.
    SelectTab(DetailView),
    ConfirmDelete,
    CancelDelete,
    Close,
}

/// Request for the session to act on stores or other view components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEffect {
    /// Open the project editor for this project.
    EditRequested(ProjectId),
    /// Delete this project (already confirmed).
    DeleteRequested(ProjectId),
}

/// Rejected transition; never fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("project {project_id} has no TODO, NOTES or FILES action to open")]
    NothingToOpen { project_id: ProjectId },
    #[error("project {project_id} does not expose the {action} action")]
    ActionUnavailable {
        project_id: ProjectId,
        action: ProjectAction,
    },
    #[error("no project deletion is awaiting confirmation")]
    NoPendingDelete,
    #[error("project detail view is not open")]
    DetailClosed,
}

/// Session-scoped detail view coordinator.
#[derive(Debug, Clone, Default)]
pub struct ViewCoordinator {
    state: ViewState,
}

impl ViewCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Applies one event; returns an effect for the caller to route.
    pub fn handle(&mut self, event: ViewEvent<'_>) -> Result<Option<ViewEffect>, ViewError> {
        match event {
            ViewEvent::Action { project, action } => self.apply_action(project, action),
            ViewEvent::SelectTab(view) => {
                if !self.state.detail_open {
                    return Err(ViewError::DetailClosed);
                }
                self.state.active_view = Some(view);
                Ok(None)
            }
            ViewEvent::ConfirmDelete => {
                let project_id = self
                    .state
                    .pending_delete
                    .take()
                    .ok_or(ViewError::NoPendingDelete)?;
                Ok(Some(ViewEffect::DeleteRequested(project_id)))
            }
            ViewEvent::CancelDelete => {
                self.state
                    .pending_delete
                    .take()
                    .ok_or(ViewError::NoPendingDelete)?;
                Ok(None)
            }
            ViewEvent::Close => {
                if !self.state.detail_open {
                    return Err(ViewError::DetailClosed);
                }
                self.close_detail();
                Ok(None)
            }
        }
    }

    /// Drops every reference to a project that no longer exists.
    pub fn forget_project(&mut self, project_id: &str) {
        if self.state.detail_project.as_deref() == Some(project_id) {
            self.close_detail();
        }
        if self.state.pending_delete.as_deref() == Some(project_id) {
            self.state.pending_delete = None;
        }
    }

    fn apply_action(
        &mut self,
        project: &Project,
        action: ProjectAction,
    ) -> Result<Option<ViewEffect>, ViewError> {
        match action {
            ProjectAction::Open => {
                let view = DetailView::CONTENT_TABS
                    .into_iter()
                    .find(|view| view.action().is_some_and(|tab| project.has_action(tab)))
                    .ok_or_else(|| ViewError::NothingToOpen {
                        project_id: project.id.clone(),
                    })?;
                self.open_detail(project, view);
                Ok(None)
            }
            ProjectAction::Details => {
                self.open_detail(project, DetailView::Overview);
                Ok(None)
            }
            ProjectAction::Todo | ProjectAction::Notes | ProjectAction::Files => {
                if !project.has_action(action) {
                    return Err(ViewError::ActionUnavailable {
                        project_id: project.id.clone(),
                        action,
                    });
                }
                if let Some(view) = DetailView::for_action(action) {
                    self.open_detail(project, view);
                }
                Ok(None)
            }
            ProjectAction::Edit => Ok(Some(ViewEffect::EditRequested(project.id.clone()))),
            ProjectAction::Delete => {
                self.state.pending_delete = Some(project.id.clone());
                Ok(None)
            }
        }
    }

    fn open_detail(&mut self, project: &Project, view: DetailView) {
        self.state.detail_open = true;
        self.state.active_view = Some(view);
        self.state.detail_project = Some(project.id.clone());
    }

    fn close_detail(&mut self) {
        self.state.detail_open = false;
        self.state.active_view = None;
        self.state.detail_project = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{DetailView, ViewCoordinator, ViewError, ViewEvent, ViewState};
    use crate::model::project::{Project, ProjectAction, ProjectDraft};

    fn project(actions: Vec<ProjectAction>) -> Project {
        let draft = ProjectDraft {
            title: "P".to_string(),
            actions,
            ..ProjectDraft::default()
        };
        Project::from_draft("p1".to_string(), &draft)
    }

    #[test]
    fn open_prefers_todo_then_notes_then_files() {
        let mut coordinator = ViewCoordinator::new();
        let files_and_notes = project(vec![ProjectAction::Files, ProjectAction::Notes]);
        coordinator
            .handle(ViewEvent::Action {
                project: &files_and_notes,
                action: ProjectAction::Open,
            })
            .unwrap();
        assert_eq!(coordinator.state().active_view, Some(DetailView::Notes));
    }

    #[test]
    fn rejected_event_keeps_state() {
        let mut coordinator = ViewCoordinator::new();
        let plain = project(vec![ProjectAction::Open]);
        let err = coordinator
            .handle(ViewEvent::Action {
                project: &plain,
                action: ProjectAction::Open,
            })
            .unwrap_err();
        assert!(matches!(err, ViewError::NothingToOpen { .. }));
        assert_eq!(coordinator.state(), &ViewState::default());
    }

    #[test]
    fn forget_project_closes_its_detail_view() {
        let mut coordinator = ViewCoordinator::new();
        let shown = project(vec![ProjectAction::Details]);
        coordinator
            .handle(ViewEvent::Action {
                project: &shown,
                action: ProjectAction::Details,
            })
            .unwrap();
        coordinator
            .handle(ViewEvent::Action {
                project: &shown,
                action: ProjectAction::Delete,
            })
            .unwrap();
        coordinator.forget_project("p1");
        assert!(!coordinator.state().detail_open);
        assert!(!coordinator.state().delete_confirm_pending());
    }
}
