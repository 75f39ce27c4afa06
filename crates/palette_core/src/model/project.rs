//! Project domain model.
//!
//! # Responsibility
//! - Define the project card record and its closed set of card actions.
//! - Provide the create draft (also used as the editor form) and the
//!   partial-update patch.
//! - Own action-list canonicalization (`EDIT, DELETE` appended last).
//!
//! # Invariants
//! - `Progress` can only hold values in `0..=100`.
//! - Every write path goes through [`canonical_actions`]; legacy action
//!   lists without `EDIT`/`DELETE` are still accepted on read.

use crate::model::validation::{require_text, require_text_if_set, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Stable project identifier (timestamp-derived token for created projects).
pub type ProjectId = String;

/// Capability exposed as a button on a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectAction {
    /// Opens the detail view on the first content tab the project exposes.
    Open,
    /// Opens the detail view on the overview tab.
    Details,
    Todo,
    Notes,
    Files,
    /// Managed action: always present, never user-editable.
    Edit,
    /// Managed action: always present, never user-editable.
    Delete,
}

impl ProjectAction {
    pub const ALL: [ProjectAction; 7] = [
        Self::Open,
        Self::Details,
        Self::Todo,
        Self::Notes,
        Self::Files,
        Self::Edit,
        Self::Delete,
    ];

    /// Wire token shown on the card button.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Details => "DETAILS",
            Self::Todo => "TODO",
            Self::Notes => "NOTES",
            Self::Files => "FILES",
            Self::Edit => "EDIT",
            Self::Delete => "DELETE",
        }
    }

    /// Returns whether the action is appended by the store rather than chosen.
    pub fn is_managed(self) -> bool {
        matches!(self, Self::Edit | Self::Delete)
    }
}

impl Display for ProjectAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectAction {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let token = value.trim();
        Self::ALL
            .into_iter()
            .find(|action| action.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| ValidationError::UnknownAction(token.to_string()))
    }
}

/// Progress bar fill color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressColor {
    #[default]
    Coral,
    Yellow,
}

/// Icon drawn on the project card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconType {
    #[default]
    Desktop,
    Table,
    Circle,
    Grid,
    Timer,
    Leaf,
}

/// Completion percentage clamped to `0..=100`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "i64", into = "u8")]
pub struct Progress(u8);

impl Progress {
    pub const MAX: u8 = 100;

    /// Clamps any integer into the valid range.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, i64::from(Self::MAX)) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Parses form input the lenient way: leading integer, else zero.
    ///
    /// `" 45%"` yields 45, `"abc"` yields 0, `"250"` clamps to 100.
    pub fn parse_lenient(text: &str) -> Self {
        let trimmed = text.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let digits = rest.bytes().take_while(|byte| byte.is_ascii_digit()).count();
        if digits == 0 {
            return Self::default();
        }
        let magnitude = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
        Self::new(if negative { -magnitude } else { magnitude })
    }
}

impl From<i64> for Progress {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Progress> for u8 {
    fn from(value: Progress) -> Self {
        value.0
    }
}

impl Display for Progress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Project card record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub progress: Progress,
    pub progress_color: ProgressColor,
    pub icon_type: IconType,
    /// Card buttons in display order.
    pub actions: Vec<ProjectAction>,
}

impl Project {
    /// Builds a project from a draft, canonicalizing its action list.
    ///
    /// Does not validate; callers run [`ProjectDraft::validate`] first.
    pub fn from_draft(id: ProjectId, draft: &ProjectDraft) -> Self {
        Self {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            progress: draft.progress,
            progress_color: draft.progress_color,
            icon_type: draft.icon_type,
            actions: canonical_actions(&draft.actions),
        }
    }

    pub fn has_action(&self, action: ProjectAction) -> bool {
        self.actions.contains(&action)
    }

    /// Actions the editor form may change (`EDIT`/`DELETE` removed).
    pub fn editable_actions(&self) -> Vec<ProjectAction> {
        editable_actions(&self.actions)
    }
}

/// Create input for a project; doubles as the editor form state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub progress: Progress,
    pub progress_color: ProgressColor,
    pub icon_type: IconType,
    /// User-chosen actions; managed actions are dropped on write.
    pub actions: Vec<ProjectAction>,
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            progress: Progress::default(),
            progress_color: ProgressColor::default(),
            icon_type: IconType::default(),
            actions: vec![ProjectAction::Open, ProjectAction::Details],
        }
    }
}

impl ProjectDraft {
    /// Pre-fills a draft from an existing project for editing.
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            progress: project.progress,
            progress_color: project.progress_color,
            icon_type: project.icon_type,
            actions: project.editable_actions(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)
    }

    /// Sets progress from raw form text.
    pub fn set_progress_text(&mut self, text: &str) {
        self.progress = Progress::parse_lenient(text);
    }

    /// Replaces actions from comma-separated form text.
    ///
    /// Leaves the draft untouched when any token is unknown.
    pub fn set_actions_text(&mut self, text: &str) -> Result<(), ValidationError> {
        self.actions = parse_actions(text)?;
        Ok(())
    }

    /// Comma-separated rendering of the chosen actions.
    pub fn actions_text(&self) -> String {
        self.actions
            .iter()
            .map(|action| action.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Full-field patch used when the editor saves over an existing project.
    pub fn to_patch(&self) -> ProjectPatch {
        ProjectPatch {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            progress: Some(self.progress),
            progress_color: Some(self.progress_color),
            icon_type: Some(self.icon_type),
            actions: Some(self.actions.clone()),
        }
    }
}

/// Partial update for a project; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub progress: Option<Progress>,
    pub progress_color: Option<ProgressColor>,
    pub icon_type: Option<IconType>,
    pub actions: Option<Vec<ProjectAction>>,
}

impl ProjectPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text_if_set("title", self.title.as_deref())
    }

    /// Applies supplied fields and re-canonicalizes the action list.
    pub fn apply_to(&self, project: &mut Project) {
        if let Some(title) = &self.title {
            project.title = title.clone();
        }
        if let Some(description) = &self.description {
            project.description = description.clone();
        }
        if let Some(progress) = self.progress {
            project.progress = progress;
        }
        if let Some(color) = self.progress_color {
            project.progress_color = color;
        }
        if let Some(icon) = self.icon_type {
            project.icon_type = icon;
        }
        let chosen = self.actions.as_deref().unwrap_or(project.actions.as_slice());
        project.actions = canonical_actions(chosen);
    }
}

/// Returns `chosen` without managed actions or duplicates, then `EDIT, DELETE`.
pub fn canonical_actions(chosen: &[ProjectAction]) -> Vec<ProjectAction> {
    let mut actions = editable_actions(chosen);
    actions.push(ProjectAction::Edit);
    actions.push(ProjectAction::Delete);
    actions
}

/// Drops managed actions and duplicates, keeping first occurrences in order.
pub fn editable_actions(actions: &[ProjectAction]) -> Vec<ProjectAction> {
    let mut editable = Vec::with_capacity(actions.len());
    for action in actions {
        if !action.is_managed() && !editable.contains(action) {
            editable.push(*action);
        }
    }
    editable
}

/// Parses comma-separated action tokens; empty segments are ignored.
pub fn parse_actions(text: &str) -> Result<Vec<ProjectAction>, ValidationError> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ProjectAction::from_str)
        .collect()
}
