//! Todo item model.

use crate::model::validation::{require_text, require_text_if_set, ValidationError};
use serde::{Deserialize, Serialize};

pub type TodoId = u64;

/// One entry of a project's to-do list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

impl Todo {
    /// Creates an open (not completed) todo.
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Flips completion and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}

/// Validates text for a new todo.
pub fn validate_todo_text(text: &str) -> Result<(), ValidationError> {
    require_text("text", text)
}

/// Partial update for a todo; text is stored trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text_if_set("text", self.text.as_deref())
    }

    pub fn apply_to(&self, todo: &mut Todo) {
        if let Some(text) = &self.text {
            todo.text = text.trim().to_string();
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Todo, TodoPatch};

    #[test]
    fn patch_text_is_trimmed_like_new_todos() {
        let mut todo = Todo::new(1, "draft");
        let patch = TodoPatch {
            text: Some("  Order tiles \n".to_string()),
            completed: Some(true),
        };
        assert!(patch.validate().is_ok());
        patch.apply_to(&mut todo);
        assert_eq!(todo.text, "Order tiles");
        assert!(todo.completed);
    }

    #[test]
    fn blank_patch_text_is_rejected() {
        let patch = TodoPatch {
            text: Some("   ".to_string()),
            ..TodoPatch::default()
        };
        assert!(patch.validate().is_err());
    }
}
