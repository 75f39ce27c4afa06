//! Note model.
//!
//! # Responsibility
//! - Hold raw note content together with its derived display blocks.
//! - Own tag-set normalization.
//!
//! # Invariants
//! - `content` is the source of truth; `blocks` is recomputed on every
//!   content write and never serialized.
//! - `tags` is an insertion-ordered set without blank entries.

use crate::format::note_format::{format_note, Block};
use crate::model::validation::{require_text, require_text_if_set, ValidationError};
use chrono::NaiveDate;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

pub type NoteId = u64;

/// Rich-text note attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "NoteFields")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    content: String,
    /// Creation date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    tags: IndexSet<String>,
    #[serde(skip)]
    blocks: Vec<Block>,
}

// Deserialization shape; the derived blocks are rebuilt from `content`.
#[derive(Deserialize)]
struct NoteFields {
    id: NoteId,
    title: String,
    content: String,
    date: NaiveDate,
    #[serde(default)]
    tags: Vec<String>,
}

impl From<NoteFields> for Note {
    fn from(fields: NoteFields) -> Self {
        let mut note = Note::new(fields.id, fields.title, fields.content, fields.date);
        note.tags = normalize_tags(&fields.tags);
        note
    }
}

impl Note {
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        let content = content.into();
        let blocks = format_note(&content);
        Self {
            id,
            title: title.into(),
            content,
            date,
            tags: IndexSet::new(),
            blocks,
        }
    }

    /// Raw formatted text as typed by the user.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replaces content and recomputes the display blocks.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.blocks = format_note(&self.content);
    }

    /// Display blocks derived from the current content.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn tags(&self) -> &IndexSet<String> {
        &self.tags
    }

    /// Inserts a trimmed tag; blank input is ignored and reported as `false`.
    pub fn insert_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        !tag.is_empty() && self.tags.insert(tag.to_string())
    }

    /// Removes a tag, keeping the order of the remaining ones.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.tags.shift_remove(tag.trim())
    }
}

/// Create input for a note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    /// Defaults to the current local date when `None`.
    pub date: Option<NaiveDate>,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)?;
        require_text("content", &self.content)?;
        validate_tags(&self.tags)
    }

    /// Builds the note record. Callers run [`NoteDraft::validate`] first.
    pub fn into_note(self, id: NoteId, today: NaiveDate) -> Note {
        let mut note = Note::new(id, self.title, self.content, self.date.unwrap_or(today));
        note.tags = normalize_tags(&self.tags);
        note
    }
}

/// Partial update for a note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl NotePatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text_if_set("title", self.title.as_deref())?;
        require_text_if_set("content", self.content.as_deref())?;
        match &self.tags {
            Some(tags) => validate_tags(tags),
            None => Ok(()),
        }
    }

    pub fn apply_to(&self, note: &mut Note) {
        if let Some(title) = &self.title {
            note.title = title.clone();
        }
        if let Some(content) = &self.content {
            note.set_content(content.clone());
        }
        if let Some(tags) = &self.tags {
            note.tags = normalize_tags(tags);
        }
    }
}

/// Rejects blank tags.
pub fn validate_tag(tag: &str) -> Result<(), ValidationError> {
    if tag.trim().is_empty() {
        return Err(ValidationError::InvalidTag(tag.to_string()));
    }
    Ok(())
}

fn validate_tags(tags: &[String]) -> Result<(), ValidationError> {
    tags.iter().try_for_each(|tag| validate_tag(tag))
}

/// Trims tags, drops blanks and duplicates, keeps first-seen order.
pub fn normalize_tags(tags: &[String]) -> IndexSet<String> {
    tags.iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{normalize_tags, validate_tag, Note, NoteDraft, NotePatch};
    use crate::format::note_format::Block;
    use crate::model::validation::ValidationError;
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 10).unwrap()
    }

    #[test]
    fn set_content_recomputes_blocks() {
        let mut note = Note::new(1, "t", "# Old", day());
        note.set_content("- new item");
        assert_eq!(
            note.blocks(),
            &[Block::ListItem {
                text: "new item".to_string()
            }]
        );
    }

    #[test]
    fn normalize_tags_dedupes_and_keeps_order() {
        let tags = normalize_tags(&[
            " work ".to_string(),
            "home".to_string(),
            "work".to_string(),
            "  ".to_string(),
        ]);
        assert_eq!(tags.into_iter().collect::<Vec<_>>(), vec!["work", "home"]);
    }

    #[test]
    fn insert_tag_trims_and_reports_duplicates() {
        let mut note = Note::new(1, "t", "c", day());
        assert!(note.insert_tag("design"));
        assert!(!note.insert_tag(" design "));
        assert!(!note.insert_tag(" "));
        assert_eq!(
            validate_tag(" ").unwrap_err(),
            ValidationError::InvalidTag(" ".to_string())
        );
        assert!(note.remove_tag("design"));
        assert!(note.tags().is_empty());
    }

    #[test]
    fn draft_requires_title_and_content() {
        assert!(NoteDraft::new("", "body").validate().is_err());
        assert!(NoteDraft::new("title", "  ").validate().is_err());
        assert!(NoteDraft::new("title", "body").validate().is_ok());
    }

    #[test]
    fn patch_content_keeps_blocks_in_sync() {
        let mut note = Note::new(1, "t", "plain", day());
        let patch = NotePatch {
            content: Some("[x] shipped".to_string()),
            ..NotePatch::default()
        };
        patch.apply_to(&mut note);
        assert_eq!(note.content(), "[x] shipped");
        assert_eq!(
            note.blocks(),
            &[Block::CheckItem {
                text: "shipped".to_string(),
                checked: true
            }]
        );
    }

    #[test]
    fn deserialization_rebuilds_blocks_and_dedupes_tags() {
        let json = serde_json::json!({
            "id": 7,
            "title": "Restored",
            "content": "# Heading",
            "date": "2025-04-15",
            "tags": ["a", "a", "b"]
        });
        let note: Note = serde_json::from_value(json).unwrap();
        assert_eq!(note.blocks().len(), 1);
        assert_eq!(note.tags().len(), 2);
        let back = serde_json::to_value(&note).unwrap();
        assert!(back.get("blocks").is_none());
        assert_eq!(back["date"], "2025-04-15");
    }
}
