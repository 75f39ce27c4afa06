//! File entry model (metadata only, no bytes).

use crate::model::validation::{require_text, require_text_if_set, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type FileId = u64;

/// File listed in a project's file tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub id: FileId,
    pub name: String,
    /// Display type label such as `PDF` or `Image`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-form size label, e.g. `2.4 MB`.
    pub size: String,
    pub date: NaiveDate,
}

/// Create input for a file entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileDraft {
    pub name: String,
    /// Inferred from the name's extension when `None`.
    pub kind: Option<String>,
    pub size: String,
    /// Defaults to the current local date when `None`.
    pub date: Option<NaiveDate>,
}

impl FileDraft {
    pub fn new(name: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: size.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)
    }

    /// Builds the entry. Callers run [`FileDraft::validate`] first.
    pub fn into_entry(self, id: FileId, today: NaiveDate) -> FileEntry {
        let kind = match self.kind {
            Some(kind) if !kind.trim().is_empty() => kind,
            _ => infer_file_kind(&self.name).to_string(),
        };
        FileEntry {
            id,
            name: self.name,
            kind,
            size: self.size,
            date: self.date.unwrap_or(today),
        }
    }
}

/// Partial update for a file entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilePatch {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub size: Option<String>,
}

impl FilePatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text_if_set("name", self.name.as_deref())
    }

    pub fn apply_to(&self, entry: &mut FileEntry) {
        if let Some(name) = &self.name {
            entry.name = name.clone();
        }
        if let Some(kind) = &self.kind {
            entry.kind = kind.clone();
        }
        if let Some(size) = &self.size {
            entry.size = size.clone();
        }
    }
}

/// Maps a file name's extension to a display type label.
pub fn infer_file_kind(name: &str) -> &'static str {
    let extension = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext.to_ascii_lowercase(),
        _ => return "File",
    };
    match extension.as_str() {
        "pdf" => "PDF",
        "png" | "jpg" | "jpeg" | "gif" | "svg" | "webp" => "Image",
        "xlsx" | "xls" | "csv" => "Spreadsheet",
        "doc" | "docx" | "txt" | "md" => "Document",
        _ => "File",
    }
}
