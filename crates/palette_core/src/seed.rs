//! Sample session data.
//!
//! # Responsibility
//! - Reproduce the dashboard's sample projects and per-project sample
//!   contents verbatim, for demos and test fixtures.
//!
//! # Invariants
//! - Seed projects use the canonical action shape (`EDIT, DELETE` last).
//! - Every call returns fresh values; callers own their copies.

use crate::model::file::FileEntry;
use crate::model::note::Note;
use crate::model::project::{IconType, Progress, ProgressColor, Project, ProjectAction};
use crate::model::todo::Todo;
use chrono::NaiveDate;

/// The six sample projects in display order.
pub fn seed_projects() -> Vec<Project> {
    use IconType::*;
    use ProgressColor::*;
    use ProjectAction::{Delete, Details, Edit, Files, Notes, Open};

    vec![
        project(
            "1",
            "UNIVERSITY MANAGEMENT",
            "MATERIALS AND ASSIGNMENT",
            65,
            Coral,
            Desktop,
            &[Open, Details, Edit, Delete],
        ),
        project(
            "2",
            "LAB ACTIVITY",
            "RESEARCH AND MANAGEMENT",
            40,
            Yellow,
            Table,
            &[Open, Details, Edit, Delete],
        ),
        project(
            "3",
            "DEVELOPMENT ACTIVITY",
            "PROJECT MANAGEMENT AND LEARNING",
            80,
            Coral,
            Circle,
            &[Open, Details, Edit, Delete],
        ),
        project(
            "4",
            "TO DO LIST",
            "Material exploration",
            25,
            Yellow,
            Grid,
            &[ProjectAction::Todo, Edit, Delete],
        ),
        project(
            "5",
            "NOTES",
            "Natural and artificial lighting",
            50,
            Yellow,
            Timer,
            &[Notes, Edit, Delete],
        ),
        project(
            "6",
            "FILES",
            "Eco-friendly options",
            15,
            Coral,
            Leaf,
            &[Files, Edit, Delete],
        ),
    ]
}

/// The three sample todos; the first is already completed.
pub fn seed_todos() -> Vec<Todo> {
    let mut finalized = Todo::new(1, "Finalize color palette for living room");
    finalized.completed = true;
    vec![
        finalized,
        Todo::new(2, "Source sustainable materials for flooring"),
        Todo::new(3, "Create lighting plan for dining area"),
    ]
}

/// The two sample notes, without tags.
pub fn seed_notes() -> Vec<Note> {
    vec![
        Note::new(
            1,
            "Lighting Research",
            "Consider both natural and artificial lighting options for the space. Research energy-efficient solutions.",
            date(2025, 4, 10),
        ),
        Note::new(
            2,
            "Material Selection",
            "Focus on sustainable and eco-friendly materials that align with project goals.",
            date(2025, 4, 15),
        ),
    ]
}

/// The three sample file entries.
pub fn seed_files() -> Vec<FileEntry> {
    vec![
        file(1, "project_requirements.pdf", "PDF", "2.4 MB", date(2025, 4, 5)),
        file(2, "color_palette.png", "Image", "840 KB", date(2025, 4, 12)),
        file(3, "project_timeline.xlsx", "Spreadsheet", "1.2 MB", date(2025, 4, 18)),
    ]
}

fn project(
    id: &str,
    title: &str,
    description: &str,
    progress: i64,
    progress_color: ProgressColor,
    icon_type: IconType,
    actions: &[ProjectAction],
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        progress: Progress::new(progress),
        progress_color,
        icon_type,
        actions: actions.to_vec(),
    }
}

fn file(id: u64, name: &str, kind: &str, size: &str, date: NaiveDate) -> FileEntry {
    FileEntry {
        id,
        name: name.to_string(),
        kind: kind.to_string(),
        size: size.to_string(),
        date,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}
