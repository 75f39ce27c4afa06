use palette_core::seed::{seed_files, seed_notes, seed_projects, seed_todos};
use palette_core::{Dashboard, IconType, ProgressColor, ProjectAction, SessionConfig};
use pretty_assertions::assert_eq;

#[test]
fn seed_projects_match_fixture_table() {
    let rows = seed_projects()
        .into_iter()
        .map(|project| {
            (
                project.id,
                project.title,
                project.progress.value(),
                project.progress_color,
                project.icon_type,
            )
        })
        .collect::<Vec<_>>();
    assert_eq!(
        rows,
        vec![
            ("1".to_string(), "UNIVERSITY MANAGEMENT".to_string(), 65, ProgressColor::Coral, IconType::Desktop),
            ("2".to_string(), "LAB ACTIVITY".to_string(), 40, ProgressColor::Yellow, IconType::Table),
            ("3".to_string(), "DEVELOPMENT ACTIVITY".to_string(), 80, ProgressColor::Coral, IconType::Circle),
            ("4".to_string(), "TO DO LIST".to_string(), 25, ProgressColor::Yellow, IconType::Grid),
            ("5".to_string(), "NOTES".to_string(), 50, ProgressColor::Yellow, IconType::Timer),
            ("6".to_string(), "FILES".to_string(), 15, ProgressColor::Coral, IconType::Leaf),
        ]
    );
}

#[test]
fn every_seed_project_ends_with_edit_and_delete() {
    for project in seed_projects() {
        assert!(project
            .actions
            .ends_with(&[ProjectAction::Edit, ProjectAction::Delete]));
    }
}

#[test]
fn seed_contents_match_fixture_values() {
    let todos = seed_todos();
    assert_eq!(
        todos
            .iter()
            .map(|todo| (todo.id, todo.completed))
            .collect::<Vec<_>>(),
        vec![(1, true), (2, false), (3, false)]
    );
    assert_eq!(todos[2].text, "Create lighting plan for dining area");

    let notes = seed_notes();
    assert_eq!(notes[0].title, "Lighting Research");
    assert_eq!(notes[0].date.to_string(), "2025-04-10");
    assert_eq!(notes[1].date.to_string(), "2025-04-15");
    assert!(notes.iter().all(|note| note.tags().is_empty()));
    assert_eq!(notes[1].blocks().len(), 1);

    let files = seed_files();
    assert_eq!(
        files
            .iter()
            .map(|file| (file.name.as_str(), file.kind.as_str(), file.size.as_str()))
            .collect::<Vec<_>>(),
        vec![
            ("project_requirements.pdf", "PDF", "2.4 MB"),
            ("color_palette.png", "Image", "840 KB"),
            ("project_timeline.xlsx", "Spreadsheet", "1.2 MB"),
        ]
    );
}

#[test]
fn seeded_serialization_uses_wire_names() {
    let project = &seed_projects()[3];
    let json = serde_json::to_value(project).unwrap();
    assert_eq!(json["progressColor"], "yellow");
    assert_eq!(json["iconType"], "grid");
    assert_eq!(json["actions"], serde_json::json!(["TODO", "EDIT", "DELETE"]));

    let file = serde_json::to_value(&seed_files()[0]).unwrap();
    assert_eq!(file["type"], "PDF");
    assert_eq!(file["date"], "2025-04-05");

    let note = serde_json::to_value(&seed_notes()[0]).unwrap();
    assert!(note.get("blocks").is_none());
}

#[test]
fn config_controls_seeding() {
    let seeded = Dashboard::from_config(&SessionConfig::default()).unwrap();
    assert_eq!(seeded.list_projects().len(), 6);
    assert_eq!(seeded.list_files("6").unwrap().len(), 3);
}
