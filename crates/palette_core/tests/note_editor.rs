use palette_core::{Dashboard, NoteEditorMode};
use pretty_assertions::assert_eq;

#[test]
fn new_note_form_adds_note_with_staged_tags() {
    let mut dashboard = Dashboard::seeded().unwrap();
    dashboard.open_note_editor("5", None).unwrap();
    assert_eq!(
        dashboard.note_editor().mode(),
        &NoteEditorMode::Creating {
            project_id: "5".to_string()
        }
    );

    let editor = dashboard.note_editor_mut();
    editor.form_mut().title = "Fixtures".to_string();
    editor.form_mut().content = "# Lamps\n[ ] order pendants".to_string();
    editor.set_pending_tag("lighting");
    assert!(editor.commit_pending_tag());

    let note_id = dashboard.submit_note_editor().unwrap().unwrap();
    assert!(!dashboard.note_editor().is_open());

    let note = dashboard.get_note("5", note_id).unwrap();
    assert_eq!(note.title, "Fixtures");
    assert_eq!(note.tags().iter().collect::<Vec<_>>(), vec!["lighting"]);
    assert_eq!(note.blocks().len(), 2);
}

#[test]
fn edit_note_form_prefills_and_updates_in_place() {
    let mut dashboard = Dashboard::seeded().unwrap();
    dashboard.add_note_tag("5", 2, "materials").unwrap();
    dashboard.open_note_editor("5", Some(2)).unwrap();
    assert_eq!(dashboard.note_editor().form().title, "Material Selection");
    assert_eq!(
        dashboard.note_editor().form().tags,
        vec!["materials".to_string()]
    );

    let editor = dashboard.note_editor_mut();
    assert!(editor.remove_form_tag("materials"));
    editor.form_mut().content = "- bamboo\n- cork".to_string();
    assert_eq!(dashboard.submit_note_editor().unwrap(), None);

    let note = dashboard.get_note("5", 2).unwrap();
    assert_eq!(note.date.to_string(), "2025-04-15");
    assert!(note.tags().is_empty());
    assert_eq!(note.blocks().len(), 2);
    assert_eq!(dashboard.list_notes("5").unwrap().len(), 2);
}

#[test]
fn invalid_note_form_keeps_editor_open() {
    let mut dashboard = Dashboard::seeded().unwrap();
    dashboard.open_note_editor("5", None).unwrap();
    dashboard.note_editor_mut().form_mut().title = "No body".to_string();
    assert!(dashboard.submit_note_editor().is_err());
    assert!(dashboard.note_editor().is_open());
    assert_eq!(dashboard.list_notes("5").unwrap().len(), 2);
}

#[test]
fn opening_on_missing_records_is_not_found() {
    let mut dashboard = Dashboard::seeded().unwrap();
    assert!(dashboard
        .open_note_editor("missing", None)
        .unwrap_err()
        .is_not_found());
    assert!(dashboard
        .open_note_editor("5", Some(42))
        .unwrap_err()
        .is_not_found());
    assert!(!dashboard.note_editor().is_open());
}

#[test]
fn deleting_the_edited_note_or_its_project_closes_the_editor() {
    let mut dashboard = Dashboard::seeded().unwrap();
    dashboard.open_note_editor("5", Some(1)).unwrap();
    dashboard.delete_note("5", 2).unwrap();
    assert!(dashboard.note_editor().is_open());
    dashboard.delete_note("5", 1).unwrap();
    assert_eq!(dashboard.note_editor().mode(), &NoteEditorMode::Closed);

    dashboard.open_note_editor("4", None).unwrap();
    dashboard.delete_project("4").unwrap();
    assert!(!dashboard.note_editor().is_open());
}
