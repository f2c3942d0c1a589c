//! End-to-end controller behaviour against the in-memory picker and surface.

use recon_upload_core::mock::{MockPicker, RecordingSurface};
use recon_upload_core::{
    Affordance, DropOutcome, FilePicker, FileSelection, FileSlot, SelectionPreviewController,
};

type Controller = SelectionPreviewController<MockPicker, RecordingSurface>;

fn controller() -> Controller {
    SelectionPreviewController::new(MockPicker::default(), RecordingSurface::default())
}

fn fixture(json: &str) -> FileSelection {
    serde_json::from_str(json).expect("valid fixture")
}

#[test]
fn render_produces_one_row_per_file() {
    let c = controller();
    let files = fixture(
        r#"[
            {"name": "statement.csv", "size": 1024},
            {"name": "ledger.xlsx", "size": 5120},
            {"name": "notes.txt", "size": 0}
        ]"#,
    );

    c.render_list(&files);

    assert_eq!(
        c.surface().texts(),
        [
            "statement.csv — 1.0 KB",
            "ledger.xlsx — 5.0 KB",
            "notes.txt — 0.0 KB"
        ]
    );
}

#[test]
fn render_empty_selection_clears_rows() {
    let c = controller();
    c.render_list(&fixture(r#"[{"name": "a.txt", "size": 10}]"#));
    c.render_list(&FileSelection::empty());
    assert!(c.surface().rows().is_empty());
}

#[test]
fn render_twice_matches_render_once() {
    let c = controller();
    let files = fixture(r#"[{"name": "a.txt", "size": 2048}, {"name": "b.png", "size": 512}]"#);

    c.render_list(&files);
    let once = c.surface().rows();
    c.render_list(&files);

    assert_eq!(c.surface().rows(), once);
    assert_eq!(c.surface().renders(), 2);
}

#[test]
fn empty_drop_leaves_rows_and_picker_unchanged() {
    let c = controller();
    let files = fixture(r#"[{"name": "a.txt", "size": 2048}]"#);
    assert_eq!(c.on_drop(Some(&files)), DropOutcome::Accepted(1));
    let rows = c.surface().rows();

    assert_eq!(c.on_drop(Some(&FileSelection::empty())), DropOutcome::Ignored);
    assert_eq!(c.on_drop(None), DropOutcome::Ignored);

    assert_eq!(c.surface().rows(), rows);
    assert_eq!(c.picker().held(), files);
    assert_eq!(c.surface().renders(), 1);
}

#[test]
fn drop_two_files_renders_in_order() {
    let c = controller();
    let files = fixture(r#"[{"name": "a.txt", "size": 2048}, {"name": "b.png", "size": 512}]"#);

    c.on_drag_over();
    let outcome = c.on_drop(Some(&files));

    assert_eq!(outcome, DropOutcome::Accepted(2));
    assert_eq!(c.surface().texts(), ["a.txt — 2.0 KB", "b.png — 0.5 KB"]);
    assert_eq!(c.picker().held(), files);
    assert_eq!(c.surface().affordance(), Affordance::Resting);

    let slots: Vec<_> = c.surface().rows().iter().map(|r| r.slot).collect();
    assert_eq!(slots, [FileSlot::A, FileSlot::B]);
}

#[test]
fn drag_over_then_leave_restores_resting() {
    let c = controller();
    assert_eq!(c.surface().affordance(), Affordance::Resting);
    c.on_drag_over();
    assert_eq!(c.surface().affordance(), Affordance::Active);
    c.on_drag_leave();
    assert_eq!(c.surface().affordance(), Affordance::Resting);
}

#[test]
fn click_then_pick_one_file() {
    let c = controller();

    c.activate_click_relay();
    c.picker()
        .choose(fixture(r#"[{"name": "bank.csv", "size": 3072}]"#));
    c.on_picker_change(&c.picker().held());

    assert_eq!(c.picker().dialog_opens(), 1);
    assert_eq!(c.surface().texts(), ["bank.csv — 3.0 KB"]);
}

#[test]
fn picker_change_replaces_previous_drop() {
    let c = controller();
    c.on_drop(Some(&fixture(
        r#"[{"name": "a.txt", "size": 1}, {"name": "b.txt", "size": 2}]"#,
    )));

    c.picker().choose(fixture(r#"[{"name": "c.txt", "size": 1024}]"#));
    c.on_picker_change(&c.picker().held());

    assert_eq!(c.surface().texts(), ["c.txt — 1.0 KB"]);
}
