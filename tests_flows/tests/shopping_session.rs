//! End-to-end checklist sessions driven the way a host UI would

use tests_flows::{assert_partitioned, deliver_focus, engine_from_text, layout};

#[test]
fn test_full_shopping_session() {
    let mut engine = engine_from_text("[ ] milk\n[ ] eggs\n[x] bread");
    assert_eq!(layout(&engine), vec!["milk", "eggs", "<marker>", "[x] bread"]);

    // Tap the new-item affordance and type a new entry.
    engine.on_create_new_item_clicked(2);
    assert_eq!(
        layout(&engine),
        vec!["milk", "eggs", "", "<marker>", "[x] bread"]
    );
    deliver_focus(&mut engine);
    let request = engine.platform().last_focus_request().unwrap();
    assert_eq!(request.position, 2);
    assert!(request.show_keyboard);

    engine.on_text_changed(2, "butter");
    assert_eq!(
        layout(&engine),
        vec!["milk", "eggs", "butter", "<marker>", "[x] bread"]
    );

    // Check the first item off; it joins the top of the checked region.
    engine.on_checked(0);
    assert_eq!(
        layout(&engine),
        vec!["eggs", "butter", "<marker>", "[x] milk", "[x] bread"]
    );
    assert_partitioned(&engine);

    assert_eq!(
        engine.get_formatted_text(true, true),
        "[ ] eggs\n[ ] butter\n[x] milk\n[x] bread"
    );

    // Unchecking returns the item to where it was checked from.
    engine.on_unchecked(3);
    assert_eq!(
        layout(&engine),
        vec!["milk", "eggs", "butter", "<marker>", "[x] bread"]
    );
    assert_partitioned(&engine);
}

#[test]
fn test_enter_split_then_edit() {
    let mut engine = engine_from_text("[ ] pasta sauce");
    engine.on_enter_key_pressed(0, "pasta sauce", 5, 5);
    assert_eq!(layout(&engine), vec!["pasta", " sauce", "<marker>"]);

    deliver_focus(&mut engine);
    let request = engine.platform().last_focus_request().unwrap();
    assert_eq!(request.position, 1);
    assert_eq!(request.selection_offset, 0);
    assert!(request.show_keyboard);

    engine.on_text_changed(1, "sauce");
    assert_eq!(layout(&engine), vec!["pasta", "sauce", "<marker>"]);
}

#[test]
fn test_export_flag_combinations() {
    let mut engine = engine_from_text("[ ] a\n[x] b");
    assert_eq!(engine.get_formatted_text(true, true), "[ ] a\n[x] b");
    assert_eq!(engine.get_formatted_text(false, true), "a\nb");
    assert_eq!(engine.get_formatted_text(true, false), "[ ] a");
    assert_eq!(engine.get_formatted_text(false, false), "a");
}

#[test]
fn test_reload_mid_session_resets_everything() {
    let mut engine = engine_from_text("[ ] old1\n[x] old2");
    engine.on_checked(0);

    engine.set_items("[ ] fresh");
    assert_eq!(layout(&engine), vec!["fresh", "<marker>"]);
    assert!(!engine.has_pending_focus());
}
