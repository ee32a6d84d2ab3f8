//! End-to-end registry lifecycle through the public API.

use std::cell::RefCell;
use std::rc::Rc;

use keybinder::{
    BindingKeys, DispatchOutcome, InputEvent, Modifiers, ShortcutRegistry,
};

#[test]
fn full_lifecycle_against_public_api() {
    let mut registry = ShortcutRegistry::detached();
    let fired: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

    let log = Rc::clone(&fired);
    registry
        .bind(
            "ctrl+s",
            move |_event| log.borrow_mut().push("save".to_string()),
            "Save",
            true,
        )
        .unwrap();

    let log = Rc::clone(&fired);
    registry
        .bind(
            "ctrl+c|v",
            move |_event| log.borrow_mut().push("clipboard".to_string()),
            "Clipboard",
            true,
        )
        .unwrap();

    let log = Rc::clone(&fired);
    registry
        .bind(
            "ctrl+click",
            move |event| {
                assert!(matches!(event, InputEvent::Pointer { .. }));
                log.borrow_mut().push("open".to_string())
            },
            "Open",
            true,
        )
        .unwrap();

    let ctrl = Modifiers::ctrl();
    registry.dispatch(&InputEvent::key("s", ctrl));
    registry.dispatch(&InputEvent::key("c", ctrl));
    registry.dispatch(&InputEvent::key("v", ctrl));
    registry.dispatch(&InputEvent::click(ctrl));
    registry.dispatch(&InputEvent::key("s", Modifiers::new()));

    assert_eq!(
        fired.borrow().as_slice(),
        ["save", "clipboard", "clipboard", "open"]
    );

    registry.disable("ctrl+s").unwrap();
    assert_eq!(
        registry.dispatch(&InputEvent::key("s", ctrl)),
        DispatchOutcome::Unmatched
    );
    registry.enable("ctrl+s").unwrap();
    assert_eq!(
        registry.dispatch(&InputEvent::key("s", ctrl)),
        DispatchOutcome::Matched
    );

    registry.destroy();
    assert_eq!(
        registry.dispatch(&InputEvent::key("s", ctrl)),
        DispatchOutcome::Ignored
    );
}

#[test]
fn docs_serialize_to_json() {
    let mut registry = ShortcutRegistry::detached();
    registry
        .bind("ctrl+s", |_event| {}, "Save", true)
        .unwrap();

    let raw = serde_json::to_value(registry.docs(false)).unwrap();
    assert_eq!(raw[0]["keys"], serde_json::json!(["ctrl", "s"]));
    assert_eq!(raw[0]["description"], "Save");

    let readable = serde_json::to_value(registry.docs(true)).unwrap();
    assert_eq!(readable[0]["keys"], "ctrl + s");
}

#[test]
fn readable_keys_display_matches_join() {
    let mut registry = ShortcutRegistry::detached();
    registry
        .bind("ctrl+shift+s", |_event| {}, "Save As", true)
        .unwrap();

    let docs = registry.docs(true);
    assert_eq!(docs[0].keys, BindingKeys::Readable("ctrl + shift + s".to_string()));
    assert_eq!(docs[0].keys.to_string(), "ctrl + shift + s");

    let raw = registry.docs(false);
    assert_eq!(raw[0].keys.to_string(), "ctrl+shift+s");
}
