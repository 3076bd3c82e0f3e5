//! Startup against real files: defaults document plus on-disk storage.
//!
//! ## Invariants
//! - Startup never fails on bad defaults or bad stored data
//! - A rebind made in one session is active in the next

use std::fs;

use hotkey_config::FileDefaults;
use hotkey_tui::hotkeys::InputContext;
use hotkey_tui::runtime::startup::{build_dispatcher, open_storage};
use tempfile::TempDir;

fn write_defaults(dir: &TempDir, body: &str) -> FileDefaults {
    let path = dir.path().join("default.json");
    fs::write(&path, body).unwrap();
    FileDefaults::new(path)
}

#[test]
fn test_rebind_survives_restart() {
    let dir = TempDir::new().unwrap();
    let storage_dir = dir.path().join("storage");
    let defaults = write_defaults(&dir, r#"{"jump":"space","crouch":"c"}"#);

    let mut first = build_dispatcher(&defaults, open_storage(false, Some(&storage_dir)).unwrap());
    assert!(first.warnings.is_empty());
    first.dispatcher.request_rebind("crouch");
    first.dispatcher.on_key_down("s", InputContext::Navigation);

    let second = build_dispatcher(&defaults, open_storage(false, Some(&storage_dir)).unwrap());
    assert!(second.warnings.is_empty());
    assert_eq!(second.dispatcher.store().get("crouch"), Some("s"));
    assert_eq!(second.dispatcher.store().get("jump"), Some("space"));
}

#[test]
fn test_new_default_action_appears_after_upgrade() {
    let dir = TempDir::new().unwrap();
    let storage_dir = dir.path().join("storage");

    let v1 = write_defaults(&dir, r#"{"jump":"space"}"#);
    let mut first = build_dispatcher(&v1, open_storage(false, Some(&storage_dir)).unwrap());
    first.dispatcher.request_rebind("jump");
    first.dispatcher.on_key_down("w", InputContext::Navigation);

    let v2 = write_defaults(&dir, r#"{"jump":"space","crouch":"c"}"#);
    let second = build_dispatcher(&v2, open_storage(false, Some(&storage_dir)).unwrap());

    assert_eq!(second.dispatcher.store().get("jump"), Some("w"));
    assert_eq!(second.dispatcher.store().get("crouch"), Some("c"));
}

#[test]
fn test_space_character_default_fires_on_space_bar() {
    let dir = TempDir::new().unwrap();
    let defaults = write_defaults(&dir, r#"{"jump":" ","crouch":"c"}"#);

    let mut startup = build_dispatcher(&defaults, open_storage(true, None).unwrap());
    assert!(startup.warnings.is_empty());
    assert_eq!(startup.dispatcher.store().get("jump"), Some("space"));

    let down = startup.dispatcher.on_key_down("space", InputContext::Navigation);
    assert!(down.suppress_default);
    let triggered: Vec<_> = startup
        .dispatcher
        .triggered_actions()
        .into_iter()
        .map(|b| b.action)
        .collect();
    assert_eq!(triggered, vec!["jump"]);
}

#[test]
fn test_missing_defaults_file_warns() {
    let dir = TempDir::new().unwrap();
    let defaults = FileDefaults::new(dir.path().join("nope.json"));

    let startup = build_dispatcher(&defaults, open_storage(true, None).unwrap());

    assert_eq!(startup.warnings.len(), 1);
    assert!(startup.dispatcher.store().bindings().is_empty());
}

#[test]
fn test_corrupt_storage_is_backed_up_and_reset() {
    let dir = TempDir::new().unwrap();
    let storage_dir = dir.path().join("storage");
    fs::create_dir_all(&storage_dir).unwrap();
    fs::write(storage_dir.join("hotkeys.json"), "not json").unwrap();
    let defaults = write_defaults(&dir, r#"{"jump":"space"}"#);

    let startup = build_dispatcher(&defaults, open_storage(false, Some(&storage_dir)).unwrap());

    assert_eq!(startup.warnings.len(), 1);
    assert_eq!(startup.dispatcher.store().get("jump"), Some("space"));

    let backups = fs::read_dir(&storage_dir)
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().contains("corrupt"))
        .count();
    assert_eq!(backups, 1);
}
