use console_panel::commands::{defaults, load, load_or_default, save, LoadError};
use console_panel::store::{CommandSource, CommandStore};

#[test]
fn defaults_round_trip_through_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("commands.json");
    save(&path, &defaults()).expect("save");
    assert_eq!(load(&path).expect("load"), defaults());
}

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config").join("commands.json");
    assert!(matches!(load(&path), Err(LoadError::NotFound)));

    let list = load_or_default(&path);
    assert_eq!(list, defaults());
    assert!(path.exists());
    assert_eq!(load(&path).expect("reload"), defaults());

    let written = std::fs::read_to_string(&path).expect("read");
    assert!(written.contains("\n  {"), "expected pretty-printed output");
    assert!(written.contains("\"Label\""));
}

#[test]
fn invalid_file_is_left_untouched() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("commands.json");
    std::fs::write(&path, "{not valid").expect("write");

    assert!(matches!(load(&path), Err(LoadError::Parse(_))));
    assert_eq!(load_or_default(&path), defaults());
    assert_eq!(std::fs::read_to_string(&path).expect("read"), "{not valid");
}

#[test]
fn empty_file_falls_back_without_overwriting() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("commands.json");
    std::fs::write(&path, "").expect("write");
    assert_eq!(load_or_default(&path), defaults());
    assert_eq!(std::fs::read_to_string(&path).expect("read"), "");
}

#[test]
fn non_utf8_file_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("commands.json");
    let bytes = [b'[', 0xff, 0xfe, b']'];
    std::fs::write(&path, bytes).expect("write");

    assert!(matches!(load(&path), Err(LoadError::Parse(_))));
    assert_eq!(load_or_default(&path), defaults());
    assert_eq!(std::fs::read(&path).expect("read"), bytes);
}

#[test]
fn unreadable_path_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    // a directory cannot be read as a file
    assert!(matches!(load(dir.path()), Err(LoadError::Io(_))));
    assert_eq!(load_or_default(dir.path()), defaults());
}

#[test]
fn user_file_keeps_order_and_duplicates() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("commands.json");
    std::fs::write(
        &path,
        r#"[
            {"Label": "Heal", "Command": "heal", "Description": ""},
            {"Label": "Fly", "Command": "noclip", "Description": "Toggle noclip"},
            {"Label": "Heal", "Command": "heal", "Description": ""}
        ]"#,
    )
    .expect("write");

    let store = CommandStore::new(&path);
    assert_eq!(store.source(), CommandSource::File);
    let labels: Vec<_> = store.entries().iter().map(|e| e.label.clone()).collect();
    assert_eq!(labels, vec!["Heal", "Fly", "Heal"]);
}

#[test]
fn store_is_never_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("commands.json");
    std::fs::write(&path, "[]").expect("write");
    let mut store = CommandStore::new(&path);
    assert!(!store.is_empty());
    std::fs::write(&path, "garbage").expect("write");
    store.reload();
    assert!(!store.is_empty());
}
