use super::*;

#[test]
fn test_memory_read_default() {
    let store = MemoryStore::new();
    assert_eq!(store.read(EDITOR_KEY, ""), "");
    assert_eq!(store.read(SIZE_UNITS_KEY, "1"), "1");
}

#[test]
fn test_memory_write_then_read() {
    let mut store = MemoryStore::new();
    store.write(EDITOR_KEY, "/bin/vi");
    assert_eq!(store.read(EDITOR_KEY, ""), "/bin/vi");
    assert_eq!(store.flushes(), 0);
    store.flush().unwrap();
    assert_eq!(store.flushes(), 1);
}

#[test]
fn test_file_missing_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::at(dir.path().join("config.toml")).unwrap();
    assert_eq!(store.read(EDITOR_KEY, "none"), "none");
    assert_eq!(store.entries().count(), 0);
}

#[test]
fn test_file_flush_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut store = FileStore::at(&path).unwrap();
    store.write(EDITOR_KEY, "C:\\Program Files\\Notepad++\\notepad++.exe");
    store.write(SIZE_UNITS_KEY, "2");
    store.flush().unwrap();

    let reloaded = FileStore::at(&path).unwrap();
    assert_eq!(
        reloaded.read(EDITOR_KEY, ""),
        "C:\\Program Files\\Notepad++\\notepad++.exe"
    );
    assert_eq!(reloaded.read(SIZE_UNITS_KEY, "1"), "2");
}

#[test]
fn test_file_keys_are_stored_without_slash() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut store = FileStore::at(&path).unwrap();
    store.write(EDITOR_KEY, "/usr/bin/code");
    store.write(SIZE_UNITS_KEY, "1");
    store.flush().unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    insta::assert_snapshot!(content, @r#"
    editor = "/usr/bin/code"
    size_units = "1"
    "#);

    let keys: Vec<String> = store.entries().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["/editor", "/size_units"]);
}

#[test]
fn test_file_reads_unquoted_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "editor = \"gedit\"\nvideo_viewer = \"mpv\"\n").unwrap();

    let store = FileStore::at(&path).unwrap();
    assert_eq!(store.read(EDITOR_KEY, ""), "gedit");
    assert_eq!(store.read(VIDEO_VIEWER_KEY, ""), "mpv");
}

#[test]
fn test_file_rejects_malformed_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "editor = [").unwrap();

    let err = FileStore::at(&path).unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse config at"));
}

#[test]
fn test_canonical_key_accepts_bare_names() {
    assert_eq!(canonical_key("editor").unwrap(), EDITOR_KEY);
    assert_eq!(canonical_key("/size_units").unwrap(), SIZE_UNITS_KEY);
    let err = canonical_key("window_x").unwrap_err();
    assert_eq!(err.to_string(), "Unknown config key: window_x");
}

#[test]
fn test_get_value_defaults() {
    let store = MemoryStore::new();
    assert_eq!(get_value(&store, "editor").unwrap(), "");
    assert_eq!(get_value(&store, "size_units").unwrap(), "1");
}

#[test]
fn test_set_size_units_only_stores_encoded_values() {
    let mut store = MemoryStore::new();
    set_value(&mut store, "size_units", "Bytes").unwrap();
    assert_eq!(store.get(SIZE_UNITS_KEY), Some("2"));
    set_value(&mut store, "/size_units", "1").unwrap();
    assert_eq!(store.get(SIZE_UNITS_KEY), Some("1"));
    assert!(set_value(&mut store, "size_units", "7").is_err());
    assert_eq!(store.get(SIZE_UNITS_KEY), Some("1"));
}

#[test]
fn test_set_editor_is_verbatim() {
    let mut store = MemoryStore::new();
    set_value(&mut store, "editor", "open -a \"TextEdit\"").unwrap();
    assert_eq!(store.get(EDITOR_KEY), Some("open -a \"TextEdit\""));
}

#[test]
fn test_file_accepts_unquoted_scalars() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "editor = \"gedit\"\nsize_units = 2\nwindow_maximized = true\nrecent = [\"a\"]\n",
    )
    .unwrap();

    let store = FileStore::at(&path).unwrap();
    assert_eq!(store.read(EDITOR_KEY, ""), "gedit");
    assert_eq!(store.read(SIZE_UNITS_KEY, "1"), "2");
    assert_eq!(store.read("/window_maximized", ""), "true");
    assert_eq!(store.read("/recent", "none"), "none");
}
