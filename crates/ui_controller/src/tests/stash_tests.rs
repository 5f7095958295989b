use super::*;

#[test]
fn memory_stash_set_get_remove() {
    let mut stash = MemoryStash::new();
    assert_eq!(stash.get("taskToDecompose"), None);

    stash.set("taskToDecompose", "Clean garage").expect("set");
    assert_eq!(stash.get("taskToDecompose").as_deref(), Some("Clean garage"));
    assert_eq!(stash.len(), 1);

    stash.remove("taskToDecompose").expect("remove");
    assert!(stash.is_empty());
}

#[test]
fn file_stash_survives_a_new_handle() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("stash.json");

    let mut writer = FileStash::new(&path);
    writer.set("taskToDecompose", "File taxes").expect("set");
    assert!(path.exists());

    let reader = FileStash::new(&path);
    assert_eq!(reader.get("taskToDecompose").as_deref(), Some("File taxes"));
}

#[test]
fn file_stash_removes_file_when_last_entry_is_cleared() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("stash.json");

    let mut stash = FileStash::new(&path);
    stash.set("taskToDecompose", "Book dentist").expect("set");
    stash.remove("taskToDecompose").expect("remove");

    assert!(!path.exists());
    assert_eq!(stash.get("taskToDecompose"), None);
    stash.remove("taskToDecompose").expect("second remove is a no-op");
}

#[test]
fn file_stash_treats_corrupt_file_as_empty_and_overwrites_it() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("stash.json");
    std::fs::write(&path, "{not json").expect("write");

    let mut stash = FileStash::new(&path);
    assert_eq!(stash.get("taskToDecompose"), None);

    stash.set("taskToDecompose", "Water plants").expect("set");
    assert_eq!(stash.get("taskToDecompose").as_deref(), Some("Water plants"));
}
