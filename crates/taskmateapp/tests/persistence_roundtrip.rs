use taskmateapp::api::TaskmateApi;
use taskmateapp::model::TodoRecord;
use taskmateapp::store::fs::FileStore;
use taskmateapp::store::DataStore;
use tempfile::TempDir;

#[test]
fn session_survives_restart() {
    let dir = TempDir::new().unwrap();

    {
        let mut api = TaskmateApi::new(FileStore::new(dir.path())).unwrap();
        api.add_todo("buy groceries").unwrap();
        api.add_todo("water plants").unwrap();
        api.add_todo("call the bank").unwrap();
        api.toggle_todo("2").unwrap();
        api.delete_todo("3").unwrap();
    }

    let api = TaskmateApi::new(FileStore::new(dir.path())).unwrap();
    let todos: Vec<_> = api
        .todos()
        .iter()
        .map(|t| (t.text.as_str(), t.is_completed))
        .collect();
    assert_eq!(
        todos,
        vec![("buy groceries", false), ("water plants", true)]
    );
}

#[test]
fn file_holds_the_persisted_shape() {
    let dir = TempDir::new().unwrap();
    let mut api = TaskmateApi::new(FileStore::new(dir.path())).unwrap();
    let added = api.add_todo("check shape").unwrap();
    let id = added.affected_todos[0].id.clone();

    let raw = std::fs::read_to_string(dir.path().join("todos.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{"id": id.to_string(), "todo": "check shape", "isCompleted": false}])
    );
}

#[test]
fn garbage_file_starts_empty_and_is_overwritten() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("todos.json"), "{{{ not json").unwrap();

    let mut api = TaskmateApi::new(FileStore::new(dir.path())).unwrap();
    assert!(api.todos().is_empty());

    api.add_todo("fresh start").unwrap();
    let store = FileStore::new(dir.path());
    assert_eq!(store.load().unwrap().len(), 1);
}

#[test]
fn save_load_round_trip_preserves_everything() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::new(dir.path()).with_key("roundtrip");

    let mut done = TodoRecord::new("ünïcödé text ✓");
    done.is_completed = true;
    let todos = vec![TodoRecord::new("first entry"), done, TodoRecord::new("third entry")];

    store.save(&todos).unwrap();
    assert_eq!(store.load().unwrap(), todos);
    assert!(dir.path().join("roundtrip.json").exists());
}

#[test]
fn edited_todo_gets_new_identity_on_disk() {
    let dir = TempDir::new().unwrap();
    let mut api = TaskmateApi::new(FileStore::new(dir.path())).unwrap();
    let old = api.add_todo("original text").unwrap().affected_todos[0].id.clone();

    api.begin_edit("1").unwrap();
    assert!(FileStore::new(dir.path()).load().unwrap().is_empty());

    api.submit().unwrap();
    let saved = FileStore::new(dir.path()).load().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].text, "original text");
    assert_ne!(saved[0].id, old);
}

#[test]
fn non_utf8_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("todos.json"), [0xff, 0xfe, 0x00, 0x5b]).unwrap();

    let mut api = TaskmateApi::new(FileStore::new(dir.path())).unwrap();
    assert!(api.todos().is_empty());

    api.add_todo("usable again").unwrap();
    assert_eq!(FileStore::new(dir.path()).load().unwrap().len(), 1);
}

#[test]
fn foreign_string_ids_survive_a_save() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("todos.json"),
        r#"[{"id":"todo-1","todo":"written elsewhere","isCompleted":false},
            {"id":"8c5e4ec2-4a23-4f9a-9e86-2b7f1f5a6b10","todo":"walk the dog","isCompleted":true}]"#,
    )
    .unwrap();

    let mut api = TaskmateApi::new(FileStore::new(dir.path())).unwrap();
    assert_eq!(api.todos().len(), 2);
    api.add_todo("new one").unwrap();
    api.toggle_todo("todo-1").unwrap();

    let saved = FileStore::new(dir.path()).load().unwrap();
    let ids: Vec<_> = saved.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids.len(), 3);
    assert_eq!(ids[0], "todo-1");
    assert_eq!(ids[1], "8c5e4ec2-4a23-4f9a-9e86-2b7f1f5a6b10");
    assert!(saved[0].is_completed);
    assert!(saved[1].is_completed);
    assert_eq!(saved[2].text, "new one");
}
