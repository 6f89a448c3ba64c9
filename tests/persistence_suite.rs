mod common;

use std::fs;

use common::{file_store, item};
use iexpense::{
    domain::{BUSINESS, PERSONAL},
    storage::KeyValueStore,
    store::ITEMS_KEY,
    Expenses,
};
use serde_json::Value;

#[test]
fn blob_is_a_json_array_under_the_items_key() {
    let (backend, _guard) = file_store();
    let path = backend.blob_path(ITEMS_KEY);
    let mut expenses = Expenses::load(backend);
    let record = item("Train", BUSINESS, 19.9);
    expenses.append(record.clone());

    assert!(path.ends_with("Items.json"));
    let json: Value = serde_json::from_slice(&fs::read(&path).expect("read blob")).expect("json");
    let entries = json.as_array().expect("array");
    assert_eq!(entries.len(), 1);

    let entry = entries[0].as_object().expect("object");
    let mut keys: Vec<&str> = entry.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, ["amount", "id", "name", "type"]);
    assert_eq!(entry["id"], record.id.to_string());
    assert_eq!(entry["type"], "Business");
    assert_eq!(entry["amount"], 19.9);
}

#[test]
fn blob_written_elsewhere_is_restored() {
    let (mut backend, _guard) = file_store();
    let id = "6f1c2a3e-0d4b-4c5a-9e8f-7a6b5c4d3e2f";
    let blob = format!(
        r#"[{{"id":"{id}","name":"Groceries","type":"Personal","amount":54.25}}]"#
    );
    backend.write(ITEMS_KEY, blob.as_bytes()).expect("seed");

    let expenses = Expenses::load(backend);
    assert_eq!(expenses.len(), 1);
    let restored = &expenses.items()[0];
    assert_eq!(restored.id.to_string(), id);
    assert_eq!(restored.name, "Groceries");
    assert_eq!(restored.category, PERSONAL);
    assert_eq!(restored.amount, 54.25);
}

#[test]
fn failed_write_keeps_previous_blob_and_memory_change() {
    let (backend, _guard) = file_store();
    let path = backend.blob_path(ITEMS_KEY);
    let mut expenses = Expenses::load(backend);
    expenses.append(item("First", PERSONAL, 5.0));
    let original = fs::read(&path).expect("read original");

    // A directory on the staging path makes the next write fail before the rename.
    let mut staging = path.clone().into_os_string();
    staging.push(".tmp");
    fs::create_dir_all(&staging).expect("block staging path");

    expenses.append(item("Second", PERSONAL, 6.0));
    assert_eq!(expenses.len(), 2, "in-memory change must still apply");
    assert_eq!(fs::read(&path).expect("read after failure"), original);
}

#[test]
fn empty_store_persists_empty_array_after_removal() {
    let (backend, _guard) = file_store();
    let path = backend.blob_path(ITEMS_KEY);
    let mut expenses = Expenses::load(backend);
    expenses.append(item("Only", BUSINESS, 1.0));
    expenses.remove_at(BUSINESS, [0]);

    assert_eq!(fs::read_to_string(&path).expect("read"), "[]");
    assert!(expenses.backend().read(ITEMS_KEY).expect("read").is_some());
}
