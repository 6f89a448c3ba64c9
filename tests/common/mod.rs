use iexpense::{storage::FileStore, ExpenseItem, Expenses};
use tempfile::TempDir;

/// Creates a file-backed store rooted in a fresh temporary directory. Keep the
/// returned guard alive for as long as the store is used.
pub fn file_store() -> (FileStore, TempDir) {
    let temp = TempDir::new().expect("create temp dir");
    let store = FileStore::new(temp.path().join("data")).expect("create file store");
    (store, temp)
}

#[allow(dead_code)]
pub fn names<S: iexpense::storage::KeyValueStore>(expenses: &Expenses<S>) -> Vec<String> {
    expenses
        .items()
        .iter()
        .map(|item| item.name.clone())
        .collect()
}

#[allow(dead_code)]
pub fn item(name: &str, category: &str, amount: f64) -> ExpenseItem {
    ExpenseItem::new(name, category, amount)
}
