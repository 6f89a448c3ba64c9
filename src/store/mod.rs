//! The authoritative expense list and its best-effort persistence.

use std::collections::{BTreeSet, HashSet};

use uuid::Uuid;

use crate::{
    domain::{ExpenseItem, Identifiable},
    errors::StoreError,
    storage::KeyValueStore,
};

/// Key under which the serialized list lives in the backing store.
pub const ITEMS_KEY: &str = "Items";

/// Ordered collection of expense records, kept equal to its persisted blob after
/// every mutation.
///
/// The store owns its backend. Mutations take `&mut self`, apply the change in
/// memory, then re-serialize the whole list before returning.
#[derive(Debug)]
pub struct Expenses<S: KeyValueStore> {
    items: Vec<ExpenseItem>,
    backend: S,
}

impl<S: KeyValueStore> Expenses<S> {
    /// Restores the list from `backend`. A missing, unreadable, or undecodable
    /// blob yields an empty list.
    pub fn load(backend: S) -> Self {
        let items = best_effort("load", read_items(&backend)).unwrap_or_default();
        tracing::debug!(count = items.len(), "expense store initialized");
        Self { items, backend }
    }

    pub fn items(&self) -> &[ExpenseItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The filtered view that `remove_at` positions index into.
    pub fn in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a ExpenseItem> + 'a {
        self.items.iter().filter(move |item| item.is_in(category))
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(|item| item.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Adds `item` to the end of the list and persists. No validation happens here.
    pub fn append(&mut self, item: ExpenseItem) {
        tracing::debug!(id = %item.id, category = %item.category, "appending expense");
        self.items.push(item);
        self.persist();
    }

    /// Removes the records found at `positions` within the `category` view.
    ///
    /// Every position is resolved to a record id before anything is removed, so
    /// the order of `positions` and duplicates among them do not matter.
    /// Out-of-range positions are ignored. Returns the removed records in list order.
    pub fn remove_at<I>(&mut self, category: &str, positions: I) -> Vec<ExpenseItem>
    where
        I: IntoIterator<Item = usize>,
    {
        let positions: BTreeSet<usize> = positions.into_iter().collect();
        let targets: HashSet<Uuid> = self
            .in_category(category)
            .enumerate()
            .filter(|(offset, _)| positions.contains(offset))
            .map(|(_, item)| item.id())
            .collect();

        let mut removed = Vec::with_capacity(targets.len());
        let mut kept = Vec::with_capacity(self.items.len());
        for item in self.items.drain(..) {
            if targets.contains(&item.id()) {
                removed.push(item);
            } else {
                kept.push(item);
            }
        }
        self.items = kept;

        tracing::debug!(
            category,
            requested = positions.len(),
            removed = removed.len(),
            "removed expenses"
        );
        self.persist();
        removed
    }

    fn persist(&mut self) {
        let result = encode_items(&self.items)
            .and_then(|bytes| self.backend.write(ITEMS_KEY, &bytes));
        best_effort("persist", result);
    }
}

fn read_items<S: KeyValueStore>(backend: &S) -> Result<Vec<ExpenseItem>, StoreError> {
    match backend.read(ITEMS_KEY)? {
        Some(bytes) => decode_items(&bytes),
        None => Ok(Vec::new()),
    }
}

/// Serializes the full list into the persisted blob shape.
///
/// JSON has no representation for non-finite numbers, so a list holding one is
/// refused rather than written as a blob that would fail to decode.
pub fn encode_items(items: &[ExpenseItem]) -> Result<Vec<u8>, StoreError> {
    if let Some(item) = items.iter().find(|item| !item.amount.is_finite()) {
        return Err(StoreError::Write(format!(
            "expense {} has non-finite amount {}",
            item.id, item.amount
        )));
    }
    serde_json::to_vec(items).map_err(|err| StoreError::Write(err.to_string()))
}

/// Parses a persisted blob. Any shape mismatch is a [`StoreError::Decode`].
pub fn decode_items(bytes: &[u8]) -> Result<Vec<ExpenseItem>, StoreError> {
    serde_json::from_slice(bytes).map_err(|err| StoreError::Decode(err.to_string()))
}

/// Persistence failures stop here. Neither decode nor write errors reach callers
/// of the store; a failed load degrades to an empty list and a failed write
/// leaves the in-memory change in place.
fn best_effort<T>(operation: &'static str, result: Result<T, StoreError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(operation, error = %err, "persistence failure absorbed");
            None
        }
    }
}
