use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{errors::StoreError, utils::persistence::write_atomic};

use super::{KeyValueStore, Result};

const BLOB_EXTENSION: &str = "json";

/// Filesystem-backed blob store keeping one file per key under a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn blob_path(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_key(key), BLOB_EXTENSION))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.blob_path(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.blob_path(key);
        write_atomic(&path, bytes)
            .map_err(|err| StoreError::Write(format!("{}: {}", path.display(), err)))?;
        tracing::trace!(path = %path.display(), bytes = bytes.len(), "blob written");
        Ok(())
    }
}

/// Maps a key onto a safe file stem. Case is preserved so `Items` stays `Items.json`.
fn canonical_key(key: &str) -> String {
    let sanitized: String = key
        .trim()
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "blob".into()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with_temp_dir() -> (FileStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = FileStore::new(temp.path().join("data")).expect("file store");
        (store, temp)
    }

    #[test]
    fn missing_blob_reads_as_none() {
        let (store, _guard) = store_with_temp_dir();
        assert!(store.read("Items").expect("read").is_none());
    }

    #[test]
    fn write_and_read_roundtrip() {
        let (mut store, _guard) = store_with_temp_dir();
        store.write("Items", b"[1,2]").expect("write");
        assert_eq!(store.read("Items").expect("read"), Some(b"[1,2]".to_vec()));
        assert!(store.blob_path("Items").ends_with("Items.json"));
    }

    #[test]
    fn keys_are_sanitized_into_file_stems() {
        assert_eq!(canonical_key("Items"), "Items");
        assert_eq!(canonical_key("../evil key"), "___evil_key");
        assert_eq!(canonical_key("  "), "blob");
    }

    #[test]
    fn write_failure_maps_to_write_error() {
        let (mut store, _guard) = store_with_temp_dir();
        // A directory squatting on the blob path makes the final rename fail.
        fs::create_dir_all(store.blob_path("Items").join("occupied")).expect("squat");
        let err = store.write("Items", b"[]").expect_err("write should fail");
        assert!(matches!(err, StoreError::Write(_)));
    }
}
