pub mod file_backend;
pub mod memory;

use crate::errors::StoreError;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Synchronous get/set of named blobs. This is the only persistence surface the
/// expense store depends on.
pub trait KeyValueStore {
    /// Returns `Ok(None)` when nothing has been written under `key`.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>>;
    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        (**self).write(key, bytes)
    }
}

pub use file_backend::FileStore;
pub use memory::MemoryStore;
