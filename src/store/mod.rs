//! Local persistence of the weekly report.
//!
//! The report is mirrored into a key-value store as a single JSON record.
//! The store itself is a port ([`KvStore`]) so the CLI can use SQLite and
//! tests can use [`MemoryStore`].

mod memory;
mod persistence;
mod record;

pub use memory::MemoryStore;
pub use persistence::{LoadOutcome, Persistence, STORAGE_KEY};
pub use record::PersistedRecord;

use crate::errors::AppResult;

/// Minimal key-value storage port.
pub trait KvStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;
}

impl<S: KvStore + ?Sized> KvStore for &mut S {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        (**self).remove(key)
    }
}
