//! Alias table storage.
//!
//! An alias maps a short name to a filesystem path. The table is owned by
//! an [`AliasStore`]; the interpreter only ever talks to the trait so the
//! file-backed store can be swapped for [`MemoryAliasStore`] in tests.
//!
//! # Example
//!
//! ```
//! use pathshell::alias::{AliasStore, MemoryAliasStore};
//!
//! let store = MemoryAliasStore::new();
//! store.put("srcdir", "/home/user/project/src").unwrap();
//! assert!(store.has("srcdir").unwrap());
//! assert_eq!(store.get("srcdir").unwrap(), "/home/user/project/src");
//! ```

mod file;
mod memory;

pub use file::{FileAliasStore, DEFAULT_ALIAS_FILE};
pub use memory::MemoryAliasStore;

use crate::Result;

/// Name → path table used for alias substitution.
pub trait AliasStore {
    /// Check whether `name` is a key in the table.
    fn has(&self, name: &str) -> Result<bool>;

    /// Look up the target of `name`.
    ///
    /// Fails with [`AliasNotFound`](crate::PathShellError::AliasNotFound) if absent.
    fn get(&self, name: &str) -> Result<String>;

    /// Set or overwrite `name`. Last write wins.
    fn put(&self, name: &str, path: &str) -> Result<()>;

    /// All entries, sorted by name.
    fn entries(&self) -> Result<Vec<(String, String)>>;
}
