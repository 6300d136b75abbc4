//! In-memory alias store.

use std::collections::HashMap;
use std::sync::RwLock;

use super::AliasStore;
use crate::error::PathShellError;
use crate::Result;

/// Alias store that never touches the filesystem.
#[derive(Debug, Default)]
pub struct MemoryAliasStore {
    aliases: RwLock<HashMap<String, String>>,
}

impl MemoryAliasStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with entries.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let aliases = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            aliases: RwLock::new(aliases),
        }
    }

    /// Number of stored aliases.
    pub fn len(&self) -> usize {
        self.aliases.read().map(|a| a.len()).unwrap_or(0)
    }

    /// Check if no aliases are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> PathShellError {
    PathShellError::Persistence("alias table lock poisoned".to_string())
}

impl AliasStore for MemoryAliasStore {
    fn has(&self, name: &str) -> Result<bool> {
        let aliases = self.aliases.read().map_err(|_| poisoned())?;
        Ok(aliases.contains_key(name))
    }

    fn get(&self, name: &str) -> Result<String> {
        let aliases = self.aliases.read().map_err(|_| poisoned())?;
        aliases
            .get(name)
            .cloned()
            .ok_or_else(|| PathShellError::AliasNotFound(name.to_string()))
    }

    fn put(&self, name: &str, path: &str) -> Result<()> {
        let mut aliases = self.aliases.write().map_err(|_| poisoned())?;
        aliases.insert(name.to_string(), path.to_string());
        Ok(())
    }

    fn entries(&self) -> Result<Vec<(String, String)>> {
        let aliases = self.aliases.read().map_err(|_| poisoned())?;
        let mut entries: Vec<_> = aliases
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        entries.sort();
        Ok(entries)
    }
}
