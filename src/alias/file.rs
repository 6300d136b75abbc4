//! JSON-file backed alias store.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::AliasStore;
use crate::error::PathShellError;
use crate::Result;

/// Default alias file name, relative to the launch directory.
pub const DEFAULT_ALIAS_FILE: &str = "pathshell-aliases.json";

type AliasTable = BTreeMap<String, String>;

/// Alias store persisted as a flat JSON object (`{"name": "path"}`).
///
/// Every call loads the file fresh; `put` is load-modify-store with no
/// locking, so two processes writing at once can lose an update.
#[derive(Debug, Clone)]
pub struct FileAliasStore {
    path: PathBuf,
}

impl FileAliasStore {
    /// Create a store backed by the file at `path`. The file is not touched
    /// until the first access.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<AliasTable> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "alias file missing, using empty table");
                return Ok(AliasTable::new());
            }
            Err(e) => return Err(self.persistence_error("read", e)),
        };

        if content.trim().is_empty() {
            return Ok(AliasTable::new());
        }

        serde_json::from_str(&content).map_err(|e| self.persistence_error("parse", e))
    }

    fn store(&self, table: &AliasTable) -> Result<()> {
        let json =
            serde_json::to_string_pretty(table).map_err(|e| self.persistence_error("encode", e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.persistence_error("write", e))?;
        }

        // Write beside the target, then swap it in.
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json).map_err(|e| self.persistence_error("write", e))?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            self.persistence_error("write", e)
        })
    }

    fn persistence_error(&self, action: &str, err: impl std::fmt::Display) -> PathShellError {
        PathShellError::Persistence(format!(
            "failed to {} {}: {}",
            action,
            self.path.display(),
            err
        ))
    }
}

impl Default for FileAliasStore {
    fn default() -> Self {
        Self::new(DEFAULT_ALIAS_FILE)
    }
}

impl AliasStore for FileAliasStore {
    fn has(&self, name: &str) -> Result<bool> {
        Ok(self.load()?.contains_key(name))
    }

    fn get(&self, name: &str) -> Result<String> {
        self.load()?
            .remove(name)
            .ok_or_else(|| PathShellError::AliasNotFound(name.to_string()))
    }

    fn put(&self, name: &str, path: &str) -> Result<()> {
        let mut table = self.load()?;
        table.insert(name.to_string(), path.to_string());
        self.store(&table)?;

        info!(alias = name, target = path, file = %self.path.display(), "alias saved");
        Ok(())
    }

    fn entries(&self) -> Result<Vec<(String, String)>> {
        Ok(self.load()?.into_iter().collect())
    }
}
