//! Session execution context.

use std::path::{Path, PathBuf};

use crate::path::normalize;

/// Per-session state: the directory cursor plus bookkeeping about the
/// last forwarded command.
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// Current working directory, always absolute and normalized.
    cwd: PathBuf,
    /// Last forwarded command.
    last_command: Option<String>,
    /// Exit code of last forwarded command.
    last_exit_code: Option<i32>,
    /// Forwarded command count.
    execution_count: u64,
}

impl SessionContext {
    /// Create a context positioned at `cwd` (normalized).
    pub fn new(cwd: impl AsRef<Path>) -> Self {
        Self {
            cwd: normalize(cwd.as_ref()),
            last_command: None,
            last_exit_code: None,
            execution_count: 0,
        }
    }

    /// Create a context at the process working directory.
    pub fn from_process() -> std::io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// Get the current working directory.
    pub fn current_dir(&self) -> &Path {
        &self.cwd
    }

    /// Set the current working directory.
    ///
    /// Callers are expected to have checked that it is a directory.
    pub fn set_current_dir(&mut self, cwd: impl AsRef<Path>) {
        self.cwd = normalize(cwd.as_ref());
    }

    /// Get the last command executed.
    pub fn last_command(&self) -> Option<&str> {
        self.last_command.as_deref()
    }

    /// Get the exit code of the last command.
    pub fn last_exit_code(&self) -> Option<i32> {
        self.last_exit_code
    }

    /// Get the number of commands executed.
    pub fn execution_count(&self) -> u64 {
        self.execution_count
    }

    /// Record a forwarded command and its exit code (`None` if it never ran
    /// to completion).
    pub fn record_execution(&mut self, command: impl Into<String>, exit_code: Option<i32>) {
        self.last_command = Some(command.into());
        self.last_exit_code = exit_code;
        self.execution_count += 1;
    }

    /// Process exit status mirroring the last forwarded command. A command
    /// that never finished, or a code that does not fit in a byte, maps to 1.
    pub fn exit_status(&self) -> u8 {
        match self.last_exit_code() {
            Some(0) => 0,
            Some(code) => u8::try_from(code).unwrap_or(1),
            None if self.execution_count() == 0 => 0,
            None => 1,
        }
    }
}
