//! Command representation.

use std::path::PathBuf;

/// A resolved command line ready for the host shell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    /// The command line to execute.
    pub command_line: String,
    /// Working directory (inherits the process directory if unset).
    pub working_dir: Option<PathBuf>,
}

impl Command {
    /// Create a new command with the given command line.
    pub fn new(command_line: impl Into<String>) -> Self {
        Self {
            command_line: command_line.into(),
            working_dir: None,
        }
    }

    /// Set the working directory.
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Check if there is nothing to run.
    pub fn is_empty(&self) -> bool {
        self.command_line.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_new() {
        let cmd = Command::new("ls -la");
        assert_eq!(cmd.command_line, "ls -la");
        assert!(cmd.working_dir.is_none());
        assert!(!cmd.is_empty());
    }

    #[test]
    fn test_command_working_dir() {
        let cmd = Command::new("make").working_dir("/project");
        assert_eq!(cmd.working_dir, Some(PathBuf::from("/project")));
    }

    #[test]
    fn test_blank_command_is_empty() {
        assert!(Command::new("").is_empty());
        assert!(Command::new("   ").is_empty());
    }
}
