//! Execution result types.

use std::time::Duration;

/// Captured output of a forwarded command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Standard output, ANSI sequences stripped.
    pub stdout: String,
    /// Standard error, ANSI sequences stripped.
    pub stderr: String,
    /// Exit code (`None` if killed by a signal or never spawned).
    pub exit_code: Option<i32>,
    /// Wall-clock execution time.
    pub duration: Duration,
}

impl ExecutionResult {
    /// Create a new execution result.
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>, duration: Duration) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit_code: None,
            duration,
        }
    }

    /// Result for a command that had nothing to run.
    pub fn empty() -> Self {
        Self::default().with_exit_code(0)
    }

    /// Set the exit code.
    pub fn with_exit_code(mut self, code: i32) -> Self {
        self.exit_code = Some(code);
        self
    }

    /// Check if command succeeded (exit code 0).
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Check if command failed (non-zero exit code or no exit code at all).
    pub fn failed(&self) -> bool {
        !self.success()
    }

    /// Stdout with trailing whitespace removed.
    pub fn stdout_trimmed(&self) -> &str {
        self.stdout.trim_end()
    }

    /// Stderr with trailing whitespace removed.
    pub fn stderr_trimmed(&self) -> &str {
        self.stderr.trim_end()
    }

    /// Check if neither stream produced visible output.
    pub fn is_silent(&self) -> bool {
        self.stdout_trimmed().is_empty() && self.stderr_trimmed().is_empty()
    }
}
