//! Host shell executor.

use std::process::Stdio;
use std::time::Instant;

use tracing::{debug, warn};

use super::command::Command;
use super::result::ExecutionResult;
use crate::error::PathShellError;
use crate::output::OutputSanitizer;
use crate::Result;

/// Runs a resolved command line and captures its output.
pub trait ShellExecutor {
    /// Run `command` to completion. Blocks until the child exits.
    ///
    /// Fails with [`ExecutionLaunch`](PathShellError::ExecutionLaunch) if the
    /// process could not be started.
    fn execute(&self, command: &Command) -> Result<ExecutionResult>;
}

/// Executor that hands the command line to the platform shell
/// (`sh -c` on Unix, `cmd /C` on Windows).
///
/// The child's stdin is closed: the session owns the terminal's input, so a
/// command that reads stdin sees EOF at once instead of consuming the lines
/// meant for the interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostShell {
    program: String,
    args: Vec<String>,
}

impl HostShell {
    /// Use an explicit shell invocation such as `"bash -c"` or
    /// `"powershell -Command"`. The command line is appended as the final
    /// argument. Falls back to the platform default for an empty string.
    pub fn from_invocation(invocation: &str) -> Self {
        let mut parts = invocation.split_whitespace().map(str::to_string);
        match parts.next() {
            Some(program) => Self {
                program,
                args: parts.collect(),
            },
            None => Self::default(),
        }
    }

    /// Shell program name.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments placed before the command line.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Default for HostShell {
    #[cfg(unix)]
    fn default() -> Self {
        Self {
            program: "sh".to_string(),
            args: vec!["-c".to_string()],
        }
    }

    #[cfg(windows)]
    fn default() -> Self {
        Self {
            program: "cmd".to_string(),
            args: vec!["/C".to_string()],
        }
    }
}

impl ShellExecutor for HostShell {
    fn execute(&self, command: &Command) -> Result<ExecutionResult> {
        if command.is_empty() {
            return Ok(ExecutionResult::empty());
        }

        let start = Instant::now();

        let mut process = std::process::Command::new(&self.program);
        process
            .args(&self.args)
            .arg(&command.command_line)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &command.working_dir {
            process.current_dir(dir);
        }

        debug!(shell = %self.program, command = %command.command_line, "spawning");

        let output = process.output().map_err(|e| {
            warn!(command = %command.command_line, error = %e, "launch failed");
            PathShellError::ExecutionLaunch(format!("{}: {}", self.program, e))
        })?;

        let mut result = ExecutionResult::new(
            OutputSanitizer::to_plain_text(&output.stdout),
            OutputSanitizer::to_plain_text(&output.stderr),
            start.elapsed(),
        );
        if let Some(code) = output.status.code() {
            result = result.with_exit_code(code);
        }

        debug!(exit_code = ?result.exit_code, elapsed = ?result.duration, "command finished");
        Ok(result)
    }
}
