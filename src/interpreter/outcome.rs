//! Interpretation results.

use std::path::PathBuf;

use crate::error::PathShellError;
use crate::output::Line;

/// What the interpreter decided to do with one input line.
#[derive(Debug)]
pub enum Outcome {
    /// A built-in produced these lines; nothing is executed.
    Builtin(Vec<Line>),
    /// `clear`: the display should drop its scrollback.
    Cleared,
    /// `cd` succeeded; the session now points at this directory.
    DirectoryChanged(PathBuf),
    /// Run this exact string through the host shell.
    Forward(String),
    /// The command was rejected; session state is untouched.
    Failed(PathShellError),
}

impl Outcome {
    /// Lines to append to the display for this outcome.
    ///
    /// A failure always renders as exactly one error line. Forwarded
    /// commands render nothing here; their output comes from the executor.
    pub fn lines(&self) -> Vec<Line> {
        match self {
            Self::Builtin(lines) => lines.clone(),
            Self::Failed(err) => {
                let message = err.to_string().replace(|c: char| c == '\r' || c == '\n', " ");
                vec![Line::error(format!("error: {}", message))]
            }
            Self::Cleared | Self::DirectoryChanged(_) | Self::Forward(_) => Vec::new(),
        }
    }

    /// The forwarded command line, if this is a forward.
    pub fn forwarded(&self) -> Option<&str> {
        match self {
            Self::Forward(cmd) => Some(cmd),
            _ => None,
        }
    }

    /// Check if the command was rejected.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl From<PathShellError> for Outcome {
    fn from(err: PathShellError) -> Self {
        Self::Failed(err)
    }
}
