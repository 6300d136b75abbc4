//! Forwarded command execution.
//!
//! The interpreter decides *what* to run; this module runs it through the
//! host shell in the session's current directory and captures stdout and
//! stderr separately. Execution is synchronous and has no timeout: a
//! command that never exits blocks the session.
//!
//! # Example
//!
//! ```no_run
//! use pathshell::execution::{Command, HostShell, ShellExecutor};
//!
//! let shell = HostShell::default();
//! let result = shell
//!     .execute(&Command::new("echo hello").working_dir("/tmp"))
//!     .unwrap();
//! println!("Output: {}", result.stdout);
//! ```

mod command;
mod executor;
mod result;

pub use command::Command;
pub use executor::{HostShell, ShellExecutor};
pub use result::ExecutionResult;
