//! # pathshell
//!
//! Interactive shell front-end with a directory cursor and persisted
//! path aliases.
//!
//! Each input line is interpreted before anything reaches the host shell:
//! built-ins such as `cd`, `vars` and `custom path` are handled in-process,
//! a leading alias is rewritten to its stored path, and whatever remains is
//! run through the platform shell in the session's current directory.
//!
//! ## Features
//!
//! - **Directory cursor**: `cd` validates and normalizes before moving
//! - **Aliases**: `custom path <source> <alias>` persists a name → path entry
//! - **Path variables**: `$DISK`, `$HOME`, `$START` plus configured extras
//! - **Injected collaborators**: alias store, executor and display are traits
//!
//! ## Quick Start
//!
//! ```no_run
//! use pathshell::{
//!     CommandInterpreter, FileAliasStore, HostShell, Scrollback, SessionContext, Shell,
//!     VariableExpander,
//! };
//!
//! fn main() -> pathshell::Result<()> {
//!     pathshell::logging::try_init().ok();
//!
//!     let context = SessionContext::from_process()?;
//!     let variables = VariableExpander::from_env(context.current_dir());
//!     let aliases = FileAliasStore::new("pathshell-aliases.json");
//!
//!     let mut shell = Shell::new(
//!         CommandInterpreter::new(aliases, variables),
//!         HostShell::default(),
//!         Scrollback::default(),
//!         context,
//!     );
//!
//!     shell.submit("custom path ./src srcdir");
//!     shell.submit("srcdir/build.sh --release");
//!     for line in shell.display().lines() {
//!         println!("{}", line);
//!     }
//!     Ok(())
//! }
//! ```

pub mod alias;
pub mod cli;
pub mod config;
pub mod error;
pub mod execution;
pub mod interpreter;
pub mod logging;
pub mod output;
pub mod path;
pub mod session;
pub mod variables;

// Re-export commonly used types
pub use alias::{AliasStore, FileAliasStore, MemoryAliasStore};
pub use error::{PathShellError, Result};
pub use execution::{Command, ExecutionResult, HostShell, ShellExecutor};
pub use interpreter::{CommandInterpreter, Outcome};
pub use output::{Display, Line, Scrollback, Style, TerminalDisplay};
pub use path::{PathKind, PathResolver};
pub use session::{SessionContext, Shell};
pub use variables::VariableExpander;
