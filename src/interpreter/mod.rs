//! Command interpretation.
//!
//! A raw input line is split on whitespace and dispatched on its first
//! token. Built-ins (`cd`, `clear`, `vars`, `aliases`, `custom path`, `ls`)
//! are handled here; anything else has a leading alias substituted and is
//! returned as an [`Outcome::Forward`] for the executor.
//!
//! # Example
//!
//! ```
//! use pathshell::alias::MemoryAliasStore;
//! use pathshell::interpreter::{CommandInterpreter, Outcome};
//! use pathshell::session::SessionContext;
//! use pathshell::variables::VariableExpander;
//!
//! let aliases = MemoryAliasStore::with_entries([("logs", "/var/log")]);
//! let interpreter = CommandInterpreter::new(aliases, VariableExpander::new());
//! let mut context = SessionContext::new("/");
//!
//! match interpreter.interpret("tail logs/syslog", &mut context) {
//!     Outcome::Forward(cmd) => assert_eq!(cmd, "tail logs/syslog"),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! match interpreter.interpret("logs/syslog", &mut context) {
//!     Outcome::Forward(cmd) => assert_eq!(cmd, "/var/log/syslog"),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```

mod dispatch;
mod outcome;
mod tokens;

pub use dispatch::{CommandInterpreter, LISTING_COMMAND};
pub use outcome::Outcome;
pub use tokens::CommandLine;
