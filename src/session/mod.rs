//! Session state and the interactive loop.
//!
//! A session owns exactly one piece of persistent state, the current
//! directory, held in a [`SessionContext`]. [`Shell`] wires the
//! interpreter, the executor and the display together.

mod context;
mod shell;

pub use context::SessionContext;
pub use shell::Shell;
