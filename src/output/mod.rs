//! Output processing and display.
//!
//! This module provides:
//! - ANSI escape code stripping for captured command output
//! - The [`Display`] collaborator the shell writes scrollback lines to
//! - A bounded in-memory [`Scrollback`] and a terminal-backed display
//!
//! # Example
//!
//! ```
//! use pathshell::output::{Display, Line, OutputSanitizer, Scrollback};
//!
//! let clean = OutputSanitizer::strip_ansi(b"\x1b[31mRed text\x1b[0m");
//! assert_eq!(clean, "Red text");
//!
//! let mut log = Scrollback::new(100);
//! log.append(Line::normal(clean));
//! log.append(Line::error("something broke"));
//! assert_eq!(log.len(), 2);
//! ```

mod display;
mod sanitizer;
mod terminal;

pub use display::{Display, Line, Scrollback, Style, DEFAULT_SCROLLBACK_LINES};
pub use sanitizer::OutputSanitizer;
pub use terminal::TerminalDisplay;
