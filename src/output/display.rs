//! Scrollback lines and the display collaborator.

use std::collections::VecDeque;
use std::fmt;

/// Default number of lines kept in a scrollback.
pub const DEFAULT_SCROLLBACK_LINES: usize = 1000;

/// Semantic style tag; the rendering layer maps it to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Regular output.
    #[default]
    Normal,
    /// Errors and stderr output.
    Error,
    /// Non-fatal notices (e.g. a non-zero exit status).
    Warning,
}

/// One line of scrollback text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The text, without a trailing newline.
    pub text: String,
    /// How to render it.
    pub style: Style,
}

impl Line {
    /// Create a line with an explicit style.
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Create a normal line.
    pub fn normal(text: impl Into<String>) -> Self {
        Self::new(text, Style::Normal)
    }

    /// Create an error line.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Style::Error)
    }

    /// Create a warning line.
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, Style::Warning)
    }

    /// Split a block of text into lines sharing one style.
    pub fn block(text: &str, style: Style) -> Vec<Line> {
        text.lines().map(|l| Line::new(l, style)).collect()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Append-only line log with a clear-all operation.
pub trait Display {
    /// Append one line.
    fn append(&mut self, line: Line);

    /// Remove every line.
    fn clear(&mut self);

    /// Append several lines in order.
    fn extend(&mut self, lines: Vec<Line>) {
        for line in lines {
            self.append(line);
        }
    }
}

/// Bounded in-memory scrollback; the oldest lines drop off first.
#[derive(Debug, Clone)]
pub struct Scrollback {
    lines: VecDeque<Line>,
    max_lines: usize,
}

impl Scrollback {
    /// Create a scrollback holding at most `max_lines` lines (0 = unbounded).
    pub fn new(max_lines: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            max_lines,
        }
    }

    /// Lines in display order.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// Text of every line in display order.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    /// Most recent line, if any.
    pub fn last(&self) -> Option<&Line> {
        self.lines.back()
    }

    /// Number of lines held.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the scrollback is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Scrollback {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLLBACK_LINES)
    }
}

impl Display for Scrollback {
    fn append(&mut self, line: Line) {
        if self.max_lines > 0 && self.lines.len() == self.max_lines {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    fn clear(&mut self) {
        self.lines.clear();
    }
}
