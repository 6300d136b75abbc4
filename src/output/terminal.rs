//! Terminal-backed display.

use std::io::Write;

use console::Term;

use super::display::{Display, Line, Scrollback, Style};

/// Display that mirrors every line to the terminal and keeps a scrollback.
pub struct TerminalDisplay {
    term: Term,
    scrollback: Scrollback,
    error: console::Style,
    warning: console::Style,
    prompt: console::Style,
}

impl TerminalDisplay {
    /// Create a display writing to stdout.
    pub fn new(max_lines: usize, color: bool) -> Self {
        Self::with_term(Term::stdout(), max_lines, color)
    }

    /// Create a display writing to an explicit terminal handle.
    pub fn with_term(term: Term, max_lines: usize, color: bool) -> Self {
        let (error, warning, prompt) = if color {
            (
                console::Style::new().red(),
                console::Style::new().yellow(),
                console::Style::new().cyan().bold(),
            )
        } else {
            (
                console::Style::new(),
                console::Style::new(),
                console::Style::new(),
            )
        };

        Self {
            term,
            scrollback: Scrollback::new(max_lines),
            error,
            warning,
            prompt,
        }
    }

    /// Lines appended since the last clear.
    pub fn scrollback(&self) -> &Scrollback {
        &self.scrollback
    }

    /// Write the input prompt without a newline.
    pub fn show_prompt(&mut self, prompt: &str) {
        write!(self.term, "{}", self.prompt.apply_to(prompt)).ok();
        self.term.flush().ok();
    }

    /// Check if stdout is an interactive terminal.
    pub fn is_interactive(&self) -> bool {
        self.term.is_term()
    }

    fn render(&self, line: &Line) -> String {
        match line.style {
            Style::Normal => line.text.clone(),
            Style::Error => self.error.apply_to(&line.text).to_string(),
            Style::Warning => self.warning.apply_to(&line.text).to_string(),
        }
    }
}

impl Display for TerminalDisplay {
    fn append(&mut self, line: Line) {
        let rendered = self.render(&line);
        writeln!(self.term, "{}", rendered).ok();
        self.scrollback.append(line);
    }

    fn clear(&mut self) {
        self.scrollback.clear();
        if self.term.is_term() {
            self.term.clear_screen().ok();
        }
    }
}
