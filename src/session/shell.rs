//! Interpreter → executor → display glue.

use std::io::BufRead;

use tracing::{debug, warn};

use super::SessionContext;
use crate::alias::AliasStore;
use crate::execution::{Command, ShellExecutor};
use crate::interpreter::{CommandInterpreter, Outcome};
use crate::output::{Display, Line, Style};

/// Prompt suffix shown after the current directory.
pub const PROMPT_MARKER: &str = "❯";

/// One interactive session.
///
/// Commands run strictly one at a time: [`submit`](Shell::submit) does not
/// return until a forwarded command has exited.
pub struct Shell<A, E, D> {
    interpreter: CommandInterpreter<A>,
    executor: E,
    display: D,
    context: SessionContext,
}

impl<A, E, D> Shell<A, E, D>
where
    A: AliasStore,
    E: ShellExecutor,
    D: Display,
{
    /// Assemble a shell.
    pub fn new(
        interpreter: CommandInterpreter<A>,
        executor: E,
        display: D,
        context: SessionContext,
    ) -> Self {
        Self {
            interpreter,
            executor,
            display,
            context,
        }
    }

    /// Session state.
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// The display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Mutable access to the display.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// The interpreter.
    pub fn interpreter(&self) -> &CommandInterpreter<A> {
        &self.interpreter
    }

    /// Prompt text for the current directory.
    pub fn prompt(&self) -> String {
        format!("{} {} ", self.context.current_dir().display(), PROMPT_MARKER)
    }

    /// Handle one submitted line: echo it, interpret it, and either render
    /// the built-in result or run the forwarded command and render its
    /// output. Returns the interpreter's outcome.
    pub fn submit(&mut self, line: &str) -> Outcome {
        self.display.append(Line::normal(format!("> {}", line)));

        let outcome = self.interpreter.interpret(line, &mut self.context);
        match &outcome {
            Outcome::Cleared => self.display.clear(),
            Outcome::Forward(command) => self.run_forwarded(command),
            Outcome::DirectoryChanged(dir) => {
                debug!(cwd = %dir.display(), "prompt updated");
            }
            Outcome::Builtin(_) | Outcome::Failed(_) => self.display.extend(outcome.lines()),
        }
        outcome
    }

    fn run_forwarded(&mut self, command_line: &str) {
        let command = Command::new(command_line).working_dir(self.context.current_dir());

        match self.executor.execute(&command) {
            Ok(result) => {
                self.display
                    .extend(Line::block(result.stdout_trimmed(), Style::Normal));
                self.display
                    .extend(Line::block(result.stderr_trimmed(), Style::Error));

                if result.is_silent() && result.failed() {
                    if let Some(code) = result.exit_code {
                        self.display
                            .append(Line::warning(format!("exit status {}", code)));
                    }
                }
                if !command.is_empty() {
                    self.context.record_execution(command_line, result.exit_code);
                }
            }
            Err(err) => {
                warn!(command = command_line, error = %err, "forwarded command failed");
                self.display.append(Line::error(format!("error: {}", err)));
                self.context.record_execution(command_line, None);
            }
        }
    }

    /// Read lines from `input` until EOF, submitting each one. `show_prompt`
    /// is called before every read.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD rather than ending the loop.
    pub fn run<R, P>(&mut self, mut input: R, mut show_prompt: P) -> std::io::Result<()>
    where
        R: BufRead,
        P: FnMut(&mut D, &str),
    {
        let mut buf = Vec::new();
        loop {
            let prompt = self.prompt();
            show_prompt(&mut self.display, &prompt);

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                debug!(executed = self.context.execution_count(), "input closed");
                return Ok(());
            }
            let text = String::from_utf8_lossy(&buf);
            let line = text.trim_end_matches(|c: char| c == '\n' || c == '\r');
            self.submit(line);
        }
    }
}
