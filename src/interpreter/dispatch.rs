//! Built-in dispatch and alias substitution.

use tracing::{debug, info};

use super::outcome::Outcome;
use super::tokens::CommandLine;
use crate::alias::AliasStore;
use crate::error::PathShellError;
use crate::output::Line;
use crate::path::{PathKind, PathResolver};
use crate::session::SessionContext;
use crate::variables::VariableExpander;
use crate::Result;

/// Directory listing command `ls` is forwarded as.
#[cfg(unix)]
pub const LISTING_COMMAND: &str = "ls";

/// Directory listing command `ls` is forwarded as.
#[cfg(windows)]
pub const LISTING_COMMAND: &str = "dir";

const CD_USAGE: &str = "cd <path>";
const CUSTOM_PATH_USAGE: &str = "custom path <source> <alias>";

/// Turns one input line into an [`Outcome`].
///
/// The only state it touches is the current directory in the
/// [`SessionContext`] (on a successful `cd`) and the alias table (on a
/// successful `custom path`). Both are written only after every check for
/// that command has passed.
pub struct CommandInterpreter<A> {
    aliases: A,
    variables: VariableExpander,
    resolver: PathResolver,
}

impl<A: AliasStore> CommandInterpreter<A> {
    /// Create an interpreter over an alias store and a fixed variable set.
    pub fn new(aliases: A, variables: VariableExpander) -> Self {
        Self {
            aliases,
            variables,
            resolver: PathResolver::new(),
        }
    }

    /// The alias store.
    pub fn aliases(&self) -> &A {
        &self.aliases
    }

    /// The variable set.
    pub fn variables(&self) -> &VariableExpander {
        &self.variables
    }

    /// Interpret `raw`. Errors never escape: they come back as
    /// [`Outcome::Failed`].
    pub fn interpret(&self, raw: &str, context: &mut SessionContext) -> Outcome {
        let line = CommandLine::parse(raw);
        match self.dispatch(&line, context) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!(command = raw, error = %err, "command rejected");
                Outcome::Failed(err)
            }
        }
    }

    fn dispatch(&self, line: &CommandLine<'_>, context: &mut SessionContext) -> Result<Outcome> {
        let Some(head) = line.head() else {
            return Ok(Outcome::Forward(String::new()));
        };

        match head {
            "ls" => Ok(Outcome::Forward(format!("{}{}", LISTING_COMMAND, line.rest()))),
            "clear" => Ok(Outcome::Cleared),
            "cd" => self.change_directory(line, context),
            "vars" => Ok(self.list_variables()),
            "aliases" => self.list_aliases(),
            "custom" => self.custom(line, context),
            _ => self.substitute_alias(line).map(Outcome::Forward),
        }
    }

    fn change_directory(
        &self,
        line: &CommandLine<'_>,
        context: &mut SessionContext,
    ) -> Result<Outcome> {
        let target = match line.tokens() {
            [_, target] => *target,
            _ => return Err(PathShellError::Usage(CD_USAGE.to_string())),
        };

        let expanded = self.variables.expand(target);
        let resolved = self.resolver.resolve(context.current_dir(), &expanded);

        match self.resolver.classify(&resolved) {
            PathKind::Missing => Err(PathShellError::PathNotFound(expanded)),
            PathKind::File => Err(PathShellError::NotADirectory(expanded)),
            PathKind::Directory => {
                info!(from = %context.current_dir().display(), to = %resolved.display(), "directory changed");
                context.set_current_dir(resolved.clone());
                Ok(Outcome::DirectoryChanged(resolved))
            }
        }
    }

    fn custom(&self, line: &CommandLine<'_>, context: &SessionContext) -> Result<Outcome> {
        match line.arg(1) {
            None => Err(PathShellError::Usage(
                "custom: no argument given".to_string(),
            )),
            Some("path") => self.define_alias(line, context),
            Some(other) => Err(PathShellError::Usage(format!(
                "custom: unknown subcommand '{}'",
                other
            ))),
        }
    }

    fn define_alias(&self, line: &CommandLine<'_>, context: &SessionContext) -> Result<Outcome> {
        let (source, name) = match line.tokens() {
            [_, _, source, name] => (*source, *name),
            _ => return Err(PathShellError::Usage(CUSTOM_PATH_USAGE.to_string())),
        };

        if name.contains(is_separator) {
            return Err(PathShellError::Usage(format!(
                "alias name '{}' cannot contain a path separator",
                name
            )));
        }

        let expanded = self.variables.expand(source);
        let resolved = self.resolver.resolve(context.current_dir(), &expanded);

        if self.resolver.classify(&resolved) == PathKind::Missing {
            return Err(PathShellError::PathNotFound(expanded));
        }

        let target = resolved.to_string_lossy();
        self.aliases.put(name, &target)?;

        Ok(Outcome::Builtin(vec![Line::normal(format!(
            "alias {} -> {}",
            name, target
        ))]))
    }

    fn list_variables(&self) -> Outcome {
        if self.variables.is_empty() {
            return Outcome::Builtin(vec![Line::normal("(no variables)")]);
        }

        Outcome::Builtin(
            self.variables
                .iter()
                .map(|(token, value)| Line::normal(format!("{} = {}", token, value)))
                .collect(),
        )
    }

    fn list_aliases(&self) -> Result<Outcome> {
        let entries = self.aliases.entries()?;
        if entries.is_empty() {
            return Ok(Outcome::Builtin(vec![Line::normal("(no aliases)")]));
        }

        Ok(Outcome::Builtin(
            entries
                .into_iter()
                .map(|(name, target)| Line::normal(format!("{} -> {}", name, target)))
                .collect(),
        ))
    }

    /// Replace a leading alias in the head token (`name` or `name/rest`).
    /// The rest of the line is kept exactly as typed.
    fn substitute_alias(&self, line: &CommandLine<'_>) -> Result<String> {
        let raw = line.raw();
        let Some(head) = line.head() else {
            return Ok(raw.to_string());
        };

        let (name, tail) = match head.find(is_separator) {
            Some(idx) => head.split_at(idx),
            None => (head, ""),
        };

        if name.is_empty() || !self.aliases.has(name)? {
            return Ok(raw.to_string());
        }

        let target = self.variables.expand(&self.aliases.get(name)?);
        let rewritten = format!("{}{}{}", target, tail, line.rest());
        debug!(alias = name, command = %rewritten, "alias substituted");
        Ok(rewritten)
    }
}

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}
