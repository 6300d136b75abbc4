//! Fixed path variables (`$DISK`, `$HOME`, `$START`).
//!
//! The set is computed once at startup and never changes for the session.
//! Substitution is plain substring replacement applied token by token in
//! declared order, so a token that is a prefix of a later one wins.

use std::path::{Component, Path};

/// Prefix component of the launch directory (`C:` on Windows, empty on Unix).
pub const DISK_TOKEN: &str = "$DISK";
/// User home directory.
pub const HOME_TOKEN: &str = "$HOME";
/// Directory pathshell was launched from.
pub const START_TOKEN: &str = "$START";

/// Ordered token → replacement table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableExpander {
    variables: Vec<(String, String)>,
}

impl VariableExpander {
    /// Create an empty expander.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the built-in set for a session launched in `start_dir`.
    ///
    /// `home` is normally `std::env::var("HOME")`; `$HOME` is omitted when it is `None`.
    pub fn builtin(start_dir: &Path, home: Option<String>) -> Self {
        let mut expander = Self::new().with(DISK_TOKEN, disk_of(start_dir));
        if let Some(home) = home {
            expander = expander.with(HOME_TOKEN, home);
        }
        expander.with(START_TOKEN, start_dir.to_string_lossy())
    }

    /// Build the built-in set from the process environment.
    pub fn from_env(start_dir: &Path) -> Self {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .ok()
            .filter(|h| !h.is_empty());
        Self::builtin(start_dir, home)
    }

    /// Append a token. Tokens are applied in the order they were added;
    /// an empty token is ignored.
    pub fn with(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        let token = token.into();
        if !token.is_empty() {
            self.variables.push((token, value.into()));
        }
        self
    }

    /// Replace every occurrence of every token in `path`.
    pub fn expand(&self, path: &str) -> String {
        self.variables
            .iter()
            .fold(path.to_string(), |acc, (token, value)| {
                acc.replace(token.as_str(), value)
            })
    }

    /// Iterate over `(token, replacement)` pairs in application order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables
            .iter()
            .map(|(t, v)| (t.as_str(), v.as_str()))
    }

    /// Number of registered tokens.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Check if no tokens are registered.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

fn disk_of(path: &Path) -> String {
    match path.components().next() {
        Some(Component::Prefix(prefix)) => prefix.as_os_str().to_string_lossy().into_owned(),
        _ => String::new(),
    }
}
