//! Configuration management for pathshell.
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. Configuration file (JSON)
//! 4. Default values

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::alias::DEFAULT_ALIAS_FILE;
use crate::cli::Args;
use crate::execution::HostShell;
use crate::output::DEFAULT_SCROLLBACK_LINES;
use crate::variables::VariableExpander;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Alias table settings.
    pub aliases: AliasSection,
    /// Host shell settings.
    pub shell: ShellSection,
    /// Display settings.
    pub display: DisplaySection,
    /// Extra path variables, applied after the built-in ones.
    pub variables: Vec<VariableEntry>,
    /// Logging configuration.
    pub logging: LoggingSection,
}

/// Alias table section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AliasSection {
    /// Alias file; relative paths are taken from the launch directory.
    pub file: PathBuf,
}

impl Default for AliasSection {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_ALIAS_FILE),
        }
    }
}

/// Host shell section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellSection {
    /// Shell invocation such as `"bash -c"`; platform default when unset.
    pub program: Option<String>,
}

/// Display section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    /// Lines kept in the scrollback (0 = unbounded).
    pub scrollback_lines: usize,
    /// Colorize error and warning lines.
    pub color: bool,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            scrollback_lines: DEFAULT_SCROLLBACK_LINES,
            color: true,
        }
    }
}

/// A user-defined path variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableEntry {
    /// Literal text to replace, e.g. `"$WORK"`.
    pub token: String,
    /// Replacement.
    pub value: String,
}

/// Logging configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level (error, warn, info, debug, trace).
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Json)
    }

    /// Apply environment variable overrides.
    pub fn apply_env(&mut self) {
        if let Ok(file) = std::env::var("PATHSHELL_ALIAS_FILE") {
            if !file.is_empty() {
                self.aliases.file = PathBuf::from(file);
            }
        }

        if let Ok(shell) = std::env::var("PATHSHELL_SHELL") {
            if !shell.trim().is_empty() {
                self.shell.program = Some(shell);
            }
        }

        if std::env::var_os("NO_COLOR").is_some() {
            self.display.color = false;
        }

        if let Ok(level) = std::env::var("PATHSHELL_LOG_LEVEL") {
            self.logging.level = level;
        } else if let Ok(level) = std::env::var("RUST_LOG") {
            self.logging.level = level;
        }
    }

    /// Apply CLI argument overrides.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(ref file) = args.alias_file {
            self.aliases.file = file.clone();
        }

        if args.no_color {
            self.display.color = false;
        }

        if let Some(ref level) = args.log_level {
            self.logging.level = level.clone();
        }
    }

    /// Load configuration with full priority chain.
    ///
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(ref path) = args.config {
            config = Config::from_file(path)?;
        }

        config.apply_env();
        config.apply_args(args);
        config.validate()?;

        Ok(config)
    }

    /// Reject values that would break the session later.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.aliases.file.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("aliases.file is empty".to_string()));
        }
        if let Some(entry) = self.variables.iter().find(|v| v.token.is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "variable with value '{}' has an empty token",
                entry.value
            )));
        }
        Ok(())
    }

    /// Alias file location, anchored at `start_dir` when relative.
    pub fn alias_file(&self, start_dir: &Path) -> PathBuf {
        if self.aliases.file.is_absolute() {
            self.aliases.file.clone()
        } else {
            start_dir.join(&self.aliases.file)
        }
    }

    /// Host shell to forward commands to.
    pub fn host_shell(&self) -> HostShell {
        self.shell
            .program
            .as_deref()
            .map(HostShell::from_invocation)
            .unwrap_or_default()
    }

    /// Built-in variables for `start_dir` followed by the configured ones.
    pub fn variables(&self, start_dir: &Path) -> VariableExpander {
        self.variables
            .iter()
            .fold(VariableExpander::from_env(start_dir), |vars, entry| {
                vars.with(entry.token.clone(), entry.value.clone())
            })
    }

    /// Get the log level filter string.
    pub fn log_filter(&self) -> &str {
        &self.logging.level
    }
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading config file.
    Io(std::io::Error),
    /// JSON parsing error.
    Json(serde_json::Error),
    /// A value that parsed but cannot be used.
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read config file: {}", e),
            Self::Json(e) => write!(f, "failed to parse config file: {}", e),
            Self::Invalid(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
