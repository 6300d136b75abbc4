//! Command-line interface for pathshell.
//!
//! Uses lexopt for minimal binary size overhead.

use std::ffi::OsString;
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Clone, Default)]
pub struct Args {
    /// Path to configuration file.
    pub config: Option<PathBuf>,
    /// Alias file (overrides config file).
    pub alias_file: Option<PathBuf>,
    /// Starting directory instead of the process working directory.
    pub dir: Option<PathBuf>,
    /// Interpret this single line and exit.
    pub exec: Option<String>,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: Option<String>,
    /// Disable colored output.
    pub no_color: bool,
    /// Show version and exit.
    pub version: bool,
    /// Show help and exit.
    pub help: bool,
}

/// Parse command-line arguments.
pub fn parse_args() -> Result<Args, ArgsError> {
    parse_args_from(std::env::args_os())
}

/// Parse arguments from an iterator (for testing).
pub fn parse_args_from<I>(args: I) -> Result<Args, ArgsError>
where
    I: IntoIterator<Item = OsString>,
{
    use lexopt::prelude::*;

    let mut result = Args::default();
    let mut parser = lexopt::Parser::from_iter(args);

    while let Some(arg) = parser.next()? {
        match arg {
            Short('h') | Long("help") => {
                result.help = true;
            }
            Short('V') | Long("version") => {
                result.version = true;
            }
            Short('c') | Long("config") => {
                result.config = Some(parser.value()?.parse()?);
            }
            Short('a') | Long("alias-file") => {
                result.alias_file = Some(parser.value()?.parse()?);
            }
            Short('d') | Long("dir") => {
                result.dir = Some(parser.value()?.parse()?);
            }
            Short('e') | Long("exec") => {
                let value: String = parser.value()?.parse()?;
                if value.trim().is_empty() {
                    return Err(ArgsError::InvalidValue("exec", value));
                }
                result.exec = Some(value);
            }
            Short('l') | Long("log-level") => {
                let value: String = parser.value()?.parse()?;
                if !matches!(
                    value.as_str(),
                    "error" | "warn" | "info" | "debug" | "trace"
                ) {
                    return Err(ArgsError::InvalidValue("log-level", value));
                }
                result.log_level = Some(value);
            }
            Long("no-color") => {
                result.no_color = true;
            }
            Value(val) => {
                return Err(ArgsError::UnexpectedArgument(val.to_string_lossy().into()));
            }
            _ => return Err(arg.unexpected().into()),
        }
    }

    Ok(result)
}

/// Print help message.
pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        r#"pathshell {version}
Interactive shell front-end with a directory cursor and persisted path aliases

USAGE:
    pathshell [OPTIONS]

OPTIONS:
    -c, --config <FILE>      Path to configuration file (JSON)
    -a, --alias-file <FILE>  Alias table file [default: pathshell-aliases.json]
    -d, --dir <DIR>          Start in DIR instead of the current directory
    -e, --exec <LINE>        Interpret a single line and exit
    -l, --log-level <LVL>    Log level (error, warn, info, debug, trace)
        --no-color           Disable colored output
    -h, --help               Print help
    -V, --version            Print version

BUILT-INS:
    cd <path>                        Move the directory cursor
    ls [args]                        List the current directory
    clear                            Clear the scrollback
    vars                             Show path variables ($DISK, $HOME, $START)
    aliases                          Show saved aliases
    custom path <source> <alias>     Save <source> under <alias>

ENVIRONMENT VARIABLES:
    PATHSHELL_ALIAS_FILE     Alias file (overrides config)
    PATHSHELL_SHELL          Shell invocation, e.g. "bash -c" (overrides config)
    PATHSHELL_LOG_LEVEL      Log level (overrides config)
    RUST_LOG                 Alternative log level setting
    NO_COLOR                 Disable colored output

EXAMPLES:
    # Start in the current directory
    pathshell

    # Keep aliases in your home directory
    pathshell -a ~/.pathshell-aliases.json

    # Run one line through the interpreter
    pathshell -e "custom path ./src srcdir"
"#
    );
}

/// Print version.
pub fn print_version() {
    println!("pathshell {}", env!("CARGO_PKG_VERSION"));
}

/// Argument parsing errors.
#[derive(Debug)]
pub enum ArgsError {
    /// Lexopt parsing error.
    Lexopt(lexopt::Error),
    /// Invalid argument value.
    InvalidValue(&'static str, String),
    /// Unexpected positional argument.
    UnexpectedArgument(String),
}

impl std::fmt::Display for ArgsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexopt(e) => write!(f, "{}", e),
            Self::InvalidValue(name, value) => {
                write!(f, "invalid value for --{}: '{}'", name, value)
            }
            Self::UnexpectedArgument(arg) => {
                write!(f, "unexpected argument: '{}'", arg)
            }
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<lexopt::Error> for ArgsError {
    fn from(e: lexopt::Error) -> Self {
        Self::Lexopt(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(args: &[&str]) -> Vec<OsString> {
        std::iter::once("pathshell")
            .chain(args.iter().copied())
            .map(OsString::from)
            .collect()
    }

    #[test]
    fn test_default_args() {
        let result = parse_args_from(args(&[])).unwrap();
        assert!(result.config.is_none());
        assert!(result.alias_file.is_none());
        assert!(result.exec.is_none());
        assert!(!result.no_color);
    }

    #[test]
    fn test_alias_file_and_dir() {
        let result =
            parse_args_from(args(&["-a", "/tmp/a.json", "--dir", "/srv"])).unwrap();
        assert_eq!(result.alias_file, Some(PathBuf::from("/tmp/a.json")));
        assert_eq!(result.dir, Some(PathBuf::from("/srv")));
    }

    #[test]
    fn test_exec_keeps_spaces() {
        let result = parse_args_from(args(&["-e", "custom path ./src srcdir"])).unwrap();
        assert_eq!(result.exec.as_deref(), Some("custom path ./src srcdir"));
    }

    #[test]
    fn test_exec_blank_rejected() {
        assert!(parse_args_from(args(&["--exec", "  "])).is_err());
    }

    #[test]
    fn test_help_and_version_flags() {
        assert!(parse_args_from(args(&["-h"])).unwrap().help);
        assert!(parse_args_from(args(&["--help"])).unwrap().help);
        assert!(parse_args_from(args(&["-V"])).unwrap().version);
        assert!(parse_args_from(args(&["--version"])).unwrap().version);
    }

    #[test]
    fn test_log_level() {
        let result = parse_args_from(args(&["-l", "debug"])).unwrap();
        assert_eq!(result.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_invalid_log_level() {
        let err = parse_args_from(args(&["-l", "chatty"])).unwrap_err();
        assert!(err.to_string().contains("log-level"));
    }

    #[test]
    fn test_unexpected_positional() {
        let err = parse_args_from(args(&["stray"])).unwrap_err();
        assert!(matches!(err, ArgsError::UnexpectedArgument(_)));
    }

    #[test]
    fn test_missing_value() {
        assert!(parse_args_from(args(&["--config"])).is_err());
    }
}
