//! pathshell binary entry point.

use std::io;
use std::path::Path;
use std::process::ExitCode;

use pathshell::cli::{self, Args};
use pathshell::config::Config;
use pathshell::{
    logging, CommandInterpreter, FileAliasStore, PathKind, PathResolver, SessionContext, Shell,
    TerminalDisplay,
};
use tracing::info;

fn main() -> ExitCode {
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("Try 'pathshell --help' for more information.");
            return ExitCode::from(2);
        }
    };

    if args.help {
        cli::print_help();
        return ExitCode::SUCCESS;
    }
    if args.version {
        cli::print_version();
        return ExitCode::SUCCESS;
    }

    let config = match Config::load(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    logging::init_with_level(config.log_filter()).ok();

    match run(&args, &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, config: &Config) -> pathshell::Result<ExitCode> {
    let launch_dir = std::env::current_dir()?;
    let context = match &args.dir {
        Some(dir) => start_context(&launch_dir, dir)?,
        None => SessionContext::new(&launch_dir),
    };

    let alias_file = config.alias_file(&launch_dir);
    info!(
        "pathshell v{} in {} (aliases: {})",
        env!("CARGO_PKG_VERSION"),
        context.current_dir().display(),
        alias_file.display()
    );

    let interpreter = CommandInterpreter::new(
        FileAliasStore::new(alias_file),
        config.variables(context.current_dir()),
    );
    let display = TerminalDisplay::new(config.display.scrollback_lines, config.display.color);
    let mut shell = Shell::new(interpreter, config.host_shell(), display, context);

    if let Some(line) = &args.exec {
        let outcome = shell.submit(line);
        return Ok(if outcome.is_failure() {
            ExitCode::FAILURE
        } else {
            ExitCode::from(shell.context().exit_status())
        });
    }

    let stdin = io::stdin();
    shell.run(stdin.lock(), |display, prompt| {
        if display.is_interactive() {
            display.show_prompt(prompt);
        }
    })?;
    Ok(ExitCode::SUCCESS)
}

fn start_context(launch_dir: &Path, dir: &Path) -> pathshell::Result<SessionContext> {
    let resolver = PathResolver::new();
    let resolved = resolver.resolve(launch_dir, &dir.to_string_lossy());
    match resolver.classify(&resolved) {
        PathKind::Directory => Ok(SessionContext::new(resolved)),
        PathKind::File => Err(pathshell::PathShellError::NotADirectory(
            dir.display().to_string(),
        )),
        PathKind::Missing => Err(pathshell::PathShellError::PathNotFound(
            dir.display().to_string(),
        )),
    }
}
