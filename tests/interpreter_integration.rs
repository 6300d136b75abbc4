//! End-to-end interpreter tests.
//!
//! These drive a [`Shell`] backed by a real alias file in a temp directory.
//! Tests that spawn the host shell are Unix-only.

use std::fs;
use std::path::{Path, PathBuf};

use pathshell::{
    AliasStore, CommandInterpreter, FileAliasStore, HostShell, Line, Outcome, PathShellError,
    Scrollback, SessionContext, Shell, Style, VariableExpander,
};
use tempfile::TempDir;

type TestShell = Shell<FileAliasStore, HostShell, Scrollback>;

struct Fixture {
    dir: TempDir,
    alias_file: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/nested")).unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("src/list"), "#!/bin/sh\necho listed \"$@\"\n").unwrap();
        fs::write(dir.path().join("README"), "readme").unwrap();

        let alias_file = dir.path().join("state/aliases.json");
        Self { dir, alias_file }
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn store(&self) -> FileAliasStore {
        FileAliasStore::new(&self.alias_file)
    }

    fn shell(&self) -> TestShell {
        let variables = VariableExpander::builtin(self.root(), Some("/home/tester".into()));
        Shell::new(
            CommandInterpreter::new(self.store(), variables),
            HostShell::default(),
            Scrollback::new(0),
            SessionContext::new(self.root()),
        )
    }
}

fn output_after_echo(shell: &TestShell) -> Vec<Line> {
    shell.display().lines().skip(1).cloned().collect()
}

// ============================================================================
// Directory cursor
// ============================================================================

#[test]
fn test_cd_round_trip() {
    let fx = Fixture::new();
    let mut shell = fx.shell();

    assert!(matches!(shell.submit("cd src/nested"), Outcome::DirectoryChanged(_)));
    assert_eq!(shell.context().current_dir(), fx.root().join("src/nested"));
    // Silent success: only the echoed input
    assert_eq!(shell.display().len(), 1);

    shell.submit("cd ../../docs");
    assert_eq!(shell.context().current_dir(), fx.root().join("docs"));

    shell.submit("cd $START");
    assert_eq!(shell.context().current_dir(), fx.root());
}

#[test]
fn test_cd_failures_leave_directory_alone() {
    let fx = Fixture::new();
    let mut shell = fx.shell();

    for (line, expected) in [("cd missing", "path not valid"), ("cd README", "cannot move into a file")] {
        let before = shell.display().len();
        shell.submit(line);

        let new_lines: Vec<_> = shell.display().lines().skip(before + 1).collect();
        assert_eq!(new_lines.len(), 1, "{}", line);
        assert_eq!(new_lines[0].style, Style::Error);
        assert!(new_lines[0].text.contains(expected));
        assert_eq!(shell.context().current_dir(), fx.root());
    }
}

// ============================================================================
// Aliases
// ============================================================================

#[test]
fn test_custom_path_persists_to_file() {
    let fx = Fixture::new();
    let mut shell = fx.shell();

    shell.submit("custom path ./src srcdir");

    // A fresh store over the same file sees the alias
    let stored = fx.store().get("srcdir").unwrap();
    assert_eq!(PathBuf::from(&stored), fx.root().join("src"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&fx.alias_file).unwrap()).unwrap();
    assert_eq!(json["srcdir"], serde_json::Value::String(stored));
}

#[test]
fn test_custom_path_twice_overwrites() {
    let fx = Fixture::new();
    let mut shell = fx.shell();

    shell.submit("custom path src here");
    shell.submit("custom path docs here");

    let entries = fx.store().entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(PathBuf::from(&entries[0].1), fx.root().join("docs"));
}

#[test]
fn test_custom_path_missing_leaves_table_unchanged() {
    let fx = Fixture::new();
    fx.store().put("keep", "/kept").unwrap();
    let mut shell = fx.shell();

    shell.submit("custom path ./nope gone");

    let last = shell.display().last().unwrap();
    assert_eq!(last.style, Style::Error);
    assert!(last.text.contains("./nope"));
    assert_eq!(
        fx.store().entries().unwrap(),
        vec![("keep".to_string(), "/kept".to_string())]
    );
}

#[test]
fn test_custom_path_with_two_tokens_is_usage_error() {
    let fx = Fixture::new();
    let mut shell = fx.shell();

    let outcome = shell.submit("custom path");
    assert!(matches!(outcome, Outcome::Failed(PathShellError::Usage(_))));
    assert_eq!(output_after_echo(&shell).len(), 1);
}

#[test]
fn test_corrupt_alias_file_reported_once() {
    let fx = Fixture::new();
    fs::create_dir_all(fx.alias_file.parent().unwrap()).unwrap();
    fs::write(&fx.alias_file, "not json").unwrap();
    let mut shell = fx.shell();

    let outcome = shell.submit("custom path src s");
    assert!(matches!(outcome, Outcome::Failed(PathShellError::Persistence(_))));
    assert_eq!(output_after_echo(&shell).len(), 1);

    // Session survives and still accepts built-ins
    assert!(matches!(shell.submit("cd docs"), Outcome::DirectoryChanged(_)));
}

#[test]
fn test_aliases_survive_new_session() {
    let fx = Fixture::new();
    fx.shell().submit("custom path docs d");

    let mut second = fx.shell();
    second.submit("aliases");
    let lines = output_after_echo(&second);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].text.starts_with("d -> "));
}

#[test]
fn test_vars_lists_builtins() {
    let fx = Fixture::new();
    let mut shell = fx.shell();

    shell.submit("vars");
    let texts: Vec<_> = output_after_echo(&shell).into_iter().map(|l| l.text).collect();
    assert_eq!(texts.len(), 3);
    assert!(texts[0].starts_with("$DISK = "));
    assert_eq!(texts[1], "$HOME = /home/tester");
    assert_eq!(texts[2], format!("$START = {}", fx.root().display()));
}

// ============================================================================
// Forwarding through the host shell
// ============================================================================

#[cfg(unix)]
#[test]
fn test_alias_rewrites_forwarded_command() {
    let fx = Fixture::new();
    let mut shell = fx.shell();

    shell.submit("custom path ./src srcdir");
    let outcome = shell.submit("srcdir/list a   b");

    let expected = format!("{}/list a   b", fx.root().join("src").display());
    assert_eq!(outcome.forwarded(), Some(expected.as_str()));
}

#[cfg(unix)]
#[test]
fn test_alias_prefix_backslash() {
    let fx = Fixture::new();
    let mut shell = fx.shell();

    shell.submit("custom path ./src srcdir");
    let outcome = shell.submit("srcdir\\list --all");

    let expected = format!("{}\\list --all", fx.root().join("src").display());
    assert_eq!(outcome.forwarded(), Some(expected.as_str()));
}

#[test]
fn test_corrupt_alias_file_blocks_forwarding_with_one_line() {
    let fx = Fixture::new();
    let mut shell = fx.shell();
    shell.submit("custom path ./src srcdir");
    fs::write(&fx.alias_file, "{ truncated").unwrap();

    let before = shell.display().len();
    let outcome = shell.submit("srcdir/list a");
    assert!(matches!(outcome, Outcome::Failed(PathShellError::Persistence(_))));

    let new_lines: Vec<_> = shell.display().lines().skip(before + 1).collect();
    assert_eq!(new_lines.len(), 1);
    assert_eq!(new_lines[0].style, Style::Error);
    assert!(shell.context().last_command().is_none());
}

#[cfg(unix)]
#[test]
fn test_forwarded_output_and_errors() {
    let fx = Fixture::new();
    let mut shell = fx.shell();

    shell.submit("echo visible; echo hidden >&2");
    let lines = output_after_echo(&shell);
    assert_eq!(
        lines,
        vec![Line::normal("visible"), Line::error("hidden")]
    );
}

#[cfg(unix)]
#[test]
fn test_forwarded_command_runs_in_cursor_directory() {
    let fx = Fixture::new();
    let mut shell = fx.shell();

    shell.submit("cd docs");
    shell.submit("pwd");

    let last = shell.display().last().unwrap();
    assert_eq!(
        fs::canonicalize(&last.text).unwrap(),
        fs::canonicalize(fx.root().join("docs")).unwrap()
    );
}

#[cfg(unix)]
#[test]
fn test_ls_lists_current_directory() {
    let fx = Fixture::new();
    let mut shell = fx.shell();

    shell.submit("ls");
    let texts: Vec<_> = output_after_echo(&shell).into_iter().map(|l| l.text).collect();
    assert!(texts.contains(&"README".to_string()));
    assert!(texts.contains(&"docs".to_string()));
}

#[cfg(unix)]
#[test]
fn test_unknown_program_does_not_end_session() {
    let fx = Fixture::new();
    let mut shell = fx.shell();

    shell.submit("definitely-not-a-real-program-4821");
    let lines = output_after_echo(&shell);
    assert!(!lines.is_empty());
    assert!(lines.iter().all(|l| l.style == Style::Error));
    assert_eq!(shell.context().last_exit_code(), Some(127));

    assert!(matches!(shell.submit("cd src"), Outcome::DirectoryChanged(_)));
}

#[test]
fn test_launch_failure_is_caught() {
    let fx = Fixture::new();
    let mut shell = Shell::new(
        CommandInterpreter::new(fx.store(), VariableExpander::new()),
        HostShell::from_invocation("/no/such/shell -c"),
        Scrollback::new(0),
        SessionContext::new(fx.root()),
    );

    let outcome = shell.submit("echo hi");
    assert!(outcome.forwarded().is_some());

    let lines = output_after_echo(&shell);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].style, Style::Error);
    assert!(shell.context().last_exit_code().is_none());
}

#[test]
fn test_clear_produces_no_output() {
    let fx = Fixture::new();
    let mut shell = fx.shell();

    shell.submit("vars");
    shell.submit("clear");
    assert!(shell.display().is_empty());
}
