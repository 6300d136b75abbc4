//! CLI integration tests.
//!
//! These tests verify the CLI argument parsing and configuration loading.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use pathshell::cli::parse_args_from;
use pathshell::config::Config;

fn args(args: &[&str]) -> Vec<OsString> {
    std::iter::once("pathshell")
        .chain(args.iter().copied())
        .map(OsString::from)
        .collect()
}

// ============================================================================
// CLI Argument Tests
// ============================================================================

#[test]
fn test_cli_defaults() {
    let result = parse_args_from(args(&[])).unwrap();

    assert!(result.config.is_none());
    assert!(result.alias_file.is_none());
    assert!(result.dir.is_none());
    assert!(result.exec.is_none());
    assert!(!result.help);
    assert!(!result.version);
}

#[test]
fn test_cli_full_options() {
    let result = parse_args_from(args(&[
        "-c",
        "/etc/pathshell.json",
        "-a",
        "/home/me/.aliases.json",
        "-d",
        "/srv",
        "-l",
        "info",
        "--no-color",
    ]))
    .unwrap();

    assert_eq!(result.config, Some(PathBuf::from("/etc/pathshell.json")));
    assert_eq!(
        result.alias_file,
        Some(PathBuf::from("/home/me/.aliases.json"))
    );
    assert_eq!(result.dir, Some(PathBuf::from("/srv")));
    assert_eq!(result.log_level.as_deref(), Some("info"));
    assert!(result.no_color);
}

#[test]
fn test_cli_unknown_flag() {
    assert!(parse_args_from(args(&["--frobnicate"])).is_err());
}

// ============================================================================
// Configuration Loading Tests
// ============================================================================

#[test]
fn test_config_load_layers_file_then_args() {
    let json = r#"{
        "aliases": { "file": "from-file.json" },
        "display": { "scrollback_lines": 10 },
        "logging": { "level": "error" }
    }"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    let path = file.path().to_string_lossy().into_owned();

    let parsed = parse_args_from(args(&["-c", &path, "-a", "from-args.json"])).unwrap();
    let config = Config::load(&parsed).unwrap();

    assert_eq!(config.aliases.file, PathBuf::from("from-args.json"));
    assert_eq!(config.display.scrollback_lines, 10);
}

#[test]
fn test_config_load_missing_file() {
    let parsed = parse_args_from(args(&["-c", "/definitely/not/here.json"])).unwrap();
    let err = Config::load(&parsed).unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_config_load_rejects_empty_token() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{ "variables": [ { "token": "", "value": "/x" } ] }"#)
        .unwrap();
    let path = file.path().to_string_lossy().into_owned();

    let parsed = parse_args_from(args(&["-c", &path])).unwrap();
    assert!(Config::load(&parsed).is_err());
}

#[test]
fn test_config_serialization_round_trip() {
    let config = Config::default();
    let json = serde_json::to_string_pretty(&config).unwrap();
    assert!(json.contains("\"aliases\""));
    assert!(json.contains("\"scrollback_lines\""));

    let back: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(back.aliases.file, config.aliases.file);
}

#[test]
fn test_config_variables_extend_builtins() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{ "variables": [ { "token": "$REPO", "value": "/code/repo" } ] }"#)
        .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    let vars = config.variables(Path::new("/start"));

    let tokens: Vec<_> = vars.iter().map(|(t, _)| t).collect();
    assert_eq!(tokens.first(), Some(&"$DISK"));
    assert_eq!(tokens.last(), Some(&"$REPO"));
    assert_eq!(vars.expand("$START/x"), format!("{}/x", Path::new("/start").display()));
}
