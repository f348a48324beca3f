//! Integration tests for layered Settings loading.
//!
//! Every test runs the `guessing-game` binary with `XDG_CONFIG_HOME` pointed at a
//! temp dir and all `STDIO_DEMOS_*` variables cleared, so the machine's own
//! config never leaks in.

use std::fs;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use rstest::{fixture, rstest};
use tempfile::TempDir;

use stdio_demos::config::Settings;
use stdio_demos::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[fixture]
fn config_dir() -> TempDir {
    TempDir::new().unwrap()
}

fn guessing_game(xdg: &Path, args: &[&str], envs: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_guessing-game"))
        .env("XDG_CONFIG_HOME", xdg)
        .env_remove("STDIO_DEMOS_CONFIG")
        .env_remove("STDIO_DEMOS_GUESS__MIN")
        .env_remove("STDIO_DEMOS_GUESS__MAX")
        .envs(envs.iter().copied())
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute guessing-game")
}

/// `config show` with an optional explicit file; returns the parsed settings.
fn show(xdg: &Path, explicit: Option<&Path>, envs: &[(&str, &str)]) -> Settings {
    let mut args = Vec::new();
    if let Some(path) = explicit {
        args.extend(["--config", path.to_str().unwrap()]);
    }
    args.extend(["config", "show"]);

    let output = guessing_game(xdg, &args, envs);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    toml::from_str(&String::from_utf8_lossy(&output.stdout)).expect("parse shown config")
}

#[rstest]
fn given_no_config_files_when_show_then_defaults(config_dir: TempDir) {
    let shown = show(config_dir.path(), None, &[]);

    assert_eq!(shown, Settings::default());
}

#[rstest]
fn given_explicit_file_with_range_when_show_then_overrides_defaults(config_dir: TempDir) {
    let path = config_dir.path().join("demos.toml");
    fs::write(&path, "[guess]\nmin = 10\nmax = 20\n").unwrap();

    let shown = show(config_dir.path(), Some(&path), &[]);

    assert_eq!((shown.guess.min, shown.guess.max), (10, 20));
    let range = shown.guess_range().unwrap();
    assert!(range.contains(10) && range.contains(20) && !range.contains(21));
}

#[rstest]
fn given_explicit_file_with_only_max_when_show_then_keeps_default_min(config_dir: TempDir) {
    let path = config_dir.path().join("demos.toml");
    fs::write(&path, "[guess]\nmax = 10\n").unwrap();

    let shown = show(config_dir.path(), Some(&path), &[]);

    assert_eq!((shown.guess.min, shown.guess.max), (1, 10));
}

#[cfg(target_os = "linux")]
#[rstest]
fn given_global_and_explicit_files_when_show_then_explicit_wins_per_key(config_dir: TempDir) {
    let global_dir = config_dir.path().join("stdio-demos");
    fs::create_dir_all(&global_dir).unwrap();
    fs::write(
        global_dir.join("stdio-demos.toml"),
        "[guess]\nmin = 5\nmax = 50\n",
    )
    .unwrap();

    let global_only = show(config_dir.path(), None, &[]);
    assert_eq!((global_only.guess.min, global_only.guess.max), (5, 50));

    let path = config_dir.path().join("demos.toml");
    fs::write(&path, "[guess]\nmax = 40\n").unwrap();
    let layered = show(config_dir.path(), Some(&path), &[]);
    assert_eq!((layered.guess.min, layered.guess.max), (5, 40));
}

#[rstest]
fn given_config_file_and_env_when_show_then_env_wins(config_dir: TempDir) {
    let path = config_dir.path().join("demos.toml");
    fs::write(&path, "[guess]\nmin = 3\nmax = 30\n").unwrap();

    let shown = show(
        config_dir.path(),
        Some(&path),
        &[("STDIO_DEMOS_GUESS__MAX", "33")],
    );

    assert_eq!((shown.guess.min, shown.guess.max), (3, 33));
}

#[rstest]
#[case::missing(None)]
#[case::malformed(Some("[guess\nmin = "))]
fn given_unusable_explicit_file_when_starting_then_exits_config_error(
    config_dir: TempDir,
    #[case] contents: Option<&str>,
) {
    let path = config_dir.path().join("demos.toml");
    if let Some(contents) = contents {
        fs::write(&path, contents).unwrap();
    }

    let output = guessing_game(config_dir.path(), &["--config", path.to_str().unwrap()], &[]);

    assert_eq!(output.status.code(), Some(78));
    assert!(String::from_utf8_lossy(&output.stderr).contains("config error"));
    assert!(output.stdout.is_empty());
}

#[rstest]
fn given_inverted_range_in_file_when_starting_then_exits_config_error(config_dir: TempDir) {
    let path = config_dir.path().join("demos.toml");
    fs::write(&path, "[guess]\nmin = 50\nmax = 5\n").unwrap();

    let output = guessing_game(config_dir.path(), &["--config", path.to_str().unwrap()], &[]);

    assert_eq!(output.status.code(), Some(78));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid guess range"));
}

#[rstest]
fn given_template_subcommand_when_run_then_prints_commented_template(config_dir: TempDir) {
    let output = guessing_game(config_dir.path(), &["config", "template"], &[]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("{}\n", Settings::template())
    );
}
