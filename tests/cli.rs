//! End-to-end tests for the `git-profile` binary.
//!
//! Each test gets its own base directory (via GIT_PROFILE_HOME) and its own
//! fake home, so the real ~/.gitconfig is never touched. The config record is
//! seeded up front because first-run setup needs an interactive terminal.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("home")).unwrap();
        fs::create_dir_all(dir.path().join("base")).unwrap();
        Self { dir }
    }

    /// A sandbox whose config record already exists
    fn seeded(current: &str) -> Self {
        let sandbox = Self::new();
        fs::write(
            sandbox.config_file(),
            format!(r#"{{"preferredTextEditor":"true","currentProfile":"{current}"}}"#),
        )
        .unwrap();
        sandbox
    }

    fn base(&self) -> PathBuf {
        self.dir.path().join("base")
    }

    fn config_file(&self) -> PathBuf {
        self.base().join("config.json")
    }

    fn profile(&self, name: &str) -> PathBuf {
        self.base().join("profiles").join(format!("{name}.gitconfig"))
    }

    fn gitconfig(&self) -> PathBuf {
        self.dir.path().join("home").join(".gitconfig")
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_git-profile"))
            .args(args)
            .env("GIT_PROFILE_HOME", self.base())
            .env("HOME", self.dir.path().join("home"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .stdin(Stdio::null())
            .output()
            .unwrap()
    }

    fn current_profile(&self) -> String {
        let record: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(self.config_file()).unwrap()).unwrap();
        record["currentProfile"].as_str().unwrap().to_string()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn help_works_before_setup() {
    let sandbox = Sandbox::new();

    for token in ["help", "--help", "/?", "unknown-command"] {
        let output = sandbox.run(&[token]);
        assert!(output.status.success(), "{token}: {}", stderr(&output));
        assert!(stdout(&output).contains("Usage: git-profile"));
    }
    assert!(!sandbox.config_file().exists());
}

#[test]
fn create_then_list_prints_exactly_the_name() {
    let sandbox = Sandbox::seeded("work");

    let output = sandbox.run(&["create", "work"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(sandbox.profile("work").is_file());

    let output = sandbox.run(&["list"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "work\n");
}

#[test]
fn duplicate_create_is_reported() {
    let sandbox = Sandbox::seeded("work");

    assert!(sandbox.run(&["CREATE", "Work"]).status.success());
    assert!(sandbox.profile("work").is_file());

    let output = sandbox.run(&["create", "work"]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains("already exists"));
}

#[test]
fn switch_replaces_gitconfig_and_show_reports_it() {
    let sandbox = Sandbox::seeded("work");
    assert!(sandbox.run(&["create", "work"]).status.success());
    assert!(sandbox.run(&["create", "home"]).status.success());
    fs::write(sandbox.profile("work"), "[user]\n\tname = Work\n").unwrap();
    fs::write(sandbox.profile("home"), "[user]\n\tname = Home\n").unwrap();
    fs::write(sandbox.gitconfig(), "[user]\n\tname = Work\n").unwrap();

    let output = sandbox.run(&["switch", "home"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Switched to profile home"));

    assert_eq!(
        fs::read_to_string(sandbox.gitconfig()).unwrap(),
        "[user]\n\tname = Home\n"
    );
    assert_eq!(sandbox.current_profile(), "home");

    let output = sandbox.run(&["show"]);
    assert!(stdout(&output).starts_with("Current profile: home\n"));
    let output = sandbox.run(&[]);
    assert!(stdout(&output).starts_with("Current profile: home\n"));
}

#[test]
fn switch_failures_leave_state_alone() {
    let sandbox = Sandbox::seeded("work");

    let output = sandbox.run(&["switch", "ghost"]);
    assert!(!output.status.success());
    assert!(stdout(&output).starts_with("ERROR Profile 'ghost' does not exist"));
    assert!(stderr(&output).is_empty());

    assert!(sandbox.run(&["create", "home"]).status.success());
    let output = sandbox.run(&["switch", "home"]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains(".gitconfig"));

    assert_eq!(sandbox.current_profile(), "work");
    assert!(!sandbox.gitconfig().exists());
}

#[test]
fn delete_removes_profile_from_list() {
    let sandbox = Sandbox::seeded("work");
    assert!(sandbox.run(&["create", "work"]).status.success());
    assert!(sandbox.run(&["create", "home"]).status.success());

    let output = sandbox.run(&["delete", "work"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Deleted profile 'work'"));
    assert_eq!(stdout(&sandbox.run(&["list"])), "home\n");

    let output = sandbox.run(&["delete", "work"]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains("does not exist"));
}

#[test]
fn malformed_config_aborts() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.config_file(), "{oops").unwrap();

    let output = sandbox.run(&["list"]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains("Failed parsing config file"));
}
