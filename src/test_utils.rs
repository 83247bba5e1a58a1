//! Test utilities shared across test modules
//!
//! This module provides common helper functions for testing, avoiding duplication
//! across multiple test suites.

use anyhow::{Result, bail};
use std::collections::VecDeque;
use tempfile::TempDir;

use crate::config::Config;
use crate::paths::Paths;
use crate::setup::Prompt;

/// Create a Paths struct for testing using a temporary directory
///
/// The base directory lives at `<tmp>/git-profile` and the fake home at
/// `<tmp>/home`, so the active .gitconfig sits outside the managed tree.
pub fn setup_test_paths(temp_dir: &TempDir) -> Paths {
    let home = temp_dir.path().join("home");
    std::fs::create_dir_all(&home).unwrap();
    Paths::with_dirs(&temp_dir.path().join("git-profile"), &home)
}

/// Write a config record whose editor exits immediately
pub fn seed_config(paths: &Paths, current: &str) -> Config {
    let config = Config::new("true", current);
    config.write(&paths.config_file).unwrap();
    config
}

/// Replays canned answers, failing once they run out
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    pub asked: usize,
}

impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            asked: 0,
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn text(&mut self, _message: &str, _help: &str) -> Result<String> {
        self.asked += 1;
        match self.answers.pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("no more scripted answers"),
        }
    }
}
