//! First-run setup.
//!
//! Runs when `config.json` does not exist yet: asks for the editor and the
//! first profile's name, writes the record, then creates that profile.

use anyhow::{Context, Result};

use crate::commands;
use crate::config::Config;
use crate::paths::Paths;
use crate::profiles::{normalize_name, profile_exists, validate_profile_name};
use crate::ui::Ui;

/// Source of interactive answers
pub trait Prompt {
    /// Ask one free-text question. Empty answers are returned as-is.
    fn text(&mut self, message: &str, help: &str) -> Result<String>;
}

/// Terminal prompts backed by `inquire`
pub struct InquirePrompt;

impl Prompt for InquirePrompt {
    fn text(&mut self, message: &str, help: &str) -> Result<String> {
        inquire::Text::new(message)
            .with_help_message(help)
            .prompt()
            .context("Setup cancelled")
    }
}

/// Run the interactive first-run flow and return the record it wrote
pub fn run_first_time_setup(paths: &Paths, prompt: &mut dyn Prompt, ui: &Ui) -> Result<Config> {
    ui.line(
        "Hello! It looks like this is your first time running git-profile, so please select your preferred text editor and create your first profile!",
    );

    let editor = ask_non_empty(
        prompt,
        "Please enter the absolute path of your preferred text editor",
        "ex/ /usr/bin/nano",
    )?;

    let profile = loop {
        let name = normalize_name(&ask_non_empty(
            prompt,
            "Please enter the name of what you want your first profile to be called",
            "letters, digits, '-' and '_'",
        )?);
        match validate_profile_name(&name) {
            Ok(()) => break name,
            Err(e) => ui.warn(e.to_string()),
        }
    };

    paths.ensure_profiles_dir()?;

    let config = Config::new(editor, profile.as_str());
    config.write(&paths.config_file)?;
    tracing::debug!(config = %paths.config_file.display(), "wrote initial config");

    if profile_exists(paths, &profile) {
        ui.warn(format!("Profile '{}' already exists, keeping it", profile));
    } else {
        commands::create(paths, &config, &profile, ui)?;
    }

    Ok(config)
}

fn ask_non_empty(prompt: &mut dyn Prompt, message: &str, help: &str) -> Result<String> {
    loop {
        let answer = prompt.text(message, help)?;
        let answer = answer.trim();
        if !answer.is_empty() {
            return Ok(answer.to_string());
        }
    }
}
