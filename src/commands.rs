//! High-level command orchestration for the CLI.
//!
//! [`run`] is the single entry point used by `main.rs`: it serves usage text,
//! loads the config record (or falls into first-run setup) and hands the
//! record to the handler for the requested [`Action`]. Each handler talks to:
//! - `crate::ui` for output.
//! - `crate::profiles` for profile files.
//! - `crate::switch` for activation.
//! - `crate::editor` for opening profiles.

use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::dispatch::Action;
use crate::editor::launch_detached;
use crate::paths::Paths;
use crate::profiles::{create_profile, existing_profile, list_profiles, remove_profile};
use crate::setup::{Prompt, run_first_time_setup};
use crate::switch::switch_to_profile;
use crate::ui::Ui;

/// Execute one invocation
pub fn run(paths: &Paths, action: Action, prompt: &mut dyn Prompt, ui: &Ui) -> Result<()> {
    tracing::debug!(?action, base_dir = %paths.base_dir.display(), "dispatching");

    if !action.needs_config() {
        help(ui);
        return Ok(());
    }

    let Some(config) = Config::load(&paths.config_file)? else {
        tracing::debug!(config = %paths.config_file.display(), "no config record, running setup");
        run_first_time_setup(paths, prompt, ui)?;
        return Ok(());
    };

    match action {
        Action::Help => help(ui),
        Action::Show => show(&config, ui),
        Action::List => list(paths, &config, ui)?,
        Action::Switch(name) => switch(paths, &name, ui)?,
        Action::Create(name) => create(paths, &config, &name, ui)?,
        Action::Edit(name) => edit(paths, &config, &name, ui)?,
        Action::Delete(name) => delete(paths, &name, ui)?,
    }

    Ok(())
}

/// Print usage text
pub fn help(ui: &Ui) {
    ui.line(ui.bold("git-profile - Tool for managing multiple Git configurations"));
    ui.line("Usage: git-profile [--no-color] [--color <WHEN>] [--debug] <action> [action arguments]");
    ui.line("Flags go before the action.");
    ui.blank();
    ui.line("  Actions:");
    ui.line(ui.usage_table(&[
        ("help", "Print this message"),
        (
            "show",
            "Print which profile you're currently using. Same as running without any arguments.",
        ),
        ("list", "List all profiles"),
        ("switch <profile name>", "Switch to a profile"),
        ("create <profile name>", "Create a new profile"),
        ("edit <profile name>", "Edit an existing profile"),
        ("delete <profile name>", "Delete a profile"),
    ]));
}

/// Print the profile recorded as current
pub fn show(config: &Config, ui: &Ui) {
    ui.line(format!("Current profile: {}", config.current_profile));

    if let Some(switched) = &config.last_switched_at {
        ui.line(ui.dim(format!(
            "Last switched: {}",
            switched.format("%Y-%m-%d %H:%M:%S UTC")
        )));
    }
}

/// List all available profiles
pub fn list(paths: &Paths, config: &Config, ui: &Ui) -> Result<()> {
    let profiles = list_profiles(paths)?;

    if profiles.is_empty() {
        ui.warn("No profiles found.");
        ui.line("Create one with:");
        ui.line(format!("  {} create <name>", ui.bold("git-profile")));
        return Ok(());
    }

    for name in &profiles {
        if *name == config.current_profile {
            ui.line(ui.current_profile(name));
        } else {
            ui.line(name);
        }
    }

    Ok(())
}

/// Switch to a profile
pub fn switch(paths: &Paths, name: &str, ui: &Ui) -> Result<()> {
    switch_to_profile(paths, name)?;
    ui.ok(format!("Switched to profile {}", name));
    Ok(())
}

/// Create an empty profile and open it in the editor
pub fn create(paths: &Paths, config: &Config, name: &str, ui: &Ui) -> Result<()> {
    let profile_file = create_profile(paths, name)?;
    ui.ok(format!("Created profile '{}'", name));
    open_in_editor(config, &profile_file, ui);
    Ok(())
}

/// Open an existing profile in the editor
pub fn edit(paths: &Paths, config: &Config, name: &str, ui: &Ui) -> Result<()> {
    let profile_file = existing_profile(paths, name)?;
    open_in_editor(config, &profile_file, ui);
    Ok(())
}

/// Delete a profile. The recorded current profile is left alone.
pub fn delete(paths: &Paths, name: &str, ui: &Ui) -> Result<()> {
    remove_profile(paths, name)?;
    ui.ok(format!("Deleted profile '{}'", name));
    Ok(())
}

fn open_in_editor(config: &Config, path: &Path, ui: &Ui) {
    ui.info(format!(
        "Opening {} in {}",
        path.display(),
        config.preferred_text_editor
    ));
    launch_detached(&config.preferred_text_editor, path);
}
