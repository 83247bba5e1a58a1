//! Core profile management logic.
//!
//! This module handles the "data model" of profiles:
//! - Normalizing and validating profile names
//! - Listing available profiles
//! - Creating and removing profile files
//!
//! A profile is nothing more than `<profiles-dir>/<name>.gitconfig`. Its
//! contents belong to git and are never parsed here.

use anyhow::{Context, Result, bail};
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::paths::{PROFILE_EXTENSION, Paths};

/// Longest accepted profile name, in characters
const MAX_NAME_LEN: usize = 64;

/// Profile names are case-insensitive; everything is looked up lower-cased
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

/// Validate profile name
///
/// Only allows alphanumeric characters, underscores, and hyphens, and no
/// leading hyphen.
pub fn validate_profile_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("Profile name cannot be empty");
    }

    if name.chars().count() > MAX_NAME_LEN {
        bail!(
            "Profile name cannot be longer than {} characters",
            MAX_NAME_LEN
        );
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        bail!(
            "Invalid profile name '{}'.\n\n Only alphanumeric characters, hyphens (-), and underscores (_) are allowed.",
            name
        );
    }

    // A flag typed after the action arrives here as a name
    if name.starts_with('-') {
        bail!("Invalid profile name '{}'. Names cannot start with '-'.", name);
    }

    Ok(())
}

/// List available profiles, sorted by name
///
/// A missing profiles directory simply means there are no profiles yet.
pub fn list_profiles(paths: &Paths) -> Result<Vec<String>> {
    if !paths.profiles_dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(&paths.profiles_dir).with_context(|| {
        format!(
            "Failed to read profiles directory: {}",
            paths.profiles_dir.display()
        )
    })?;

    let mut profiles = Vec::new();
    for entry in entries {
        let path = entry.context("Failed to read directory entry")?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(PROFILE_EXTENSION)
        {
            continue;
        }
        if let Some(name) = path.file_stem().and_then(|n| n.to_str()) {
            profiles.push(name.to_string());
        }
    }
    profiles.sort();
    Ok(profiles)
}

/// Check if a profile exists
pub fn profile_exists(paths: &Paths, name: &str) -> bool {
    paths.profile_file(name).is_file()
}

/// Resolve the file of an existing profile, failing if it is missing
pub fn existing_profile(paths: &Paths, name: &str) -> Result<PathBuf> {
    validate_profile_name(name)?;

    if !profile_exists(paths, name) {
        bail!("Profile '{}' does not exist", name);
    }

    Ok(paths.profile_file(name))
}

/// Create a new, empty profile file and return its path
pub fn create_profile(paths: &Paths, name: &str) -> Result<PathBuf> {
    validate_profile_name(name)?;
    paths.ensure_profiles_dir()?;

    let profile_file = paths.profile_file(name);

    // create_new makes the duplicate check and the creation a single step
    match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&profile_file)
    {
        Ok(_) => Ok(profile_file),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            bail!("Profile '{}' already exists", name)
        }
        Err(e) => Err(e).with_context(|| {
            format!("Failed to create profile file: {}", profile_file.display())
        }),
    }
}

/// Remove a profile
pub fn remove_profile(paths: &Paths, name: &str) -> Result<()> {
    let profile_file = existing_profile(paths, name)?;

    fs::remove_file(&profile_file).with_context(|| {
        format!("Failed to remove profile file: {}", profile_file.display())
    })?;

    Ok(())
}
