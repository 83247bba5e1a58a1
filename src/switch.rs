//! Profile switching logic.
//!
//! This module implements the core mechanism of `git-profile`: activating a
//! profile by copying it over `~/.gitconfig`. It handles:
//! - Backing up the active file before it is replaced.
//! - Replacing the active file via a temp file and rename.
//! - Recording the new current profile in the config record.
//! - Cleaning up old backups.

use anyhow::{Context, Result, bail};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::LockedConfig;
use crate::paths::Paths;
use crate::profiles::existing_profile;

/// Number of .gitconfig backups to keep
const MAX_BACKUPS: usize = 10;

/// Prefix of backup file names
const BACKUP_PREFIX: &str = "gitconfig";

/// Switch to a specific profile
pub fn switch_to_profile(paths: &Paths, name: &str) -> Result<()> {
    let profile_file = existing_profile(paths, name)?;

    if !paths.git_config.is_file() {
        bail!(
            "Failed to find .gitconfig ({})",
            paths.git_config.display()
        );
    }

    // Lock first so a broken config record aborts before anything is replaced
    let mut locked = LockedConfig::lock(&paths.config_file)?;

    let backup = backup_existing_file(&paths.git_config, &paths.backups_dir, BACKUP_PREFIX)?;
    tracing::debug!(backup = %backup.display(), "backed up active gitconfig");

    replace_file(&profile_file, &paths.git_config)?;
    tracing::debug!(
        profile = %profile_file.display(),
        target = %paths.git_config.display(),
        "replaced active gitconfig"
    );

    locked.update(|c| {
        c.current_profile = name.to_string();
        c.last_switched_at = Some(Utc::now());
    })?;

    Ok(())
}

/// Copy `source` over `target` through a sibling temp file and a rename
fn replace_file(source: &Path, target: &Path) -> Result<()> {
    let file_name = target
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("Invalid target path: {}", target.display()))?;
    let temp_path = target.with_file_name(format!("{}.git-profile.tmp", file_name));

    fs::copy(source, &temp_path).with_context(|| {
        format!(
            "Failed to copy {} to {}",
            source.display(),
            temp_path.display()
        )
    })?;

    if let Err(e) = fs::rename(&temp_path, target) {
        let _ = fs::remove_file(&temp_path);
        return Err(e).with_context(|| {
            format!(
                "Failed to rename {} -> {}",
                temp_path.display(),
                target.display()
            )
        });
    }

    Ok(())
}

/// Copy `path` into `backups_dir` under a timestamped name and rotate old copies
pub fn backup_existing_file(path: &Path, backups_dir: &Path, name_prefix: &str) -> Result<PathBuf> {
    fs::create_dir_all(backups_dir)
        .with_context(|| format!("Failed to create backups directory: {:?}", backups_dir))?;

    let timestamp = Utc::now().format("%Y%m%d_%H%M%S%.6f").to_string();
    let backup_path = next_backup_path(backups_dir, name_prefix, &timestamp)?;

    fs::copy(path, &backup_path).with_context(|| {
        format!(
            "Failed to back up {} to {}",
            path.display(),
            backup_path.display()
        )
    })?;

    cleanup_old_backups(backups_dir, name_prefix)?;

    Ok(backup_path)
}

/// Pick a backup name for `timestamp` that sorts after every existing backup
///
/// Backups sharing a timestamp get `_NNNNNN` suffixes. The suffix is one past
/// the highest present, never a gap left behind by rotation.
fn next_backup_path(backups_dir: &Path, name_prefix: &str, timestamp: &str) -> Result<PathBuf> {
    let stem = format!("{}.{}", name_prefix, timestamp);

    let highest = list_backups(backups_dir, name_prefix)?
        .iter()
        .filter_map(|p| p.file_name()?.to_str()?.strip_prefix(&stem)?.strip_suffix(".bak"))
        .map(|rest| match rest.strip_prefix('_') {
            Some(n) => n.parse::<u32>().unwrap_or(0),
            None => 0,
        })
        .max();

    Ok(match highest {
        None => backups_dir.join(format!("{}.bak", stem)),
        Some(n) => backups_dir.join(format!("{}_{:06}.bak", stem, n + 1)),
    })
}

/// List backups for `name_prefix`, oldest first
pub fn list_backups(backups_dir: &Path, name_prefix: &str) -> Result<Vec<PathBuf>> {
    if !backups_dir.exists() {
        return Ok(Vec::new());
    }

    let mut backups: Vec<_> = fs::read_dir(backups_dir)
        .with_context(|| format!("Failed to read backups directory: {:?}", backups_dir))?
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_name()
                .to_str()
                .is_some_and(|n| n.starts_with(name_prefix) && n.ends_with(".bak"))
        })
        .map(|e| e.path())
        .collect();

    // Timestamped names sort chronologically
    backups.sort();
    Ok(backups)
}

fn cleanup_old_backups(backups_dir: &Path, name_prefix: &str) -> Result<()> {
    let backups = list_backups(backups_dir, name_prefix)?;

    if backups.len() <= MAX_BACKUPS {
        return Ok(());
    }

    let to_remove = backups.len() - MAX_BACKUPS;
    for path in backups.iter().take(to_remove) {
        fs::remove_file(path)
            .with_context(|| format!("Failed to remove old backup: {}", path.display()))?;
        tracing::debug!(backup = %path.display(), "removed old backup");
    }

    Ok(())
}
