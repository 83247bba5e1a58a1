use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Configuration record stored in <base>/config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Executable used to open profile files
    pub preferred_text_editor: String,

    /// Name of the profile presumed active
    pub current_profile: String,

    /// When the last successful switch happened
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_switched_at: Option<DateTime<Utc>>,
}

impl Config {
    pub fn new(editor: impl Into<String>, current_profile: impl Into<String>) -> Self {
        Self {
            preferred_text_editor: editor.into(),
            current_profile: current_profile.into(),
            last_switched_at: None,
        }
    }

    /// Load the record, returning `None` when it has not been created yet
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        parse(&content, path).map(Some)
    }

    /// Write the record atomically (temp file, then rename)
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, &content)
            .with_context(|| format!("Failed to write temp config file: {:?}", temp_path))?;

        std::fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename config file: {:?} -> {:?}", temp_path, path))
    }
}

fn parse(content: &str, path: &Path) -> Result<Config> {
    if content.trim().is_empty() {
        bail!("Config file is empty: {:?}", path);
    }

    serde_json::from_str(content).with_context(|| format!("Failed parsing config file: {:?}", path))
}

/// An exclusively locked config record for read-modify-write updates
pub struct LockedConfig {
    file: File,
    config: Config,
    path: PathBuf,
}

impl LockedConfig {
    /// Open and lock an existing config file
    pub fn lock(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;

        // Blocks until available
        file.lock_exclusive()
            .with_context(|| format!("Failed to lock config file: {:?}", path))?;

        let config = Self::read_from_file(&file, path)?;

        Ok(Self {
            file,
            config,
            path: path.to_path_buf(),
        })
    }

    fn read_from_file(mut file: &File, path: &Path) -> Result<Config> {
        let mut content = String::new();
        file.read_to_string(&mut content)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        parse(&content, path)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Apply `f` and save the result while still holding the lock
    pub fn update<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Config),
    {
        f(&mut self.config);
        self.save()
    }

    fn save(&mut self) -> Result<()> {
        let content =
            serde_json::to_string_pretty(&self.config).context("Failed to serialize config")?;

        self.file
            .set_len(0)
            .with_context(|| format!("Failed to truncate config file: {:?}", self.path))?;
        self.file
            .seek(SeekFrom::Start(0))
            .with_context(|| format!("Failed to seek config file: {:?}", self.path))?;
        self.file
            .write_all(content.as_bytes())
            .with_context(|| format!("Failed to write config file: {:?}", self.path))?;
        self.file
            .sync_all()
            .with_context(|| format!("Failed to sync config file: {:?}", self.path))?;

        Ok(())
    }
}

impl Drop for LockedConfig {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}
