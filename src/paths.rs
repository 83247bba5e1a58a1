use anyhow::{Context, Result};
use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the base directory
pub const HOME_ENV: &str = "GIT_PROFILE_HOME";

/// File extension of stored profiles
pub const PROFILE_EXTENSION: &str = "gitconfig";

/// All computed paths used by git-profile
#[derive(Debug, Clone)]
pub struct Paths {
    /// Directory holding the executable (or $GIT_PROFILE_HOME)
    pub base_dir: PathBuf,
    /// <base>/profiles
    pub profiles_dir: PathBuf,
    /// <base>/backups
    pub backups_dir: PathBuf,
    /// <base>/config.json
    pub config_file: PathBuf,
    /// ~/.gitconfig
    pub git_config: PathBuf,
}

impl Paths {
    pub fn new() -> Result<Self> {
        let base_dirs = BaseDirs::new().context("Failed to determine home directory")?;
        let base_dir = resolve_base_dir()?;

        Ok(Self::with_dirs(&base_dir, base_dirs.home_dir()))
    }

    /// Build the layout from an explicit base directory and home directory
    pub fn with_dirs(base_dir: &Path, home: &Path) -> Self {
        Self {
            base_dir: base_dir.to_path_buf(),
            profiles_dir: base_dir.join("profiles"),
            backups_dir: base_dir.join("backups"),
            config_file: base_dir.join("config.json"),
            git_config: home.join(".gitconfig"),
        }
    }

    /// Get the path to a specific profile's file
    pub fn profile_file(&self, name: &str) -> PathBuf {
        self.profiles_dir
            .join(format!("{}.{}", name, PROFILE_EXTENSION))
    }

    /// Ensure the profiles directory exists
    pub fn ensure_profiles_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.profiles_dir).with_context(|| {
            format!(
                "Failed to create profiles directory: {:?}",
                self.profiles_dir
            )
        })
    }
}

/// $GIT_PROFILE_HOME if set and non-empty, otherwise the executable's directory
fn resolve_base_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .with_context(|| format!("Executable has no parent directory: {:?}", exe))
}
