use crate::error::{InstallerError, Result as InstallResult};
use crate::path_utils::{create_validated_pathbuf, validate_path_str};
use anyhow::{Result, anyhow};
use directories::{ProjectDirs, UserDirs};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_CONFIG_DIR: &str = "CFG_INSTALL_CONFIG_DIR";
pub const ENV_LANG: &str = "CFG_INSTALL_LANG";
pub const ENV_SOURCE_DIR: &str = "CFG_INSTALL_SOURCE_DIR";
pub const ENV_GAME_DIR: &str = "CFG_INSTALL_GAME_DIR";
pub const ENV_SAVED_DIR: &str = "CFG_INSTALL_SAVED_DIR";
pub const APP_NAME: &str = "cfg-install";
pub const CONFIG_FILE: &str = "config.toml";

/// Subdirectory of the game install that receives the autoexec script.
pub const CFG_SUBDIR: &str = "cfg";
pub const GAME_DIR_NAME: &str = "Apex Legends";
#[cfg(windows)]
pub const WINDOWS_STEAM_COMMON: &str = r"C:\Program Files (x86)\Steam\steamapps\common";
pub const STEAM_COMMON_SUFFIX: &[&str] = &[".local", "share", "Steam", "steamapps", "common"];
pub const SAVED_DATA_SUFFIX: &[&str] = &["Saved Games", "Respawn", "Apex", "local"];

pub fn resolve_config_dir(cli_override: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = cli_override {
        validate_path_str(&path.to_string_lossy())
            .map_err(|e| anyhow!(t!("errors.invalid_config_dir", error = e)))?;
        return Ok(path.to_path_buf());
    }

    if let Ok(env_config_dir) = env::var(ENV_CONFIG_DIR) {
        validate_path_str(&env_config_dir)
            .map_err(|e| anyhow!(t!("errors.invalid_config_dir_env", error = e)))?;
        return Ok(PathBuf::from(env_config_dir));
    }

    let project_dirs = ProjectDirs::from("", "", APP_NAME)
        .ok_or_else(|| anyhow!(t!("errors.not_find_config_dir")))?;
    Ok(project_dirs.config_dir().to_path_buf())
}

pub fn home_dir() -> Option<PathBuf> {
    UserDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Conventional Steam location of the game, `None` if no home directory is known.
pub fn default_install_dir() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        Some(PathBuf::from(WINDOWS_STEAM_COMMON).join(GAME_DIR_NAME))
    }
    #[cfg(not(windows))]
    {
        home_dir().map(|home| join_all(home, STEAM_COMMON_SUFFIX).join(GAME_DIR_NAME))
    }
}

pub fn default_saved_dir() -> Option<PathBuf> {
    home_dir().map(|home| join_all(home, SAVED_DATA_SUFFIX))
}

/// Directory holding the running executable; the generated files ship next to it.
pub fn default_source_dir() -> InstallResult<PathBuf> {
    let exe = env::current_exe()?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| InstallerError::PathNotFound {
            path: exe.display().to_string(),
        })
}

fn join_all(base: PathBuf, parts: &[&str]) -> PathBuf {
    parts.iter().fold(base, |acc, part| acc.join(part))
}

/// Expands a leading `~` to the home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

/// Optional `config.toml` in the config directory.
///
/// Values under `[defaults]` (also accepted as `[paths]`) replace the built-in
/// defaults offered at the prompts; they are not explicit overrides and are
/// never required to exist. A configured source directory that has gone
/// missing falls back to the executable's directory.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    #[serde(alias = "paths")]
    pub defaults: DefaultsConfig,
    pub install: InstallConfig,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct DefaultsConfig {
    #[serde(alias = "source_dir")]
    pub source_dir: Option<String>,
    #[serde(alias = "install_dir")]
    pub install_dir: Option<String>,
    #[serde(alias = "saved_dir")]
    pub saved_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct InstallConfig {
    /// Overwrite existing files without asking.
    pub force: bool,
}

impl FileConfig {
    pub fn path_in(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILE)
    }

    /// Loads the config file; a missing file yields the defaults.
    pub fn load(config_dir: &Path) -> InstallResult<Self> {
        let path = Self::path_in(config_dir);
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Self::parse(&content).map_err(|e| InstallerError::Config {
            message: format!("{}: {}", path.display(), e),
        })
    }

    pub fn parse(content: &str) -> InstallResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn source_dir(&self) -> InstallResult<Option<PathBuf>> {
        config_path(self.defaults.source_dir.as_deref(), "defaults.source-dir")
    }

    pub fn install_dir(&self) -> InstallResult<Option<PathBuf>> {
        config_path(self.defaults.install_dir.as_deref(), "defaults.install-dir")
    }

    pub fn saved_dir(&self) -> InstallResult<Option<PathBuf>> {
        config_path(self.defaults.saved_dir.as_deref(), "defaults.saved-dir")
    }
}

fn config_path(value: Option<&str>, key: &str) -> InstallResult<Option<PathBuf>> {
    let Some(value) = value else {
        return Ok(None);
    };
    let path = create_validated_pathbuf(value).map_err(|e| InstallerError::Config {
        message: format!("{key}: {e}"),
    })?;
    Ok(Some(expand_home(&path)))
}
