use crate::error::{OwnerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Abstraction over the persisted default-owner entry. An empty stored value
/// is indistinguishable from an absent one on read; writing the empty string
/// is the unset operation.
pub trait OwnerStore {
    fn get(&self) -> Option<String>;
    fn set(&mut self, value: &str);
    fn write(&self) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub auth: AuthConfig,

    /// The persisted default owner, global (not host-scoped).
    #[serde(rename = "gh-owner", default, skip_serializing_if = "Option::is_none")]
    pub gh_owner: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Overrides the GitHub API base URL (enterprise hosts, test servers).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

pub fn config_path() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg).join("gh-owner").join("config.toml");
        return Ok(path);
    }

    let home = dirs::home_dir()
        .ok_or_else(|| OwnerError::ConfigRead("Cannot find home directory".into()))?;
    Ok(home.join(".config").join("gh-owner").join("config.toml"))
}

pub fn load_config(path: &PathBuf) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents =
        fs::read_to_string(path).map_err(|e| OwnerError::ConfigRead(e.to_string()))?;
    let config: Config =
        toml::from_str(&contents).map_err(|e| OwnerError::ConfigRead(e.to_string()))?;
    Ok(config)
}

pub fn save_config(config: &Config, path: &PathBuf) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| OwnerError::ConfigWrite(e.to_string()))?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| OwnerError::ConfigWrite(e.to_string()))?;
    fs::write(path, &contents).map_err(|e| OwnerError::ConfigWrite(e.to_string()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = fs::Permissions::from_mode(0o600);
        fs::set_permissions(path, perms).map_err(|e| OwnerError::ConfigWrite(e.to_string()))?;
    }

    Ok(())
}

/// File-backed [`OwnerStore`]. Mutations stay in memory until `write`; a
/// failed write leaves the on-disk file untouched.
#[derive(Debug)]
pub struct FileOwnerStore {
    config: Config,
    path: PathBuf,
}

impl FileOwnerStore {
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        Self::load_from(path)
    }

    pub fn load_from(path: PathBuf) -> Result<Self> {
        let config = load_config(&path)?;
        Ok(Self { config, path })
    }

    /// Token resolution order: GH_TOKEN, GITHUB_TOKEN, then the config file.
    pub fn token(&self) -> Result<String> {
        for var in ["GH_TOKEN", "GITHUB_TOKEN"] {
            if let Ok(token) = std::env::var(var) {
                if !token.is_empty() {
                    return Ok(token);
                }
            }
        }
        self.config
            .auth
            .token
            .clone()
            .ok_or(OwnerError::NotAuthenticated)
    }

    pub fn api_url(&self) -> Option<&str> {
        self.config.auth.api_url.as_deref()
    }
}

impl OwnerStore for FileOwnerStore {
    fn get(&self) -> Option<String> {
        self.config
            .gh_owner
            .clone()
            .filter(|owner| !owner.is_empty())
    }

    fn set(&mut self, value: &str) {
        self.config.gh_owner = Some(value.to_string());
    }

    fn write(&self) -> Result<()> {
        save_config(&self.config, &self.path)
    }
}
