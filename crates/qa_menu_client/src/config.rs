//! Client config load/save for `~/.qa-menu/config.yaml`.
//! Every field is optional; missing values fall back to the built-in defaults.

use std::path::{Path, PathBuf};

/// Base URL used when neither the config file nor the command line sets one.
pub const DEFAULT_BASE_URL: &str = "https://chatbot-hnls.vercel.app";

/// Greeting shown before the main menu is loaded.
pub const DEFAULT_GREETING: &str =
    "Hello! I am PlotBot, your assistant. Please select a category below to get started.";

/// API section (base_url).
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ApiSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Chat section (greeting).
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChatSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub chat: ChatSection,
}

impl Config {
    /// Configured base URL, or [`DEFAULT_BASE_URL`].
    pub fn base_url(&self) -> &str {
        self.api.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Configured greeting, or [`DEFAULT_GREETING`].
    pub fn greeting(&self) -> &str {
        self.chat.greeting.as_deref().unwrap_or(DEFAULT_GREETING)
    }
}

/// Returns the default config file path: `~/.qa-menu/config.yaml` (platform-specific).
pub fn default_config_path() -> Option<PathBuf> {
    let home = home_dir()?;
    Some(home.join(".qa-menu").join("config.yaml"))
}

#[cfg(unix)]
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

#[cfg(windows)]
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("USERPROFILE").map(PathBuf::from)
}

#[cfg(not(any(unix, windows)))]
fn home_dir() -> Option<PathBuf> {
    None
}

/// Load config from a YAML file.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the config at `path`, or the default path when `path` is `None`.
///
/// A missing file at the default location yields [`Config::default`]; an
/// explicitly named file must exist.
pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(p) = path {
        return load(p);
    }
    match default_config_path() {
        Some(p) if p.exists() => load(&p),
        _ => Ok(Config::default()),
    }
}

/// Save config to a YAML file. Creates parent directory if missing.
pub fn save(path: &Path, config: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    let contents = serde_yaml::to_string(config).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, contents).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Config load/save error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid YAML in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}
