use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_OUTPUT, LIQUIPEDIA_API, PATCHES_PAGE, REQUEST_TIMEOUT_SECS, USER_AGENT,
};
use crate::error::{Result, TimelineError};

pub const CONFIG_FILE: &str = "patch_timeline.toml";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub page: String,
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: LIQUIPEDIA_API.to_string(),
            page: PATCHES_PAGE.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout_seconds: REQUEST_TIMEOUT_SECS,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl Config {
    /// Loads `patch_timeline.toml` if present, then applies `PATCH_TIMELINE_*`
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::from_file(Path::new(CONFIG_FILE))?.unwrap_or_default();
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(|e| {
            TimelineError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        Ok(Some(Self::from_toml(&content)?))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.timeout_seconds == 0 {
            return Err(TimelineError::Config("timeout_seconds must be positive".into()));
        }
        Ok(config)
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(v) = get("PATCH_TIMELINE_API_URL") {
            self.api_url = v;
        }
        if let Some(v) = get("PATCH_TIMELINE_PAGE") {
            self.page = v;
        }
        if let Some(v) = get("PATCH_TIMELINE_OUTPUT") {
            self.output = PathBuf::from(v);
        }
    }
}
