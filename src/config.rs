use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_word_count")]
    pub word_count: usize,
    #[serde(default = "default_word_api_url")]
    pub word_api_url: String,
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_word_count() -> usize {
    10
}
fn default_word_api_url() -> String {
    "https://random-word-api.herokuapp.com/word".to_string()
}
fn default_fetch_timeout_secs() -> u64 {
    10
}
fn default_theme() -> String {
    "terminal-default".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_count: default_word_count(),
            word_api_url: default_word_api_url(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            theme: default_theme(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("typespeed")
            .join("config.toml")
    }

    /// Endpoint for one batch of words, e.g. `.../word?number=10`.
    pub fn request_url(&self) -> String {
        let sep = if self.word_api_url.contains('?') { '&' } else { '?' };
        format!("{}{sep}number={}", self.word_api_url, self.word_count)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs.max(1))
    }
}
