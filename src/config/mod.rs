//! Configuration management for threader.
//!
//! Configuration is read from `~/.config/threader/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

pub mod fetch;
pub mod thread;

pub use fetch::FetchConfig;
pub use thread::ThreadConfig;

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Which posting collaborator receives the thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PosterKind {
    #[default]
    DryRun,
    Webhook,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PosterConfig {
    pub kind: PosterKind,
    pub webhook_url: String,
}

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub thread: ThreadConfig,
    pub fetch: FetchConfig,
    pub poster: PosterConfig,
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, creating it when absent.
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            Self::create_default_config(config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| ConfigError::Io {
            path: config_path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path: `~/.config/threader/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("threader").join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thread.tweet_size == 0 {
            return Err(ConfigError::Invalid(
                "thread.tweet_size must be at least 1".into(),
            ));
        }
        if self.thread.intro_base_len() > self.thread.tweet_size {
            return Err(ConfigError::Invalid(
                "thread.tweet_intro does not fit in thread.tweet_size".into(),
            ));
        }
        if self.fetch.max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "fetch.max_attempts must be at least 1".into(),
            ));
        }
        if self.poster.kind == PosterKind::Webhook && self.poster.webhook_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "poster.webhook_url is required when poster.kind = \"webhook\"".into(),
            ));
        }
        Ok(())
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# threader configuration

[thread]
# Appended after every sentence in a segment
appendage = " "

# Appended to a segment when it closes with room to spare
hashtags = ""

# Maximum characters per post
tweet_size = 280

# First post of every thread. {author}, {contact} and {url} are substituted.
# The rendered intro is cut to tweet_size characters.
tweet_intro = "{author} This thread was brought to you by threader, contact {contact}"
contact_handle = "@threader"

# Also post the hashtags on their own at the end of the thread
trailing_hashtags = false

[fetch]
# Request timeout in seconds
timeout_secs = 10

user_agent = "threader/0.1.0"

# Accept invalid TLS certificates. Only enable for hosts you trust.
danger_accept_invalid_certs = false

# Attempts while the page returns the no-script placeholder
max_attempts = 3
retry_delay_ms = 1000
placeholder_text = "JavaScript is disabled"

# Element holding the article, e.g. "div.lightbox-content". Empty = whole body.
content_selector = ""

[poster]
# "dry-run" prints posts, "webhook" sends them to webhook_url
kind = "dry-run"
webhook_url = ""
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
