//! Application configuration module
//!
//! Provides the client configuration type and its builder. Values come from
//! an optional TOML file and environment overrides (see `client::config`);
//! the builder is where they are validated.

use serde::Deserialize;
use thiserror::Error;

/// Default server URL
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Default object-store bucket for attachments
pub const DEFAULT_BUCKET: &str = "workspace-files";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the CodeShare API
    pub server_url: String,
    /// Passphrase required by the client gate, `None` leaves the gate open
    pub passphrase: Option<String>,
    /// Base URL of the object store, required for uploads
    pub storage_url: Option<String>,
    /// API key sent to the object store
    pub storage_key: Option<String>,
    /// Bucket attachments are uploaded to
    pub bucket: String,
    /// Name posted as the message author
    pub user: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            passphrase: None,
            storage_url: None,
            storage_key: None,
            bucket: DEFAULT_BUCKET.to_string(),
            user: crate::shared::message::DEFAULT_USER.to_string(),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_url(&self.server_url)?;
        if let Some(url) = &self.storage_url {
            check_url(url)?;
        }
        if self.bucket.trim().is_empty() {
            return Err(ConfigError::MissingValue("bucket"));
        }
        Ok(())
    }

    /// Full URL for an API path
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url.trim_end_matches('/'), path)
    }
}

/// Values as they appear in the TOML config file
///
/// Every field is optional; unset fields fall back to the defaults of
/// [`AppConfig`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileConfig {
    pub server_url: Option<String>,
    pub passphrase: Option<String>,
    pub storage_url: Option<String>,
    pub storage_key: Option<String>,
    pub bucket: Option<String>,
    pub user: Option<String>,
}

impl FileConfig {
    /// Parse a TOML document
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    passphrase: Option<String>,
    storage_url: Option<String>,
    storage_key: Option<String>,
    bucket: Option<String>,
    user: Option<String>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Set the gate passphrase
    pub fn passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.passphrase = Some(passphrase.into());
        self
    }

    /// Set the object store base URL
    pub fn storage_url(mut self, url: impl Into<String>) -> Self {
        self.storage_url = Some(url.into());
        self
    }

    /// Set the object store API key
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = Some(key.into());
        self
    }

    /// Set the attachment bucket
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Set the author name
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Layer values from a config file under anything already set
    pub fn file(mut self, file: FileConfig) -> Self {
        self.server_url = self.server_url.or(file.server_url);
        self.passphrase = self.passphrase.or(file.passphrase);
        self.storage_url = self.storage_url.or(file.storage_url);
        self.storage_key = self.storage_key.or(file.storage_key);
        self.bucket = self.bucket.or(file.bucket);
        self.user = self.user.or(file.user);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            server_url: self.server_url.unwrap_or(defaults.server_url),
            passphrase: self.passphrase.filter(|p| !p.is_empty()),
            storage_url: self.storage_url.filter(|u| !u.is_empty()),
            storage_key: self.storage_key.filter(|k| !k.is_empty()),
            bucket: self.bucket.unwrap_or(defaults.bucket),
            user: self.user.filter(|u| !u.is_empty()).unwrap_or(defaults.user),
        };
        config.validate()?;
        Ok(config)
    }
}

fn check_url(url: &str) -> Result<(), ConfigError> {
    let parsed = reqwest::Url::parse(url).map_err(|_| ConfigError::InvalidUrl(url.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(ConfigError::InvalidUrl(url.to_string())),
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid config file: {0}")]
    Parse(String),
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
}
