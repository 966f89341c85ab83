use std::path::{Path, PathBuf};

use crate::shared::config::{AppConfig, ConfigError, FileConfig};

/// Environment variables read by the client, in builder order
pub const ENV_SERVER_URL: &str = "CODESHARE_SERVER_URL";
pub const ENV_PASSPHRASE: &str = "CODESHARE_PASSPHRASE";
pub const ENV_STORAGE_URL: &str = "CODESHARE_STORAGE_URL";
pub const ENV_STORAGE_KEY: &str = "CODESHARE_STORAGE_KEY";
pub const ENV_BUCKET: &str = "CODESHARE_BUCKET";
pub const ENV_USER: &str = "CODESHARE_USER";

/// `<config dir>/codeshare/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("codeshare").join("config.toml"))
}

/// Load the client configuration from the environment and config file
///
/// An explicit `path` must exist. The default path is only read when present.
pub fn load(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_with(path, |key| std::env::var(key).ok())
}

/// Load the configuration with a custom environment lookup
///
/// Environment values win over the file; empty values count as unset.
pub fn load_with(
    path: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<AppConfig, ConfigError> {
    let file = match path {
        Some(path) => read_file(path)?,
        None => match default_config_path() {
            Some(path) if path.exists() => read_file(&path)?,
            _ => FileConfig::default(),
        },
    };

    let env = |key: &str| lookup(key).filter(|value| !value.is_empty());
    let mut builder = AppConfig::builder();
    if let Some(url) = env(ENV_SERVER_URL) {
        builder = builder.server_url(url);
    }
    if let Some(passphrase) = env(ENV_PASSPHRASE) {
        builder = builder.passphrase(passphrase);
    }
    if let Some(url) = env(ENV_STORAGE_URL) {
        builder = builder.storage_url(url);
    }
    if let Some(key) = env(ENV_STORAGE_KEY) {
        builder = builder.storage_key(key);
    }
    if let Some(bucket) = env(ENV_BUCKET) {
        builder = builder.bucket(bucket);
    }
    if let Some(user) = env(ENV_USER) {
        builder = builder.user(user);
    }

    builder.file(file).build()
}

fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
    tracing::debug!("[Config] Reading {}", path.display());
    let source = std::fs::read_to_string(path)?;
    FileConfig::from_toml(&source)
}
