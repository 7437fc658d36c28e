use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::ConfigStore;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "PREFS_CONFIG";

/// Store persisted as a flat TOML table.
///
/// Keys are written without their leading `/`, so `/editor` becomes `editor = "..."`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Default location: `$PREFS_CONFIG`, else `<config dir>/general-prefs/config.toml`.
    pub fn path() -> Result<PathBuf> {
        if let Some(custom) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(custom));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("general-prefs").join("config.toml"))
    }

    /// Open the store at the default location.
    pub fn load() -> Result<Self> {
        Self::at(Self::path()?)
    }

    /// Open the store at `path`. A missing file is an empty store.
    pub fn at(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self {
                path,
                values: BTreeMap::new(),
            });
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let table: toml::Table = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        let values = table
            .into_iter()
            .filter_map(|(key, value)| match value {
                toml::Value::String(s) => Some((key, s)),
                toml::Value::Integer(i) => Some((key, i.to_string())),
                toml::Value::Boolean(b) => Some((key, b.to_string())),
                toml::Value::Float(f) => Some((key, f.to_string())),
                other => {
                    tracing::warn!(%key, kind = other.type_str(), "ignoring non-scalar config value");
                    None
                }
            })
            .collect();
        Ok(Self { path, values })
    }

    /// File this store reads from and flushes to.
    pub fn file_path(&self) -> &Path {
        &self.path
    }

    /// All stored entries with their `/`-prefixed keys, sorted by key.
    pub fn entries(&self) -> impl Iterator<Item = (String, &str)> {
        self.values.iter().map(|(k, v)| (format!("/{k}"), v.as_str()))
    }
}

fn storage_key(key: &str) -> &str {
    key.trim_start_matches('/')
}

impl ConfigStore for FileStore {
    fn read(&self, key: &str, default: &str) -> String {
        self.values
            .get(storage_key(key))
            .map_or_else(|| default.to_string(), Clone::clone)
    }

    fn write(&mut self, key: &str, value: &str) {
        self.values
            .insert(storage_key(key).to_string(), value.to_string());
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(&self.values).context("Failed to serialize config")?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write config to {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), "flushed config");
        Ok(())
    }
}
