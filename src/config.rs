//! TOML-backed configuration for the demo binary. The engine itself
//! (`HeapFile::open`) takes plain constructor arguments and knows nothing
//! about `serde` or `toml`; this module only exists to make the binary
//! configurable.

use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or validating an [`EngineConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The config file's contents were not valid TOML for this shape.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// The config parsed but failed a semantic check.
    #[error("invalid configuration: {message}")]
    Invalid { message: String },
}

/// Which eviction algorithm the buffer pool uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplacementPolicyConfig {
    Lru,
    Mru,
    Clock,
}

impl From<ReplacementPolicyConfig> for replacement::PolicyKind {
    fn from(value: ReplacementPolicyConfig) -> Self {
        match value {
            ReplacementPolicyConfig::Lru => replacement::PolicyKind::Lru,
            ReplacementPolicyConfig::Mru => replacement::PolicyKind::Mru,
            ReplacementPolicyConfig::Clock => replacement::PolicyKind::Clock,
        }
    }
}

/// Top-level configuration file shape.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    pub storage: StorageConfig,
}

/// Storage engine settings.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub data_path: PathBuf,
    pub directory_path: PathBuf,
    pub pool_size: NonZeroUsize,
    pub replacement_policy: ReplacementPolicyConfig,
}

impl EngineConfig {
    /// Loads and validates configuration from a TOML file at `path`.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_path_buf();
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        let cfg: EngineConfig = toml::from_str(&text).map_err(|e| ConfigError::ParseToml {
            path: path.clone(),
            source: e,
        })?;

        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.data_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                message: "storage.data_path must not be empty".to_string(),
            });
        }
        if self.storage.directory_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                message: "storage.directory_path must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_config() {
        let toml = r#"
            [storage]
            data_path = "data.bin"
            directory_path = "data.dir"
            pool_size = 16
            replacement_policy = "lru"
        "#;
        let cfg: EngineConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.storage.pool_size.get(), 16);
        assert_eq!(cfg.storage.replacement_policy, ReplacementPolicyConfig::Lru);
    }
}
