// File: crates/chart-config/src/persist.rs
// Summary: JSON load/save for `XyRenderConfig`. Missing fields fall back to defaults.

use std::path::Path;

use crate::config::XyRenderConfig;
use crate::error::{ConfigError, Result};

impl XyRenderConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        log::debug!("loaded render config from {}", path.display());
        Ok(config)
    }

    /// Write JSON to `path`, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let io_err = |source| ConfigError::Io { path: path.to_path_buf(), source };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = self.to_json_string()?;
        std::fs::write(path, json).map_err(io_err)?;
        log::debug!("saved render config to {}", path.display());
        Ok(())
    }
}
