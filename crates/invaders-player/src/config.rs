//! Optional `invaders.toml` in the install root
//!
//! Only the asset location is configurable. Window size, title, speeds and
//! frame rate are fixed.

use crate::assets::{AssetPaths, ENEMY_ASSET, SHIP_ASSET};
use invaders_core::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file name, looked up in the install root
pub const CONFIG_FILE: &str = "invaders.toml";

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub assets: AssetConfig,
}

/// Where the sprite images live
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Assets directory, relative to the install root unless absolute
    pub dir: PathBuf,
    /// Player sprite file name
    pub ship: String,
    /// Enemy sprite file name
    pub enemy: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("assets"),
            ship: SHIP_ASSET.to_string(),
            enemy: ENEMY_ASSET.to_string(),
        }
    }
}

impl GameConfig {
    /// Parse config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from a file. A missing file yields the defaults; a
    /// malformed one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolve asset paths against the install root
    pub fn asset_paths(&self, install_root: &Path) -> AssetPaths {
        AssetPaths::with_dir(install_root, &self.assets.dir)
    }
}
