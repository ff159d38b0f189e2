use crate::error::{ExtswapError, Result};
use crate::suffix::{Conversion, Suffix};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional per-directory config file.
pub const CONFIG_FILE: &str = ".extswap.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Suffix a bare `extswap` converts from
    #[serde(default = "default_source")]
    pub source: Suffix,

    /// Suffix a bare `extswap` converts to
    #[serde(default = "default_target")]
    pub target: Suffix,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            target: default_target(),
        }
    }
}

fn default_source() -> Suffix {
    Conversion::js_to_gs().source
}

fn default_target() -> Suffix {
    Conversion::js_to_gs().target
}

impl Config {
    /// Load `<dir>/.extswap.toml` if it exists
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Self::load_from_path(&config_path);
        }

        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let config_err = |message: String| ExtswapError::Config {
            path: path.to_path_buf(),
            message,
        };
        let content = fs::read_to_string(path).map_err(|e| config_err(e.to_string()))?;
        toml::from_str(&content).map_err(|e| config_err(e.to_string()))
    }

    /// Save config to a specific path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let config_err = |message: String| ExtswapError::Config {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| config_err(e.to_string()))?;
        fs::write(path, content).map_err(|e| config_err(e.to_string()))
    }

    /// Write a new `<dir>/.extswap.toml` whose defaults are `conversion`.
    /// An existing config file is never overwritten.
    pub fn init(dir: &Path, conversion: &Conversion) -> Result<PathBuf> {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Err(ExtswapError::Config {
                path: config_path,
                message: "already exists".to_string(),
            });
        }

        let config = Self {
            defaults: DefaultsConfig {
                source: conversion.source.clone(),
                target: conversion.target.clone(),
            },
        };
        config.save_to_path(&config_path)?;
        Ok(config_path)
    }

    /// The conversion a bare invocation performs.
    pub fn default_conversion(&self) -> Result<Conversion> {
        Conversion::new(self.defaults.source.clone(), self.defaults.target.clone())
    }
}
