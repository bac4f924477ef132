// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[viewer]` - Reading direction, page mode, filename display, grid size
//!
//! The config file supplies *startup defaults only*: toggling reading
//! direction or page mode during a session does not write the file back.

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedSpread";

// =============================================================================
// Enums (shared with the spread navigator)
// =============================================================================

/// Reading direction of the book: which side a pair's first page lands on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReadingDirection {
    LeftToRight,
    /// Right-to-left ("right-open" books: manga, Japanese magazines).
    #[default]
    RightToLeft,
}

/// Whether spreads show one page or two.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PageMode {
    Single,
    #[default]
    Dual,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "ja").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Viewer startup settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Reading direction on startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_direction: Option<ReadingDirection>,

    /// Page mode on startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_mode: Option<PageMode>,

    /// Whether filename chips are shown over the pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_filenames: Option<bool>,

    /// Overview grid column count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_columns: Option<u16>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            reading_direction: Some(ReadingDirection::default()),
            page_mode: Some(PageMode::default()),
            show_filenames: Some(false),
            grid_columns: Some(DEFAULT_GRID_COLUMNS),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Viewer startup settings.
    #[serde(default)]
    pub viewer: ViewerConfig,
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
