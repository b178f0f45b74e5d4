//! # Treeforge Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements configuration loading for treeforge, combining
//! defaults, user settings, and project-specific overrides. The settings
//! shape how template directories are listed when a tree is initialized.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. `TREEFORGE_CONFIG` environment variable naming a TOML file (replaces 2 and 3)
//! 2. Project-specific `.treeforge.toml` in the current directory or ancestors
//! 3. User-specific `config.toml` in the platform config directory
//! 4. Default values defined in the code
//!
//! ## Example
//!
//! ```toml
//! [listing]
//! sort_entries = true
//! skip_hidden = true
//! ignore = ["node_modules", "target"]
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let storage = LocalStorage::new(cwd).with_listing(cfg.listing.to_options());
//! ```
//!
use crate::common::fs::ListingOptions;
use crate::core::error::{Result, TreeforgeError};
use crate::core::path::FORBIDDEN_CHARS;
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub listing: ListingConfig,
}

/// How directory entries are enumerated while building a tree.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ListingConfig {
    /// Sort entries by name instead of keeping the filesystem order.
    #[serde(default)]
    pub sort_entries: bool,
    /// Skip entries whose name starts with `.`.
    #[serde(default)]
    pub skip_hidden: bool,
    /// Entry names to leave out of the tree entirely.
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl ListingConfig {
    pub fn to_options(&self) -> ListingOptions {
        ListingOptions {
            sort_entries: self.sort_entries,
            skip_hidden: self.skip_hidden,
            ignore: self.ignore.clone(),
        }
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".treeforge.toml";
const CONFIG_ENV_VAR: &str = "TREEFORGE_CONFIG";

pub fn load_config() -> Result<Config> {
    let config = match std::env::var_os(CONFIG_ENV_VAR) {
        Some(explicit) => {
            let path = PathBuf::from(explicit);
            info!(
                "Loading configuration from {}: {}",
                CONFIG_ENV_VAR,
                path.display()
            );
            load_config_from_path(&path)?
        }
        None => {
            let user_config = load_user_config()?;
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            let project_config = load_project_config(&current_dir)?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Treeforge", "treeforge") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start: &Path) -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path(start) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.treeforge.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` up to the filesystem root looking for `.treeforge.toml`,
/// stopping at the first directory that contains `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path: &Path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.listing.sort_entries = project_cfg.listing.sort_entries || user.listing.sort_entries;
    merged.listing.skip_hidden = project_cfg.listing.skip_hidden || user.listing.skip_hidden;
    merged.listing.ignore = if !project_cfg.listing.ignore.is_empty() {
        project_cfg.listing.ignore
    } else {
        user.listing.ignore
    };
    merged
}

fn validate_config(config: &Config) -> Result<()> {
    for entry in &config.listing.ignore {
        if entry.is_empty() {
            return Err(anyhow!(TreeforgeError::Config(
                "listing.ignore entries cannot be empty.".to_string()
            )));
        }
        if entry.contains(['/', '\\']) || entry.contains(FORBIDDEN_CHARS) {
            return Err(anyhow!(TreeforgeError::Config(format!(
                "Invalid listing.ignore entry '{}': expected a single file or directory name.",
                entry
            ))));
        }
    }
    debug!("Configuration validation successful.");
    Ok(())
}
