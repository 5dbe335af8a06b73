//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file lives in
//! the content root and is a sparse overlay on the stock defaults: set only
//! the keys you want to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! author_name = "Kyle Mathews"  # Document <title> of the index page
//! link_prefix = ""              # Base path when deployed under a sub-path, e.g. "/blog"
//! heading = "Writings:"         # Heading above the list of pages
//!
//! [meta]
//! description = "Sample blog"
//! keywords = "blog, articles"
//!
//! [bio]
//! text = "Written by **Kyle Mathews** ..."  # Markdown
//! avatar = ""                   # Image shown next to the bio
//!
//! [analytics]
//! pixel_url = ""                # Tracking pixel rendered as <amp-pixel>
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file looked up in the content root.
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Author shown as the index page title.
    pub author_name: String,
    /// Base path prepended to every page link. Empty for root deployments.
    pub link_prefix: String,
    /// Heading rendered above the page list.
    pub heading: String,
    /// `<meta>` tags for the index page.
    pub meta: MetaConfig,
    /// Author bio block.
    pub bio: BioConfig,
    /// Analytics beacon.
    pub analytics: AnalyticsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            author_name: "Kyle Mathews".to_string(),
            link_prefix: String::new(),
            heading: "Writings:".to_string(),
            meta: MetaConfig::default(),
            bio: BioConfig::default(),
            analytics: AnalyticsConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.author_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "author_name must not be empty".into(),
            ));
        }
        if !self.link_prefix.is_empty()
            && !has_any_prefix(&self.link_prefix, &["/", "http://", "https://"])
        {
            return Err(ConfigError::Validation(format!(
                "link_prefix must start with '/', 'http://' or 'https://', got {:?}",
                self.link_prefix
            )));
        }
        if !self.analytics.pixel_url.is_empty()
            && !has_any_prefix(&self.analytics.pixel_url, &["https://", "http://", "//"])
        {
            return Err(ConfigError::Validation(format!(
                "analytics.pixel_url must be an absolute URL, got {:?}",
                self.analytics.pixel_url
            )));
        }
        Ok(())
    }
}

fn has_any_prefix(value: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|p| value.starts_with(p))
}

/// Static `<meta>` tag contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetaConfig {
    pub description: String,
    pub keywords: String,
}

impl Default for MetaConfig {
    fn default() -> Self {
        Self {
            description: "Sample blog".to_string(),
            keywords: "blog, articles".to_string(),
        }
    }
}

/// Author bio shown above the page list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BioConfig {
    /// Markdown, rendered to HTML at generate time.
    pub text: String,
    /// Avatar image URL or path. Empty for none.
    pub avatar: String,
}

impl Default for BioConfig {
    fn default() -> Self {
        Self {
            text: "Written by **Kyle Mathews** who lives and works in San Francisco \
                   building useful things."
                .to_string(),
            avatar: String::new(),
        }
    }
}

/// Analytics beacon settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyticsConfig {
    /// Tracking pixel URL. Empty disables the pixel.
    pub pixel_url: String,
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// Base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key by key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// `Ok(None)` when the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto `base`, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(root)?)
}

/// A fully-commented stock `config.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# Writings Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Shown as the <title> of the index page.
author_name = "Kyle Mathews"

# Base path the site is deployed under. Every page link is prefixed with it.
# Leave empty when the site lives at the domain root.
# link_prefix = "/blog"
link_prefix = ""

# Heading above the list of pages.
heading = "Writings:"

# ---------------------------------------------------------------------------
# <meta> tags
# ---------------------------------------------------------------------------
[meta]
description = "Sample blog"
keywords = "blog, articles"

# ---------------------------------------------------------------------------
# Author bio (markdown)
# ---------------------------------------------------------------------------
[bio]
text = "Written by **Kyle Mathews** who lives and works in San Francisco building useful things."
# Image shown next to the bio. Empty for none.
avatar = ""

# ---------------------------------------------------------------------------
# Analytics
# ---------------------------------------------------------------------------
[analytics]
# Tracking pixel rendered as <amp-pixel>. Empty disables it.
pixel_url = ""
"##
}
