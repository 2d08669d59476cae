//! Tracker configuration: the ordered page table and the reading band.
//!
//! Both are injected, never hardcoded — the same tracker serves any document
//! set. Configuration lives in a single `pages.toml`:
//!
//! ```toml
//! # Reading band: viewport fractions excluded from the top and bottom when
//! # deciding which heading is "being read". Defaults shown.
//! [band]
//! top = 0.40
//! bottom = 0.55
//!
//! # Fixed reading order for prev/next pager links, first to last.
//! [[pages]]
//! title = "Overview"
//! url = "/docs/cli/overview"
//!
//! [[pages]]
//! title = "Commands"
//! url = "/docs/cli/commands"
//! ```
//!
//! All keys are optional — an empty file is valid (default band, no pager).
//! Unknown keys are rejected to catch typos early.

use crate::pager::PageEntry;
use crate::viewport::ReadingBand;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Tracker configuration loaded from `pages.toml`.
///
/// All fields have sensible defaults; user files need only specify what they
/// want to override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerConfig {
    /// Reading-band geometry.
    pub band: BandConfig,
    /// Ordered page table for the pager, first to last.
    pub pages: Vec<PageEntry>,
}

/// Reading-band fractions. `top` is excluded from the viewport top, `bottom`
/// from the viewport bottom; what remains is the band.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BandConfig {
    pub top: f64,
    pub bottom: f64,
}

impl Default for BandConfig {
    fn default() -> Self {
        let band = ReadingBand::default();
        Self {
            top: band.top_fraction,
            bottom: band.bottom_fraction,
        }
    }
}

impl BandConfig {
    pub fn reading_band(&self) -> ReadingBand {
        ReadingBand {
            top_fraction: self.top,
            bottom_fraction: self.bottom,
        }
    }
}

impl TrackerConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let BandConfig { top, bottom } = self.band;
        if !top.is_finite() || !bottom.is_finite() || top < 0.0 || bottom < 0.0 {
            return Err(ConfigError::Validation(
                "band.top and band.bottom must be non-negative numbers".into(),
            ));
        }
        if top + bottom >= 1.0 {
            return Err(ConfigError::Validation(
                "band.top + band.bottom must be below 1.0 (the band would be empty)".into(),
            ));
        }

        let mut seen = HashSet::new();
        for page in &self.pages {
            if page.url.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "page '{}' has an empty url",
                    page.title
                )));
            }
            if !seen.insert(page.url.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate page url '{}'",
                    page.url
                )));
            }
        }
        Ok(())
    }
}

/// Load and validate `pages.toml`. A missing file yields the defaults, same
/// as an empty file.
pub fn load_config(path: &Path) -> Result<TrackerConfig, ConfigError> {
    let config = if path.exists() {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)?
    } else {
        TrackerConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// The documented stock `pages.toml`, printed by `read-rail gen-config`.
pub fn stock_config_toml() -> String {
    let stock = "\
# read-rail configuration
# All keys are optional — defaults shown for the band; remove the [[pages]]
# entries you don't need. Unknown keys are rejected.

# Reading band: viewport fractions excluded from the top and bottom when
# deciding which heading counts as \"being read\".
[band]
top = 0.40
bottom = 0.55

# Fixed reading order for prev/next pager links, first to last. A location
# matches the first entry whose url is a prefix of it.
[[pages]]
title = \"Overview\"
url = \"/docs/cli/overview\"

[[pages]]
title = \"Commands\"
url = \"/docs/cli/commands\"

[[pages]]
title = \"Providers\"
url = \"/docs/cli/providers\"
";
    stock.to_string()
}
