//! Viewer configuration: `flipdeck.toml` loading, validation, defaults.
//!
//! Two groups of values live here:
//!
//! - `target_width`: the pixel width every page is rasterized at. Larger
//!   values mean sharper pages and a bigger artifact.
//! - `design_width` / `design_height`: the logical viewport of the embedded
//!   viewer. The page-turn engine scales this box down to fit the window
//!   while preserving its aspect ratio.
//!
//! All values have defaults tuned for smartphone portrait reading, so a
//! config file is optional. `flipdeck gen-config` prints a documented stock
//! file.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("{field} must be greater than zero")]
    ZeroDimension { field: &'static str },
}

/// Configuration for one conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    /// Pixel width each page is rasterized at.
    pub target_width: u32,
    /// Logical viewport width of the embedded viewer.
    pub design_width: u32,
    /// Logical viewport height of the embedded viewer.
    pub design_height: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            target_width: 900,
            design_width: 390,
            design_height: 552,
        }
    }
}

impl ViewerConfig {
    /// Load a config file, falling back to defaults for absent keys.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject dimensions the rasterizer or the viewer cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("target_width", self.target_width),
            ("design_width", self.design_width),
            ("design_height", self.design_height),
        ];
        for (field, value) in checks {
            if value == 0 {
                return Err(ConfigError::ZeroDimension { field });
            }
        }
        Ok(())
    }
}

/// Stock config file with every option documented, for `flipdeck gen-config`.
pub fn stock_config_toml() -> String {
    let defaults = ViewerConfig::default();
    format!(
        "\
# flipdeck configuration
#
# Every key is optional; the values below are the defaults.

# Pixel width each page is rasterized at. Height follows from the page's
# own aspect ratio. Larger widths mean sharper pages and a bigger file.
target_width = {}

# Logical viewport of the embedded viewer. The viewer scales this box down
# to fit the window, preserving its aspect ratio.
design_width = {}
design_height = {}
",
        defaults.target_width, defaults.design_width, defaults.design_height
    )
}
