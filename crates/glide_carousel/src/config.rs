//! Carousel tuning parameters
//!
//! The drag multiplier and the settle delays are tuned by feel. They are
//! plain configuration, loadable from TOML:
//!
//! ```toml
//! drag_sensitivity = 1.5
//! scroll_debounce_ms = 100
//! navigation_settle_ms = 600
//! snap_settle_ms = 400
//! offset_tolerance = 0.5
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, Result};

/// Tuning for [`InfiniteDragCarousel`](crate::InfiniteDragCarousel)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Scroll distance per pixel of pointer travel while dragging
    pub drag_sensitivity: f32,
    /// Quiet period after the last scroll event before the boundary check runs
    pub scroll_debounce_ms: u64,
    /// Delay after prev/next before the boundary check runs
    pub navigation_settle_ms: u64,
    /// Delay after a drag snap before the boundary check runs
    pub snap_settle_ms: u64,
    /// Sub-pixel slack when comparing settled offsets
    pub offset_tolerance: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            drag_sensitivity: 1.5,
            scroll_debounce_ms: 100,
            navigation_settle_ms: 600,
            snap_settle_ms: 400,
            offset_tolerance: 0.5,
        }
    }
}

impl CarouselConfig {
    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if !self.drag_sensitivity.is_finite() || self.drag_sensitivity <= 0.0 {
            return Err(CarouselError::InvalidConfig(format!(
                "drag_sensitivity must be a positive number, got {}",
                self.drag_sensitivity
            )));
        }
        if !self.offset_tolerance.is_finite() || self.offset_tolerance < 0.0 {
            return Err(CarouselError::InvalidConfig(format!(
                "offset_tolerance must be zero or positive, got {}",
                self.offset_tolerance
            )));
        }
        Ok(())
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CarouselConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CarouselError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
