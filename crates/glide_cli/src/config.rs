//! Glide configuration file handling
//!
//! `glide.toml` holds the carousel tuning, the simulated strip layout and,
//! optionally, the testimonials to show:
//!
//! ```toml
//! [carousel]
//! drag_sensitivity = 1.5
//!
//! [strip]
//! items = 8
//! card_width = 300.0
//! gap = 24.0
//!
//! [[testimonials]]
//! name = "Dr. Lowe"
//! quote = "Faster results."
//! ```

use anyhow::{Context, Result};
use glide_animation::MotionConfig;
use glide_carousel::{CarouselConfig, StripLayout};
use glide_sections::Testimonial;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no `--config` is given
pub const CONFIG_FILE: &str = "glide.toml";

/// Contents of `glide.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GlideConfig {
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub strip: StripConfig,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub testimonials: Vec<Testimonial>,
}

/// Simulated strip settings
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct StripConfig {
    /// Placeholder item count, used when no testimonials are listed
    #[serde(default = "default_items")]
    pub items: usize,
    #[serde(default = "default_card_width")]
    pub card_width: f32,
    #[serde(default = "default_gap")]
    pub gap: f32,
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f32,
    #[serde(default)]
    pub motion: MotionConfig,
}

fn default_items() -> usize {
    8
}

fn default_card_width() -> f32 {
    StripLayout::default().card_width
}

fn default_gap() -> f32 {
    StripLayout::default().gap
}

fn default_viewport_width() -> f32 {
    StripLayout::default().viewport_width
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            items: default_items(),
            card_width: default_card_width(),
            gap: default_gap(),
            viewport_width: default_viewport_width(),
            motion: MotionConfig::default(),
        }
    }
}

impl StripConfig {
    pub fn layout(&self) -> StripLayout {
        StripLayout {
            card_width: self.card_width,
            gap: self.gap,
            viewport_width: self.viewport_width,
            motion: self.motion,
        }
    }
}

impl GlideConfig {
    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: GlideConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        Ok(config)
    }

    /// Load `path`, or `glide.toml` in `dir` if present, or fall back to defaults
    pub fn resolve(path: Option<&Path>, dir: &Path) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = path {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        let candidate = dir.join(CONFIG_FILE);
        if candidate.exists() {
            return Ok((Self::load(&candidate)?, Some(candidate)));
        }

        Ok((Self::default(), None))
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        self.carousel.validate()?;

        let strip = &self.strip;
        if !strip.card_width.is_finite() || strip.card_width <= 0.0 {
            anyhow::bail!("strip.card_width must be positive, got {}", strip.card_width);
        }
        if !strip.gap.is_finite() || strip.gap < 0.0 {
            anyhow::bail!("strip.gap must be zero or positive, got {}", strip.gap);
        }
        if !strip.viewport_width.is_finite() || strip.viewport_width < 0.0 {
            anyhow::bail!(
                "strip.viewport_width must be zero or positive, got {}",
                strip.viewport_width
            );
        }
        Ok(())
    }

    /// Testimonials to show: the configured list, or numbered placeholders
    pub fn testimonials(&self) -> Vec<Testimonial> {
        if self.testimonials.is_empty() {
            Testimonial::placeholders(self.strip.items)
        } else {
            self.testimonials.clone()
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize glide config")
    }
}
