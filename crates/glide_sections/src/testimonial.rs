//! Testimonial records

use glide_carousel::CarouselItem;
use serde::{Deserialize, Serialize};

/// A quote attributed to a named person, optionally with a portrait
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub quote: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Testimonial {
    pub fn new(name: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quote: quote.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// `count` numbered placeholder entries
    pub fn placeholders(count: usize) -> Vec<Self> {
        (1..=count)
            .map(|i| Self::new(format!("Reviewer {i}"), format!("Testimonial number {i}.")))
            .collect()
    }
}

impl CarouselItem for Testimonial {
    fn key(&self) -> &str {
        &self.name
    }
}
