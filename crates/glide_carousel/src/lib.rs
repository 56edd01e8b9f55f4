//! Glide Carousel
//!
//! A headless infinite drag-carousel. `N` items are rendered three times
//! back-to-back so that scrolling toward either edge always reveals real
//! content; once motion settles in the outer copies the strip is silently
//! repositioned into the middle copy.
//!
//! # Example
//!
//! ```rust
//! use glide_carousel::prelude::*;
//!
//! let items: Vec<String> = (0..8).map(|i| format!("card-{i}")).collect();
//! let mut sim = Simulation::new(Strip::new(items), StripLayout::default(), CarouselConfig::default());
//!
//! assert_eq!(sim.carousel().current_index(), 8);
//! sim.carousel_mut().next();
//! sim.settle();
//! assert_eq!(sim.carousel().current_item().map(String::as_str), Some("card-1"));
//! ```
//!
//! # Features
//!
//! - **Drag to scroll**: direct manipulation with a sensitivity multiplier
//! - **Snap to card**: release settles on the nearest card
//! - **Prev/next**: smooth programmatic navigation with edge redirects
//! - **Boundary wrap**: debounced, never while a drag is active
//! - **FSM-based state**: Idle, Dragging, Settling

pub mod carousel;
pub mod config;
pub mod error;
pub mod host;
pub mod sim;
pub mod state;
pub mod strip;
pub mod wrap;

pub use carousel::{CarouselSnapshot, DragSession, InfiniteDragCarousel, Lifecycle};
pub use config::CarouselConfig;
pub use error::{CarouselError, Result};
pub use host::{CarouselHost, ScrollBehavior};
pub use sim::{SimulatedStrip, Simulation, StripLayout};
pub use state::{carousel_events, CarouselState};
pub use strip::{CarouselItem, Strip};
pub use wrap::{next_slot, previous_slot, snap_slot, wrap_target, WrapTarget};

/// Common imports
pub mod prelude {
    pub use crate::carousel::InfiniteDragCarousel;
    pub use crate::config::CarouselConfig;
    pub use crate::host::{CarouselHost, ScrollBehavior};
    pub use crate::sim::{SimulatedStrip, Simulation, StripLayout};
    pub use crate::state::CarouselState;
    pub use crate::strip::{CarouselItem, Strip};
    pub use glide_core::CardMetrics;
}
