//! Glide Sections
//!
//! Headless state for the page sections around the carousel:
//!
//! - [`navbar`]: hide-on-scroll, background-aware tone and menu state
//! - [`rotator`]: a single testimonial that cross-fades between entries
//! - [`testimonial`]: the testimonial record shown by both carousels

pub mod navbar;
pub mod rotator;
pub mod testimonial;

pub use navbar::{is_color_dark, parse_css_color, Dropdown, MenuState, NavSurface, NavTone, NavbarScroll};
pub use rotator::FadeRotator;
pub use testimonial::Testimonial;
