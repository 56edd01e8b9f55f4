//! Navbar scroll state
//!
//! The header hides while the page scrolls down, reappears on any upward
//! scroll, and picks a surface that contrasts with the section underneath it.
//! Menu state (mobile menu, one open dropdown) lives in [`MenuState`].

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Scroll distance before the header starts hiding on downward scroll
pub const HIDE_AFTER_PX: f32 = 100.0;

/// Brightness below which a background counts as dark
const DARK_BRIGHTNESS: f32 = 128.0;

/// Tone of the background sampled below the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavTone {
    #[default]
    Light,
    Dark,
}

/// Background the header paints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavSurface {
    /// Page top: no background
    Transparent,
    Dark,
    Light,
}

/// Parse a CSS colour into 0-255 RGB channels
///
/// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(...)` and `rgba(...)`; alpha
/// is ignored.
pub fn parse_css_color(s: &str) -> Option<[f32; 3]> {
    let s = s.trim();

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    let body = s
        .strip_prefix("rgba(")
        .or_else(|| s.strip_prefix("rgb("))?
        .strip_suffix(')')?;

    let mut channels = body
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<f32>().ok());

    let r = channels.next()??;
    let g = channels.next()??;
    let b = channels.next()??;
    Some([r, g, b])
}

fn parse_hex(hex: &str) -> Option<[f32; 3]> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(f32::from);
    match hex.len() {
        3 => Some([
            channel(&hex[0..1].repeat(2))?,
            channel(&hex[1..2].repeat(2))?,
            channel(&hex[2..3].repeat(2))?,
        ]),
        6 | 8 => Some([
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        ]),
        _ => None,
    }
}

/// Perceived brightness test: `(299r + 587g + 114b) / 1000 < 128`
///
/// Unparseable colours count as light.
pub fn is_color_dark(color: &str) -> bool {
    match parse_css_color(color) {
        Some([r, g, b]) => (r * 299.0 + g * 587.0 + b * 114.0) / 1000.0 < DARK_BRIGHTNESS,
        None => false,
    }
}

/// Header visibility and colouring driven by page scroll
#[derive(Debug, Clone, PartialEq)]
pub struct NavbarScroll {
    last_scroll_y: f32,
    at_top: bool,
    beyond_fold: bool,
    hidden: bool,
    tone: NavTone,
}

impl Default for NavbarScroll {
    fn default() -> Self {
        Self::new()
    }
}

impl NavbarScroll {
    pub fn new() -> Self {
        Self {
            last_scroll_y: 0.0,
            at_top: true,
            beyond_fold: false,
            hidden: false,
            tone: NavTone::Light,
        }
    }

    /// The page scrolled to `scroll_y`
    ///
    /// `background` is the computed background colour of the section just
    /// below the header, if one was found.
    pub fn on_scroll(&mut self, scroll_y: f32, viewport_height: f32, background: Option<&str>) {
        self.at_top = scroll_y == 0.0;
        self.beyond_fold = scroll_y > viewport_height;

        let hidden = scroll_y > self.last_scroll_y && scroll_y > HIDE_AFTER_PX;
        if hidden != self.hidden {
            debug!(hidden, scroll_y, "navbar visibility");
        }
        self.hidden = hidden;
        self.last_scroll_y = scroll_y;

        if !self.beyond_fold {
            if let Some(color) = background {
                self.tone = if is_color_dark(color) {
                    NavTone::Dark
                } else {
                    NavTone::Light
                };
                trace!(color, tone = ?self.tone, "sampled background");
            }
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_at_top(&self) -> bool {
        self.at_top
    }

    pub fn is_beyond_fold(&self) -> bool {
        self.beyond_fold
    }

    pub fn tone(&self) -> NavTone {
        self.tone
    }

    pub fn surface(&self) -> NavSurface {
        if self.beyond_fold && !self.at_top {
            NavSurface::Dark
        } else if self.at_top {
            NavSurface::Transparent
        } else {
            match self.tone {
                NavTone::Light => NavSurface::Dark,
                NavTone::Dark => NavSurface::Light,
            }
        }
    }
}

/// Navbar dropdowns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dropdown {
    Products,
    Services,
}

/// Mobile menu and dropdown state; at most one dropdown is open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    mobile_open: bool,
    dropdown: Option<Dropdown>,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mobile_open(&self) -> bool {
        self.mobile_open
    }

    pub fn open_dropdown(&self) -> Option<Dropdown> {
        self.dropdown
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_open = false;
    }

    /// Open `dropdown`, or close it if it is the one already open
    pub fn toggle_dropdown(&mut self, dropdown: Dropdown) {
        self.dropdown = if self.dropdown == Some(dropdown) {
            None
        } else {
            Some(dropdown)
        };
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown = None;
    }

    /// A pointer went down; anything outside a dropdown closes it
    pub fn on_pointer_down(&mut self, inside_dropdown: bool) {
        if !inside_dropdown {
            self.close_dropdown();
        }
    }
}
