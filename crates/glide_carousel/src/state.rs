//! Carousel interaction states
//!
//! ```text
//!          pointer down                pointer up / leave
//!   Idle ───────────────▶ Dragging ─────────────────────▶ Settling
//!    ▲ ▲                   ▲    │                            │ │
//!    │ │   drag cancelled  │    │                            │ │
//!    │ └───────────────────┼────┘          pointer down      │ │
//!    │                     └─────────────────────────────────┘ │
//!    │                      settled                            │
//!    └─────────────────────────────────────────────────────────┘
//!
//!   Idle ──navigate──▶ Settling (navigate again stays in Settling)
//! ```

use glide_core::StateTransitions;

/// Carousel-specific events
pub mod carousel_events {
    use glide_core::event_types::CUSTOM_BASE;

    /// Programmatic smooth scroll started
    pub const NAVIGATE: u32 = CUSTOM_BASE + 100;
    /// Settle delay elapsed
    pub const SETTLED: u32 = CUSTOM_BASE + 101;
    /// Drag ended without measurable geometry to snap to
    pub const DRAG_CANCELLED: u32 = CUSTOM_BASE + 102;
}

/// Interaction state of the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CarouselState {
    /// At rest
    #[default]
    Idle,
    /// Pointer held; the strip follows the pointer directly
    Dragging,
    /// Smooth scroll in flight, waiting for the settle delay
    Settling,
}

impl CarouselState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, CarouselState::Dragging)
    }

    pub fn is_settling(&self) -> bool {
        matches!(self, CarouselState::Settling)
    }
}

impl StateTransitions for CarouselState {
    fn on_event(&self, event: u32) -> Option<Self> {
        use carousel_events::*;
        use glide_core::event_types::*;

        match (self, event) {
            // A new drag always wins over an in-flight settle
            (CarouselState::Idle | CarouselState::Settling, POINTER_DOWN) => {
                Some(CarouselState::Dragging)
            }

            (CarouselState::Dragging, POINTER_UP | POINTER_LEAVE) => {
                Some(CarouselState::Settling)
            }
            (CarouselState::Dragging, DRAG_CANCELLED) => Some(CarouselState::Idle),

            (CarouselState::Idle, NAVIGATE) => Some(CarouselState::Settling),

            (CarouselState::Settling, SETTLED) => Some(CarouselState::Idle),

            _ => None,
        }
    }
}
