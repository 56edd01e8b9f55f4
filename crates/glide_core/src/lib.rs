//! Glide Core
//!
//! Foundational primitives shared by the Glide crates:
//!
//! - **Event ids**: numeric event types fed to interaction state machines
//! - **State Machines**: the `StateTransitions` trait implemented by widget state enums
//! - **Geometry**: card width/gap snapshots measured from a rendered strip
//!
//! # Example
//!
//! ```rust
//! use glide_core::CardMetrics;
//!
//! let metrics = CardMetrics::new(300.0, 24.0);
//! assert_eq!(metrics.step(), 324.0);
//! assert_eq!(metrics.offset_of(8), 2592.0);
//! ```

pub mod events;
pub mod fsm;
pub mod geometry;

pub use events::{event_types, EventType};
pub use fsm::{transition, StateTransitions};
pub use geometry::CardMetrics;
