//! Error types for glide_animation

use thiserror::Error;

/// Errors raised by the animation system
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    /// A live scheduler already occupies the process-wide slot
    #[error("a global animation scheduler is already installed")]
    AlreadyInstalled,
}

/// Result type for animation operations
pub type Result<T> = std::result::Result<T, AnimationError>;
