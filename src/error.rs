//! Error taxonomy for editor operations.
//!
//! Nothing here is fatal. Every operation that returns an [`EditError`] has
//! left its input slide untouched, so the host is free to treat an error as a
//! no-op and carry on with the slide it already holds.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::doc::ElementId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditError {
    #[error("element not found: {0}")]
    NotFound(ElementId),
    #[error("element is locked: {0}")]
    Locked(ElementId),
    #[error("preview has no area; update skipped")]
    DegenerateLayout,
    #[error("a gesture is already in progress")]
    GestureInProgress,
    #[error("no gesture in progress")]
    NoActiveGesture,
    #[error("resource leak detected: {live} handle(s) still live")]
    ResourceLeakDetected { live: usize },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl EditError {
    /// Stable, grepable code for logs and host-side telemetry.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_ELEMENT_NOT_FOUND",
            Self::Locked(_) => "E_ELEMENT_LOCKED",
            Self::DegenerateLayout => "E_DEGENERATE_LAYOUT",
            Self::GestureInProgress => "E_GESTURE_IN_PROGRESS",
            Self::NoActiveGesture => "E_NO_ACTIVE_GESTURE",
            Self::ResourceLeakDetected { .. } => "E_RESOURCE_LEAK",
            Self::InvalidConfig(_) => "E_INVALID_CONFIG",
        }
    }

    /// Whether the error names a bad target element (missing or locked).
    #[must_use]
    pub fn is_invalid_target(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Locked(_))
    }
}
