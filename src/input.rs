//! Gesture records tracked between pointer-down and pointer-up.
//!
//! Each active variant of [`GestureState`] carries everything needed to
//! recompute the element's geometry from the gesture origin on every move.
//! Nothing here is persisted, and none of it lives on the element: dropping
//! the record is all it takes to abandon a gesture.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::ElementId;
use crate::hit::ResizeAnchor;
use crate::mapper::{Point, PreviewRect, Rect};

/// Context for an in-progress move.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    /// Element being dragged.
    pub id: ElementId,
    /// Device-space pointer position at pointer-down.
    pub origin: Point,
    /// Element x at pointer-down.
    pub start_x: f64,
    /// Element y at pointer-down.
    pub start_y: f64,
    /// Preview rectangle at pointer-down, used to scale pointer deltas.
    pub preview: PreviewRect,
}

/// Context for an in-progress resize.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeState {
    /// Element being resized.
    pub id: ElementId,
    /// Which handle is being dragged.
    pub anchor: ResizeAnchor,
    /// Device-space pointer position at pointer-down.
    pub origin: Point,
    /// Element geometry at pointer-down.
    pub start: Rect,
    /// Preview rectangle at pointer-down.
    pub preview: PreviewRect,
}

/// Context for an in-progress rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct RotateState {
    /// Element being rotated.
    pub id: ElementId,
    /// Logical-space pivot: the element centre at pointer-down.
    pub center: Point,
    /// Angle in degrees from the pivot to the pointer at pointer-down.
    pub start_angle: f64,
    /// Element rotation at pointer-down.
    pub start_rotation: f64,
    /// Preview rectangle at pointer-down.
    pub preview: PreviewRect,
}

/// The gesture state machine. At most one gesture is active at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GestureState {
    /// Waiting for the next pointer-down.
    #[default]
    Idle,
    Dragging(DragState),
    Resizing(ResizeState),
    Rotating(RotateState),
}

impl GestureState {
    /// Id of the element the active gesture targets.
    #[must_use]
    pub fn target(&self) -> Option<ElementId> {
        match self {
            Self::Idle => None,
            Self::Dragging(s) => Some(s.id),
            Self::Resizing(s) => Some(s.id),
            Self::Rotating(s) => Some(s.id),
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
