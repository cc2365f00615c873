//! Drag controller: move an element with the pointer.
//!
//! The position is always recomputed from the gesture origin, never
//! accumulated from the previous move, so replaying the same pointer event
//! writes the same position.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::doc::{ElementId, Slide};
use crate::error::EditError;
use crate::input::DragState;
use crate::lock::LockRegistry;
use crate::mapper::{self, Point, PreviewRect};
use crate::snap::GridSnap;

/// Capture the start of a drag.
///
/// # Errors
///
/// Returns `Locked` or `NotFound` for an invalid target.
pub fn begin(
    slide: &Slide,
    id: &ElementId,
    locks: &LockRegistry,
    pointer: Point,
    preview: PreviewRect,
) -> Result<DragState, EditError> {
    locks.check(id)?;
    let el = slide.element(id).ok_or(EditError::NotFound(*id))?;
    Ok(DragState { id: *id, origin: pointer, start_x: el.x, start_y: el.y, preview })
}

/// Move the element to follow `pointer`.
///
/// Clamping uses the element's current size, not its size at pointer-down.
///
/// # Errors
///
/// Returns `Locked` / `NotFound` if the target became invalid, or
/// `DegenerateLayout` if the captured preview has no area.
pub fn apply(
    state: &DragState,
    slide: &Slide,
    locks: &LockRegistry,
    snap: &GridSnap,
    pointer: Point,
) -> Result<Slide, EditError> {
    locks.check(&state.id)?;
    let delta =
        mapper::delta_to_logical(pointer.delta_from(state.origin), &state.preview).ok_or(EditError::DegenerateLayout)?;

    let mut next = slide.clone();
    let el = next.element_mut(&state.id).ok_or(EditError::NotFound(state.id))?;
    el.x = snap.snap_within(state.start_x + delta.x, 0.0, CANVAS_WIDTH - el.width);
    el.y = snap.snap_within(state.start_y + delta.y, 0.0, CANVAS_HEIGHT - el.height);

    next.touch();
    Ok(next)
}
