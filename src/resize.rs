//! Resize controller: drag one of the eight handles.
//!
//! DESIGN
//! ======
//! Every move recomputes the rectangle from the geometry captured at
//! pointer-down. Only the edges named by the anchor move; the opposite edge
//! stays where it was. The moving edge is snapped, then held so that the
//! element keeps at least `MIN_ELEMENT_SIZE` on that axis and stays inside
//! the canvas.
//!
//! West and north handles clamp the same way east and south do: the left
//! edge never passes `right - MIN_ELEMENT_SIZE` and never goes below zero,
//! so the anchored right edge is fixed for the whole gesture.
//!
//! The rectangle is the element's unrotated box. Pointer deltas are applied
//! in canvas axes even when the element is rotated.

#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH, MIN_ELEMENT_SIZE};
use crate::doc::{ElementId, Slide};
use crate::error::EditError;
use crate::hit::ResizeAnchor;
use crate::input::ResizeState;
use crate::lock::LockRegistry;
use crate::mapper::{self, Point, PreviewRect, Rect};
use crate::snap::GridSnap;

/// Capture the start of a resize from `anchor`.
///
/// The captured geometry is normalized first, so the edge ranges in
/// [`resize_rect`] are never empty, even for an element stored outside the
/// canvas.
///
/// # Errors
///
/// Returns `Locked` or `NotFound` for an invalid target.
pub fn begin(
    slide: &Slide,
    id: &ElementId,
    locks: &LockRegistry,
    anchor: ResizeAnchor,
    pointer: Point,
    preview: PreviewRect,
) -> Result<ResizeState, EditError> {
    locks.check(id)?;
    let mut start = slide.element(id).ok_or(EditError::NotFound(*id))?.clone();
    start.normalize();
    Ok(ResizeState { id: *id, anchor, origin: pointer, start: start.rect(), preview })
}

/// The rectangle produced by moving `anchor` by a logical `delta` from `start`.
#[must_use]
pub fn resize_rect(start: Rect, anchor: ResizeAnchor, delta: Point, snap: &GridSnap) -> Rect {
    let mut out = start;
    let right = start.x + start.width;
    let bottom = start.y + start.height;

    if anchor.moves_east() {
        let edge = snap.snap_within(right + delta.x, start.x + MIN_ELEMENT_SIZE, CANVAS_WIDTH);
        out.width = edge - start.x;
    } else if anchor.moves_west() {
        let edge = snap.snap_within(start.x + delta.x, 0.0, right - MIN_ELEMENT_SIZE);
        out.x = edge;
        out.width = right - edge;
    }

    if anchor.moves_south() {
        let edge = snap.snap_within(bottom + delta.y, start.y + MIN_ELEMENT_SIZE, CANVAS_HEIGHT);
        out.height = edge - start.y;
    } else if anchor.moves_north() {
        let edge = snap.snap_within(start.y + delta.y, 0.0, bottom - MIN_ELEMENT_SIZE);
        out.y = edge;
        out.height = bottom - edge;
    }

    out
}

/// Resize the element to follow `pointer`.
///
/// # Errors
///
/// Returns `Locked` / `NotFound` if the target became invalid, or
/// `DegenerateLayout` if the captured preview has no area.
pub fn apply(
    state: &ResizeState,
    slide: &Slide,
    locks: &LockRegistry,
    snap: &GridSnap,
    pointer: Point,
) -> Result<Slide, EditError> {
    locks.check(&state.id)?;
    let delta =
        mapper::delta_to_logical(pointer.delta_from(state.origin), &state.preview).ok_or(EditError::DegenerateLayout)?;
    let rect = resize_rect(state.start, state.anchor, delta, snap);

    let mut next = slide.clone();
    let el = next.element_mut(&state.id).ok_or(EditError::NotFound(state.id))?;
    el.x = rect.x;
    el.y = rect.y;
    el.width = rect.width;
    el.height = rect.height;

    next.touch();
    Ok(next)
}
