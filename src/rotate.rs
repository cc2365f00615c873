//! Rotate controller: spin an element about its centre.

#[cfg(test)]
#[path = "rotate_test.rs"]
mod rotate_test;

use crate::doc::{ElementId, Slide, normalize_degrees};
use crate::error::EditError;
use crate::input::RotateState;
use crate::lock::LockRegistry;
use crate::mapper::{self, Point, PreviewRect};

/// Angle in degrees from `center` to `p`, measured clockwise from +x in
/// screen orientation (y down).
#[must_use]
pub fn angle_deg(center: Point, p: Point) -> f64 {
    (p.y - center.y).atan2(p.x - center.x).to_degrees()
}

/// Capture the start of a rotation.
///
/// # Errors
///
/// Returns `Locked` / `NotFound` for an invalid target, or
/// `DegenerateLayout` when the pointer cannot be placed on the canvas.
pub fn begin(
    slide: &Slide,
    id: &ElementId,
    locks: &LockRegistry,
    pointer: Point,
    preview: PreviewRect,
) -> Result<RotateState, EditError> {
    locks.check(id)?;
    let el = slide.element(id).ok_or(EditError::NotFound(*id))?;
    let logical = mapper::to_logical(pointer, &preview).ok_or(EditError::DegenerateLayout)?;
    let center = el.rect().center();
    Ok(RotateState {
        id: *id,
        center,
        start_angle: angle_deg(center, logical),
        start_rotation: el.rotation,
        preview,
    })
}

/// Rotate the element by the angle the pointer has swept around the pivot.
///
/// # Errors
///
/// Returns `Locked` / `NotFound` if the target became invalid, or
/// `DegenerateLayout` if the captured preview has no area.
pub fn apply(state: &RotateState, slide: &Slide, locks: &LockRegistry, pointer: Point) -> Result<Slide, EditError> {
    locks.check(&state.id)?;
    let logical = mapper::to_logical(pointer, &state.preview).ok_or(EditError::DegenerateLayout)?;
    let swept = angle_deg(state.center, logical) - state.start_angle;

    let mut next = slide.clone();
    let el = next.element_mut(&state.id).ok_or(EditError::NotFound(state.id))?;
    el.rotation = normalize_degrees(state.start_rotation + swept);

    next.touch();
    Ok(next)
}
