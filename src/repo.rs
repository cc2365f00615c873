//! Element repository: add, update, remove, and duplicate media elements.
//!
//! DESIGN
//! ======
//! Every function takes the current slide by reference and returns a new
//! slide. The input is never touched, so a host that still holds an older
//! snapshot sees exactly what it had. Errors leave nothing behind.
//!
//! Geometry is normalized on the way in: whatever a caller merges, the
//! stored element satisfies the canvas invariants (inside the canvas, at
//! least `MIN_ELEMENT_SIZE` on each side).

#[cfg(test)]
#[path = "repo_test.rs"]
mod repo_test;

use tracing::debug;
use uuid::Uuid;

use crate::consts::{
    CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_ELEMENT_HEIGHT, DEFAULT_ELEMENT_ORIGIN, DEFAULT_ELEMENT_WIDTH,
    DUPLICATE_OFFSET,
};
use crate::doc::{ElementId, MediaElement, PartialMediaElement, Slide};
use crate::error::EditError;
use crate::library::MediaLibraryItem;
use crate::mapper::Rect;
use crate::snap::GridSnap;

// =============================================================================
// ADD
// =============================================================================

/// Insert an element. An element with the same id is replaced in place.
///
/// The first insertion turns a `text` slide into a `mixed` one.
#[must_use]
pub fn add_element(slide: &Slide, mut element: MediaElement) -> Slide {
    let mut next = slide.clone();
    element.normalize();
    match next.element_mut(&element.id) {
        Some(existing) => *existing = element,
        None => next.elements.push(element),
    }
    next.touch();
    next
}

/// Place a library item on the slide at the default position, on top of
/// everything already there.
///
/// Returns the new slide and the id of the created element.
#[must_use]
pub fn add_library_item(slide: &Slide, item: &MediaLibraryItem) -> (Slide, ElementId) {
    let mut element = MediaElement::new(
        item.kind,
        item.src.clone(),
        item.name.clone(),
        Rect::new(DEFAULT_ELEMENT_ORIGIN, DEFAULT_ELEMENT_ORIGIN, DEFAULT_ELEMENT_WIDTH, DEFAULT_ELEMENT_HEIGHT),
    );
    element.z_index = next_z(slide);
    let id = element.id;
    debug!(%id, item = %item.id, "library item placed on slide");
    (add_element(slide, element), id)
}

// =============================================================================
// UPDATE
// =============================================================================

/// Shallow-merge `partial` into the element.
///
/// `x` / `y` pass through the snap policy before they are stored.
///
/// # Errors
///
/// Returns `NotFound` if no element has this id.
pub fn update_element(
    slide: &Slide,
    id: &ElementId,
    partial: &PartialMediaElement,
    snap: &GridSnap,
) -> Result<Slide, EditError> {
    let mut next = slide.clone();
    let element = next.element_mut(id).ok_or(EditError::NotFound(*id))?;

    partial.apply_to(element);
    element.normalize();
    if partial.x.is_some() {
        element.x = snap.snap_within(element.x, 0.0, CANVAS_WIDTH - element.width);
    }
    if partial.y.is_some() {
        element.y = snap.snap_within(element.y, 0.0, CANVAS_HEIGHT - element.height);
    }

    next.touch();
    Ok(next)
}

// =============================================================================
// REMOVE
// =============================================================================

/// Remove an element. Removing the last element turns the slide back into `text`.
///
/// # Errors
///
/// Returns `NotFound` if no element has this id.
pub fn remove_element(slide: &Slide, id: &ElementId) -> Result<Slide, EditError> {
    let mut next = slide.clone();
    let before = next.elements.len();
    next.elements.retain(|e| e.id != *id);
    if next.elements.len() == before {
        return Err(EditError::NotFound(*id));
    }
    next.touch();
    Ok(next)
}

// =============================================================================
// DUPLICATE
// =============================================================================

/// Clone an element under a new id, offset by `DUPLICATE_OFFSET` on both axes
/// and stacked at `element count + 1`.
///
/// The offset position is snapped and kept inside the canvas, so duplicating
/// an element that already touches the bottom-right corner lands it on the
/// same spot rather than off-canvas.
///
/// # Errors
///
/// Returns `NotFound` if no element has this id.
pub fn duplicate_element(slide: &Slide, id: &ElementId, snap: &GridSnap) -> Result<(Slide, ElementId), EditError> {
    let source = slide.element(id).ok_or(EditError::NotFound(*id))?;

    let mut copy = source.clone();
    copy.id = Uuid::new_v4();
    copy.x = snap.snap_within(source.x + DUPLICATE_OFFSET, 0.0, CANVAS_WIDTH - source.width);
    copy.y = snap.snap_within(source.y + DUPLICATE_OFFSET, 0.0, CANVAS_HEIGHT - source.height);
    copy.z_index = i64::try_from(slide.elements.len()).map_or(i64::MAX, |n| n.saturating_add(1));

    let new_id = copy.id;
    let mut next = slide.clone();
    next.elements.push(copy);
    next.touch();
    debug!(source = %id, copy = %new_id, "element duplicated");
    Ok((next, new_id))
}

/// One above the highest z on the slide (1 on an empty slide).
fn next_z(slide: &Slide) -> i64 {
    slide.elements.iter().map(|e| e.z_index).max().map_or(1, |z| z.saturating_add(1))
}
