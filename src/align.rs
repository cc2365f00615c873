//! Alignment of a single element against the canvas edges and centre lines.

#[cfg(test)]
#[path = "align_test.rs"]
mod align_test;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::doc::{ElementId, Slide};
use crate::error::EditError;
use crate::lock::LockRegistry;
use crate::snap::GridSnap;

/// Where to put the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Top,
    Middle,
    Bottom,
}

/// Move the element according to `alignment`.
///
/// Edge alignments are flush with the canvas. Centre alignments are snapped,
/// kept inside the canvas. An element larger than the canvas is shrunk to
/// fit first.
///
/// # Errors
///
/// Returns `Locked` or `NotFound` for an invalid target.
pub fn align(
    slide: &Slide,
    id: &ElementId,
    alignment: Alignment,
    locks: &LockRegistry,
    snap: &GridSnap,
) -> Result<Slide, EditError> {
    locks.check(id)?;
    let mut next = slide.clone();
    let el = next.element_mut(id).ok_or(EditError::NotFound(*id))?;
    el.normalize();

    let max_x = CANVAS_WIDTH - el.width;
    let max_y = CANVAS_HEIGHT - el.height;
    match alignment {
        Alignment::Left => el.x = 0.0,
        Alignment::Right => el.x = max_x,
        Alignment::Center => el.x = snap.snap_within(max_x / 2.0, 0.0, max_x),
        Alignment::Top => el.y = 0.0,
        Alignment::Bottom => el.y = max_y,
        Alignment::Middle => el.y = snap.snap_within(max_y / 2.0, 0.0, max_y),
    }
    debug!(%id, ?alignment, x = el.x, y = el.y, "element aligned");

    next.touch();
    Ok(next)
}
