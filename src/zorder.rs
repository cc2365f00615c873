//! Stacking order: bring to front, send to back.
//!
//! Only the target's `z_index` changes. Other elements keep their values, so
//! the sequence is allowed to have gaps and ties.

#[cfg(test)]
#[path = "zorder_test.rs"]
mod zorder_test;

use tracing::debug;

use crate::doc::{ElementId, Slide};
use crate::error::EditError;
use crate::lock::LockRegistry;

/// Set the element's `z_index` to one above the current maximum.
///
/// # Errors
///
/// Returns `Locked` or `NotFound` for an invalid target.
pub fn bring_to_front(slide: &Slide, id: &ElementId, locks: &LockRegistry) -> Result<Slide, EditError> {
    locks.check(id)?;
    let top = slide.elements.iter().map(|e| e.z_index).max().ok_or(EditError::NotFound(*id))?;
    set_z(slide, id, top.saturating_add(1))
}

/// Set the element's `z_index` to one below the current minimum, floored at 1.
///
/// # Errors
///
/// Returns `Locked` or `NotFound` for an invalid target.
pub fn send_to_back(slide: &Slide, id: &ElementId, locks: &LockRegistry) -> Result<Slide, EditError> {
    locks.check(id)?;
    let bottom = slide.elements.iter().map(|e| e.z_index).min().ok_or(EditError::NotFound(*id))?;
    set_z(slide, id, bottom.saturating_sub(1).max(1))
}

fn set_z(slide: &Slide, id: &ElementId, z: i64) -> Result<Slide, EditError> {
    let mut next = slide.clone();
    let element = next.element_mut(id).ok_or(EditError::NotFound(*id))?;
    element.z_index = z;
    debug!(%id, z, "z-order changed");
    next.touch();
    Ok(next)
}
