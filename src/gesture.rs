//! Gesture controller: the `Idle -> Dragging | Resizing | Rotating -> Idle`
//! state machine.
//!
//! At most one gesture runs at a time. The controller owns only the gesture
//! record; the slide is passed in and a new slide comes back, so cancelling
//! never has anything to undo.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use tracing::debug;

use crate::doc::{ElementId, Slide};
use crate::error::EditError;
use crate::hit::ResizeAnchor;
use crate::input::GestureState;
use crate::lock::LockRegistry;
use crate::mapper::{Point, PreviewRect};
use crate::snap::GridSnap;
use crate::{drag, resize, rotate};

#[derive(Debug, Default)]
pub struct GestureController {
    state: GestureState,
}

impl GestureController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.state.is_idle()
    }

    /// Element targeted by the active gesture.
    #[must_use]
    pub fn target(&self) -> Option<ElementId> {
        self.state.target()
    }

    // --- Begin ---

    /// Start dragging `id`.
    ///
    /// # Errors
    ///
    /// `GestureInProgress` if a gesture is already active, otherwise the
    /// errors of [`drag::begin`].
    pub fn begin_drag(
        &mut self,
        slide: &Slide,
        id: &ElementId,
        locks: &LockRegistry,
        pointer: Point,
        preview: PreviewRect,
    ) -> Result<(), EditError> {
        self.ensure_idle()?;
        let state = drag::begin(slide, id, locks, pointer, preview)?;
        debug!(%id, "drag started");
        self.state = GestureState::Dragging(state);
        Ok(())
    }

    /// Start resizing `id` from `anchor`.
    ///
    /// # Errors
    ///
    /// `GestureInProgress` if a gesture is already active, otherwise the
    /// errors of [`resize::begin`].
    pub fn begin_resize(
        &mut self,
        slide: &Slide,
        id: &ElementId,
        locks: &LockRegistry,
        anchor: ResizeAnchor,
        pointer: Point,
        preview: PreviewRect,
    ) -> Result<(), EditError> {
        self.ensure_idle()?;
        let state = resize::begin(slide, id, locks, anchor, pointer, preview)?;
        debug!(%id, anchor = ?anchor, "resize started");
        self.state = GestureState::Resizing(state);
        Ok(())
    }

    /// Start rotating `id`.
    ///
    /// # Errors
    ///
    /// `GestureInProgress` if a gesture is already active, otherwise the
    /// errors of [`rotate::begin`].
    pub fn begin_rotate(
        &mut self,
        slide: &Slide,
        id: &ElementId,
        locks: &LockRegistry,
        pointer: Point,
        preview: PreviewRect,
    ) -> Result<(), EditError> {
        self.ensure_idle()?;
        let state = rotate::begin(slide, id, locks, pointer, preview)?;
        debug!(%id, "rotate started");
        self.state = GestureState::Rotating(state);
        Ok(())
    }

    fn ensure_idle(&self) -> Result<(), EditError> {
        if self.is_active() {
            return Err(EditError::GestureInProgress);
        }
        Ok(())
    }

    // --- Update ---

    /// Feed a pointer move to the active gesture and return the updated slide.
    ///
    /// A target that disappeared cancels the gesture. A locked target or an
    /// unlaid-out preview rejects this one update and keeps the gesture.
    ///
    /// # Errors
    ///
    /// `NoActiveGesture` when idle, otherwise whatever the active controller
    /// reports.
    pub fn update(
        &mut self,
        slide: &Slide,
        locks: &LockRegistry,
        snap: &GridSnap,
        pointer: Point,
    ) -> Result<Slide, EditError> {
        let result = match &self.state {
            GestureState::Idle => return Err(EditError::NoActiveGesture),
            GestureState::Dragging(s) => drag::apply(s, slide, locks, snap, pointer),
            GestureState::Resizing(s) => resize::apply(s, slide, locks, snap, pointer),
            GestureState::Rotating(s) => rotate::apply(s, slide, locks, pointer),
        };
        if let Err(EditError::NotFound(id)) = &result {
            debug!(%id, "gesture target vanished; cancelling");
            self.state = GestureState::Idle;
        }
        result
    }

    // --- End ---

    /// Finish the active gesture. The last update already holds the final
    /// geometry, so nothing is written here.
    pub fn end(&mut self) -> Option<ElementId> {
        let target = self.target();
        if let Some(id) = target {
            debug!(%id, "gesture ended");
        }
        self.state = GestureState::Idle;
        target
    }

    /// Abandon the active gesture.
    pub fn cancel(&mut self) -> Option<ElementId> {
        let target = self.target();
        if let Some(id) = target {
            debug!(%id, "gesture cancelled");
        }
        self.state = GestureState::Idle;
        target
    }
}
