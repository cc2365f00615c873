//! Host-facing editor core.
//!
//! [`EditorCore`] owns everything one editing session needs: the slide being
//! edited, the snap policy, locks, the gesture controller, the preview
//! rectangle, the current selection and the session's media. Pointer events
//! go in, [`Action`]s come out; the host renders and persists whatever the
//! actions describe.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::{debug, info};

use crate::align::{self, Alignment};
use crate::config::EditorConfig;
use crate::consts::HANDLE_RADIUS;
use crate::doc::{ElementId, MediaElement, PartialMediaElement, Slide};
use crate::error::EditError;
use crate::gesture::GestureController;
use crate::hit::{self, HitPart};
use crate::library::{MediaLibrary, MediaLibraryItem, Upload};
use crate::lock::LockRegistry;
use crate::mapper::{self, Point, PreviewRect};
use crate::media::{MediaId, MediaResourceManager};
use crate::snap::GridSnap;
use crate::{repo, zorder};

const CURSOR_DEFAULT: &str = "default";
const CURSOR_MOVE: &str = "move";
const CURSOR_ROTATE: &str = "grab";
const CURSOR_LOCKED: &str = "not-allowed";

/// Actions returned to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    /// The slide was replaced; persist / re-render this value.
    SlideChanged(Slide),
    SelectionChanged(Option<ElementId>),
    SetCursor(String),
}

/// Core editor state for one session.
#[derive(Debug)]
pub struct EditorCore {
    pub slide: Slide,
    pub config: EditorConfig,
    pub snap: GridSnap,
    pub locks: LockRegistry,
    pub gestures: GestureController,
    /// Where the host renders the slide, in device pixels.
    pub preview: PreviewRect,
    pub selected: Option<ElementId>,
    pub media: MediaResourceManager,
    pub library: MediaLibrary,
}

impl Default for EditorCore {
    fn default() -> Self {
        Self::new(EditorConfig::default(), Slide::new(""))
    }
}

impl EditorCore {
    /// Elements of `slide` are normalized into the canvas on the way in.
    #[must_use]
    pub fn new(config: EditorConfig, mut slide: Slide) -> Self {
        slide.normalize_elements();
        Self {
            slide,
            snap: config.snap(),
            locks: LockRegistry::new(),
            gestures: GestureController::new(),
            preview: PreviewRect::default(),
            selected: None,
            media: MediaResourceManager::new(),
            library: MediaLibrary::new(config.inline_asset_limit_bytes),
            config,
        }
    }

    // --- Data inputs ---

    /// Replace the slide being edited.
    ///
    /// Any gesture is abandoned. Locks and selection that name elements no
    /// longer present are dropped. Elements outside the canvas or below the
    /// minimum size are normalized before any controller sees them.
    pub fn load_slide(&mut self, mut slide: Slide) {
        self.gestures.cancel();
        let normalized = slide.normalize_elements();
        if normalized > 0 {
            debug!(slide = %slide.id, normalized, "out-of-bounds elements normalized on load");
        }
        self.locks.retain_existing(&slide);
        if self.selected.is_some_and(|id| slide.element(&id).is_none()) {
            self.selected = None;
        }
        debug!(slide = %slide.id, elements = slide.elements.len(), "slide loaded");
        self.slide = slide;
    }

    /// Record the current preview rectangle.
    pub fn set_preview(&mut self, preview: PreviewRect) {
        self.preview = preview;
    }

    /// Swap in a new configuration.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` when the config fails validation; nothing changes.
    pub fn set_config(&mut self, config: EditorConfig) -> Result<(), EditError> {
        config.validate()?;
        self.snap = config.snap();
        self.library.set_inline_limit(config.inline_asset_limit_bytes);
        self.config = config;
        Ok(())
    }

    pub fn set_snap_enabled(&mut self, enabled: bool) {
        self.config.snap_enabled = enabled;
        self.snap.enabled = enabled;
    }

    // --- Pointer input ---

    /// Pointer pressed at a device-space point.
    ///
    /// Selects whatever is under the pointer and starts the matching
    /// gesture: a handle of the selected element wins over bodies, and a
    /// body starts a drag. Locked elements are selected but not grabbed.
    pub fn on_pointer_down(&mut self, device: Point) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.gestures.is_active() {
            debug!("pointer down during active gesture ignored");
            return actions;
        }
        let Some(logical) = mapper::to_logical(device, &self.preview) else {
            debug!("pointer down before preview layout ignored");
            return actions;
        };

        let Some(found) = hit::hit_test(&self.slide, logical, self.selected, self.handle_radius()) else {
            if self.selected.take().is_some() {
                actions.push(Action::SelectionChanged(None));
            }
            return actions;
        };

        if self.selected != Some(found.element_id) {
            self.selected = Some(found.element_id);
            actions.push(Action::SelectionChanged(self.selected));
        }

        match self.begin_gesture(&found.element_id, found.part, device) {
            Ok(cursor) => actions.push(cursor),
            Err(e) => debug!(id = %found.element_id, code = e.error_code(), "gesture not started"),
        }
        actions
    }

    /// Start a gesture on an explicit target, for hosts that do their own
    /// hit-testing. Returns the cursor to show while the gesture runs.
    ///
    /// # Errors
    ///
    /// `GestureInProgress`, `Locked`, `NotFound`, or `DegenerateLayout`
    /// (rotation only).
    pub fn begin_gesture(&mut self, id: &ElementId, part: HitPart, device: Point) -> Result<Action, EditError> {
        let cursor = match part {
            HitPart::Body => {
                self.gestures.begin_drag(&self.slide, id, &self.locks, device, self.preview)?;
                CURSOR_MOVE
            }
            HitPart::ResizeHandle(anchor) => {
                self.gestures.begin_resize(&self.slide, id, &self.locks, anchor, device, self.preview)?;
                anchor.cursor()
            }
            HitPart::RotateHandle => {
                self.gestures.begin_rotate(&self.slide, id, &self.locks, device, self.preview)?;
                CURSOR_ROTATE
            }
        };
        Ok(Action::SetCursor(cursor.into()))
    }

    /// Pointer moved. Drives the active gesture, or reports a hover cursor
    /// while idle.
    pub fn on_pointer_move(&mut self, device: Point) -> Vec<Action> {
        if !self.gestures.is_active() {
            return vec![Action::SetCursor(self.hover_cursor(device).into())];
        }
        match self.gestures.update(&self.slide, &self.locks, &self.snap, device) {
            Ok(next) => {
                self.slide = next;
                vec![Action::SlideChanged(self.slide.clone())]
            }
            Err(EditError::NotFound(id)) => {
                let mut actions = vec![Action::SetCursor(CURSOR_DEFAULT.into())];
                if self.selected == Some(id) {
                    self.selected = None;
                    actions.push(Action::SelectionChanged(None));
                }
                actions
            }
            Err(e) => {
                debug!(code = e.error_code(), "gesture update dropped");
                Vec::new()
            }
        }
    }

    /// Pointer released: commit the gesture.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        match self.gestures.end() {
            Some(_) => vec![Action::SetCursor(CURSOR_DEFAULT.into())],
            None => Vec::new(),
        }
    }

    /// Pointer left the preview: abandon the gesture. Geometry already
    /// written by earlier moves stays.
    pub fn pointer_left(&mut self) -> Vec<Action> {
        match self.gestures.cancel() {
            Some(_) => vec![Action::SetCursor(CURSOR_DEFAULT.into())],
            None => Vec::new(),
        }
    }

    fn handle_radius(&self) -> f64 {
        // Handles are a fixed size on screen, so their logical radius grows
        // as the preview shrinks.
        mapper::scale(&self.preview).map_or(HANDLE_RADIUS, |(sx, _)| HANDLE_RADIUS * sx)
    }

    fn hover_cursor(&self, device: Point) -> &'static str {
        let Some(logical) = mapper::to_logical(device, &self.preview) else {
            return CURSOR_DEFAULT;
        };
        match hit::hit_test(&self.slide, logical, self.selected, self.handle_radius()) {
            None => CURSOR_DEFAULT,
            Some(found) if self.locks.is_locked(&found.element_id) => CURSOR_LOCKED,
            Some(found) => match found.part {
                HitPart::Body => CURSOR_MOVE,
                HitPart::ResizeHandle(anchor) => anchor.cursor(),
                HitPart::RotateHandle => CURSOR_ROTATE,
            },
        }
    }

    // --- Element commands ---

    fn commit(&mut self, next: Slide) -> Action {
        self.slide = next;
        Action::SlideChanged(self.slide.clone())
    }

    pub fn add_element(&mut self, element: MediaElement) -> Action {
        let next = repo::add_element(&self.slide, element);
        self.commit(next)
    }

    /// Place a library item on the slide.
    ///
    /// # Errors
    ///
    /// `NotFound` when the library has no item with this id.
    pub fn add_library_item(&mut self, media_id: &MediaId) -> Result<(ElementId, Action), EditError> {
        let item = self.library.get(media_id).ok_or(EditError::NotFound(*media_id))?;
        let (next, id) = repo::add_library_item(&self.slide, item);
        Ok((id, self.commit(next)))
    }

    /// # Errors
    ///
    /// `NotFound` when the element is absent.
    pub fn update_element(&mut self, id: &ElementId, partial: &PartialMediaElement) -> Result<Action, EditError> {
        let next = repo::update_element(&self.slide, id, partial, &self.snap)?;
        Ok(self.commit(next))
    }

    /// Remove an element along with its lock, selection and any gesture on it.
    ///
    /// # Errors
    ///
    /// `NotFound` when the element is absent.
    pub fn remove_element(&mut self, id: &ElementId) -> Result<Action, EditError> {
        let next = repo::remove_element(&self.slide, id)?;
        self.locks.unlock(id);
        if self.gestures.target() == Some(*id) {
            self.gestures.cancel();
        }
        if self.selected == Some(*id) {
            self.selected = None;
        }
        Ok(self.commit(next))
    }

    /// # Errors
    ///
    /// `NotFound` when the element is absent.
    pub fn duplicate_element(&mut self, id: &ElementId) -> Result<(ElementId, Action), EditError> {
        let (next, copy) = repo::duplicate_element(&self.slide, id, &self.snap)?;
        Ok((copy, self.commit(next)))
    }

    /// # Errors
    ///
    /// `Locked` or `NotFound`.
    pub fn bring_to_front(&mut self, id: &ElementId) -> Result<Action, EditError> {
        let next = zorder::bring_to_front(&self.slide, id, &self.locks)?;
        Ok(self.commit(next))
    }

    /// # Errors
    ///
    /// `Locked` or `NotFound`.
    pub fn send_to_back(&mut self, id: &ElementId) -> Result<Action, EditError> {
        let next = zorder::send_to_back(&self.slide, id, &self.locks)?;
        Ok(self.commit(next))
    }

    /// # Errors
    ///
    /// `Locked` or `NotFound`.
    pub fn align(&mut self, id: &ElementId, alignment: Alignment) -> Result<Action, EditError> {
        let next = align::align(&self.slide, id, alignment, &self.locks, &self.snap)?;
        Ok(self.commit(next))
    }

    /// Flip the lock on an element and return the new state.
    ///
    /// # Errors
    ///
    /// `NotFound` when the element is absent.
    pub fn toggle_lock(&mut self, id: &ElementId) -> Result<bool, EditError> {
        if self.slide.element(id).is_none() {
            return Err(EditError::NotFound(*id));
        }
        let locked = self.locks.toggle(*id);
        debug!(%id, locked, "lock toggled");
        Ok(locked)
    }

    // --- Media ---

    pub fn import_media(&mut self, upload: Upload) -> MediaLibraryItem {
        self.library.import(&mut self.media, upload)
    }

    /// Remove a library item, revoking its handle if it has one. Elements
    /// already placed from it are left alone.
    pub fn remove_media(&mut self, id: &MediaId) -> Option<MediaLibraryItem> {
        self.library.remove(&mut self.media, id)
    }

    /// Tear the session down: abandon any gesture, revoke every handle and
    /// forget the ephemeral library items. Returns how many handles were
    /// revoked.
    pub fn end_session(&mut self) -> usize {
        self.gestures.cancel();
        let revoked = self.media.revoke_all();
        let dropped = self.library.drop_ephemeral();
        info!(slide = %self.slide.id, revoked, dropped, "editing session ended");
        revoked
    }

    // --- Queries ---

    #[must_use]
    pub fn selection(&self) -> Option<ElementId> {
        self.selected
    }

    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&MediaElement> {
        self.slide.element(id)
    }

    #[must_use]
    pub fn is_locked(&self, id: &ElementId) -> bool {
        self.locks.is_locked(id)
    }
}
