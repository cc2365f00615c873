//! Media resource manager: lifetime of ephemeral asset handles.
//!
//! DESIGN
//! ======
//! Large assets (video above all) are not worth encoding into the persisted
//! slide state. Instead the manager keeps their bytes in memory for the
//! editing session and hands out an opaque `blob:` URL the renderer can
//! resolve. Each logical media id owns at most one live handle; minting a new
//! one for the same id revokes the old one first.
//!
//! LIFECYCLE
//! =========
//! The host constructs one manager per editing session and calls
//! [`MediaResourceManager::revoke_all`] when the session ends. A handle that
//! is never revoked keeps its bytes alive, so dropping the manager with live
//! handles revokes them and logs a warning.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::consts::HANDLE_URL_PREFIX;
use crate::error::EditError;

/// Stable id the host uses for an uploaded asset.
pub type MediaId = Uuid;

struct Handle {
    url: String,
    bytes: Arc<[u8]>,
}

/// Owner of every live ephemeral handle in an editing session.
#[derive(Default)]
pub struct MediaResourceManager {
    /// Live handles keyed by owning media id.
    handles: HashMap<MediaId, Handle>,
    /// Reverse index: handle URL -> owning media id.
    owners: HashMap<String, MediaId>,
}

impl std::fmt::Debug for MediaResourceManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaResourceManager")
            .field("live", &self.handles.len())
            .field("live_bytes", &self.live_bytes())
            .finish()
    }
}

impl MediaResourceManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `bytes` under `id` and return a fresh handle URL.
    ///
    /// Any handle `id` already owned is revoked first, so its old URL stops
    /// resolving.
    pub fn create_handle(&mut self, bytes: impl Into<Arc<[u8]>>, id: MediaId) -> String {
        self.revoke_handle(&id);

        let url = format!("{HANDLE_URL_PREFIX}{}", Uuid::new_v4());
        let bytes = bytes.into();
        debug!(%id, %url, size = bytes.len(), "media handle created");
        self.owners.insert(url.clone(), id);
        self.handles.insert(id, Handle { url: url.clone(), bytes });
        url
    }

    /// Release the handle owned by `id`. Returns `false` if there was none.
    pub fn revoke_handle(&mut self, id: &MediaId) -> bool {
        let Some(handle) = self.handles.remove(id) else {
            return false;
        };
        self.owners.remove(&handle.url);
        debug!(%id, url = %handle.url, "media handle revoked");
        true
    }

    /// Release a handle by its URL. Returns `false` if the URL is not managed.
    pub fn revoke_url(&mut self, url: &str) -> bool {
        match self.owner_of(url) {
            Some(id) => self.revoke_handle(&id),
            None => false,
        }
    }

    /// Release every live handle. Returns how many were released.
    pub fn revoke_all(&mut self) -> usize {
        let count = self.handles.len();
        self.handles.clear();
        self.owners.clear();
        if count > 0 {
            info!(count, "media handles revoked");
        }
        count
    }

    /// Whether `url` is a live handle minted by this manager.
    #[must_use]
    pub fn is_managed(&self, url: &str) -> bool {
        self.owners.contains_key(url)
    }

    /// The media id owning `url`, if it is live.
    #[must_use]
    pub fn owner_of(&self, url: &str) -> Option<MediaId> {
        self.owners.get(url).copied()
    }

    /// The live handle URL for `id`, if any.
    #[must_use]
    pub fn handle_for(&self, id: &MediaId) -> Option<&str> {
        self.handles.get(id).map(|h| h.url.as_str())
    }

    /// The bytes behind a live handle.
    #[must_use]
    pub fn resolve(&self, url: &str) -> Option<Arc<[u8]>> {
        let id = self.owners.get(url)?;
        self.handles.get(id).map(|h| Arc::clone(&h.bytes))
    }

    /// Number of live handles.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.handles.len()
    }

    /// Total bytes held by live handles.
    #[must_use]
    pub fn live_bytes(&self) -> usize {
        self.handles.values().map(|h| h.bytes.len()).sum()
    }

    /// Assert that every handle has been released.
    ///
    /// # Errors
    ///
    /// Returns `ResourceLeakDetected` with the number of handles still live.
    pub fn ensure_released(&self) -> Result<(), EditError> {
        match self.handles.len() {
            0 => Ok(()),
            live => Err(EditError::ResourceLeakDetected { live }),
        }
    }
}

impl Drop for MediaResourceManager {
    fn drop(&mut self) {
        let live = self.handles.len();
        if live > 0 {
            warn!(live, bytes = self.live_bytes(), "media manager dropped with live handles; revoking");
            self.revoke_all();
        }
    }
}
