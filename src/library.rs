//! Media library: assets uploaded during the session and reusable across slides.
//!
//! Small assets are stored inline as `data:` URLs so they survive a reload
//! with the rest of the deck. Videos, and anything over the configured inline
//! limit, become ephemeral: their bytes live in the [`MediaResourceManager`]
//! and the item only carries the handle URL. Persistence code filters those
//! out through [`MediaLibrary::persistable`].

#[cfg(test)]
#[path = "library_test.rs"]
mod library_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::consts::DEFAULT_INLINE_ASSET_LIMIT;
use crate::doc::{MediaKind, now_ms};
use crate::media::{MediaId, MediaResourceManager};

/// One uploaded asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaLibraryItem {
    pub id: MediaId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Inline `data:` URL, or a handle URL when `ephemeral`.
    pub src: String,
    /// Size of the original upload in bytes.
    pub size: usize,
    pub uploaded_at: i64,
    /// Backed by a session-scoped handle; does not survive a reload.
    #[serde(default)]
    pub ephemeral: bool,
}

/// An upload as the host hands it over.
#[derive(Debug, Clone)]
pub struct Upload {
    pub name: String,
    pub kind: MediaKind,
    /// MIME type used for the inline `data:` URL, e.g. `image/png`.
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Session media library.
#[derive(Debug, Clone)]
pub struct MediaLibrary {
    items: Vec<MediaLibraryItem>,
    inline_limit: usize,
}

impl Default for MediaLibrary {
    fn default() -> Self {
        Self::new(DEFAULT_INLINE_ASSET_LIMIT)
    }
}

impl MediaLibrary {
    /// An empty library. Uploads larger than `inline_limit` bytes become ephemeral.
    #[must_use]
    pub fn new(inline_limit: usize) -> Self {
        Self { items: Vec::new(), inline_limit }
    }

    /// Rebuild a library from persisted items. Ephemeral entries are dropped,
    /// since their handles died with the previous session.
    #[must_use]
    pub fn from_items(items: Vec<MediaLibraryItem>, inline_limit: usize) -> Self {
        let items = items.into_iter().filter(|i| !i.ephemeral).collect();
        Self { items, inline_limit }
    }

    /// Change the inline threshold. Items already imported keep their form.
    pub fn set_inline_limit(&mut self, inline_limit: usize) {
        self.inline_limit = inline_limit;
    }

    /// Whether an upload of this kind and size is kept as a live handle.
    #[must_use]
    pub fn is_ephemeral(&self, kind: MediaKind, size: usize) -> bool {
        kind == MediaKind::Video || size > self.inline_limit
    }

    /// Add an upload to the library.
    ///
    /// Inline uploads are deduplicated by name, size, and kind: importing the
    /// same file twice returns the existing item. Ephemeral uploads always get
    /// a new item and a new handle.
    pub fn import(&mut self, media: &mut MediaResourceManager, upload: Upload) -> MediaLibraryItem {
        let size = upload.bytes.len();
        let ephemeral = self.is_ephemeral(upload.kind, size);

        if !ephemeral {
            if let Some(existing) = self
                .items
                .iter()
                .find(|i| !i.ephemeral && i.name == upload.name && i.size == size && i.kind == upload.kind)
            {
                debug!(id = %existing.id, name = %existing.name, "upload matches existing library item");
                return existing.clone();
            }
        }

        let id = Uuid::new_v4();
        let src = if ephemeral {
            media.create_handle(upload.bytes, id)
        } else {
            format!("data:{};base64,{}", upload.mime, STANDARD.encode(&upload.bytes))
        };

        let item = MediaLibraryItem {
            id,
            name: upload.name,
            kind: upload.kind,
            src,
            size,
            uploaded_at: now_ms(),
            ephemeral,
        };
        info!(%id, name = %item.name, size, ephemeral, "media imported");
        self.items.push(item.clone());
        item
    }

    /// Remove an item, revoking its handle if it is ephemeral.
    pub fn remove(&mut self, media: &mut MediaResourceManager, id: &MediaId) -> Option<MediaLibraryItem> {
        let pos = self.items.iter().position(|i| i.id == *id)?;
        let item = self.items.remove(pos);
        if item.ephemeral {
            media.revoke_handle(&item.id);
        }
        debug!(%id, ephemeral = item.ephemeral, "media removed from library");
        Some(item)
    }

    /// Forget every ephemeral item. Called at session end, after the handles
    /// have been revoked. Returns how many were dropped.
    pub fn drop_ephemeral(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|i| !i.ephemeral);
        before - self.items.len()
    }

    #[must_use]
    pub fn get(&self, id: &MediaId) -> Option<&MediaLibraryItem> {
        self.items.iter().find(|i| i.id == *id)
    }

    /// All items, oldest first.
    #[must_use]
    pub fn items(&self) -> &[MediaLibraryItem] {
        &self.items
    }

    /// Items that can be written to durable storage.
    #[must_use]
    pub fn persistable(&self) -> Vec<&MediaLibraryItem> {
        self.items.iter().filter(|i| !i.ephemeral).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
