//! Document model: slides, their media elements, and sparse element updates.
//!
//! A [`Slide`] is a value. Nothing in this crate mutates a slide it was handed;
//! every operation clones, edits the clone, and returns it. The host owns the
//! deck and decides what to persist.
//!
//! Serialized field names are camelCase so the JSON matches what the host's
//! storage layer already reads and writes.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH, MIN_ELEMENT_SIZE};
use crate::mapper::Rect;

/// Unique identifier for a media element.
pub type ElementId = Uuid;

/// Unique identifier for a slide.
pub type SlideId = Uuid;

/// Milliseconds since the Unix epoch, or 0 if the clock is before it.
#[must_use]
pub fn now_ms() -> i64 {
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(dur.as_millis()).unwrap_or(0)
}

/// Layout variant of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideVariant {
    /// Title and body text only; no media elements.
    #[default]
    Text,
    /// Text plus one or more media elements.
    Mixed,
    /// Background image fills the slide.
    FullscreenBackground,
}

/// The kind of media an element displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// A rectangular media element placed on a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaElement {
    /// Unique identifier for this element.
    pub id: ElementId,
    /// Image or video.
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Resource reference: a data URL, a handle URL, or a remote URL.
    pub src: String,
    /// Alt / display name.
    pub alt: String,
    /// Left edge in logical canvas units.
    pub x: f64,
    /// Top edge in logical canvas units.
    pub y: f64,
    /// Width in logical canvas units.
    pub width: f64,
    /// Height in logical canvas units.
    pub height: f64,
    /// Stacking order, at least 1. Not required to be unique.
    pub z_index: i64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Clockwise rotation in degrees, in `[-180, 180]`.
    pub rotation: f64,
    /// Corner radius in logical units.
    pub border_radius: f64,
}

impl MediaElement {
    /// A fully opaque, unrotated element at the given geometry.
    #[must_use]
    pub fn new(kind: MediaKind, src: impl Into<String>, alt: impl Into<String>, rect: Rect) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            src: src.into(),
            alt: alt.into(),
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            z_index: 1,
            opacity: 1.0,
            rotation: 0.0,
            border_radius: 0.0,
        }
    }

    /// The element's bounding box.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Whether the geometry satisfies the canvas invariants.
    #[must_use]
    pub fn is_within_canvas(&self) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.width >= MIN_ELEMENT_SIZE
            && self.height >= MIN_ELEMENT_SIZE
            && self.x + self.width <= CANVAS_WIDTH
            && self.y + self.height <= CANVAS_HEIGHT
    }

    /// Force every field back inside its legal range.
    ///
    /// Size is clamped first (to `[MIN_ELEMENT_SIZE, canvas]`), then the
    /// position is clamped so the element fits.
    pub fn normalize(&mut self) {
        self.width = finite_or(self.width, MIN_ELEMENT_SIZE).clamp(MIN_ELEMENT_SIZE, CANVAS_WIDTH);
        self.height = finite_or(self.height, MIN_ELEMENT_SIZE).clamp(MIN_ELEMENT_SIZE, CANVAS_HEIGHT);
        self.x = finite_or(self.x, 0.0).clamp(0.0, CANVAS_WIDTH - self.width);
        self.y = finite_or(self.y, 0.0).clamp(0.0, CANVAS_HEIGHT - self.height);
        self.z_index = self.z_index.max(1);
        self.opacity = finite_or(self.opacity, 1.0).clamp(0.0, 1.0);
        self.rotation = normalize_degrees(finite_or(self.rotation, 0.0));
        self.border_radius = finite_or(self.border_radius, 0.0).max(0.0);
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

/// Wrap an angle in degrees into `[-180, 180]`.
#[must_use]
pub fn normalize_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    if wrapped > 180.0 { wrapped - 360.0 } else { wrapped }
}

/// Sparse update for a media element. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialMediaElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
}

impl PartialMediaElement {
    /// A position-only update.
    #[must_use]
    pub fn position(x: f64, y: f64) -> Self {
        Self { x: Some(x), y: Some(y), ..Default::default() }
    }

    /// Whether any field is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow-merge the present fields into `element`.
    pub fn apply_to(&self, element: &mut MediaElement) {
        if let Some(ref src) = self.src {
            element.src.clone_from(src);
        }
        if let Some(ref alt) = self.alt {
            element.alt.clone_from(alt);
        }
        if let Some(x) = self.x {
            element.x = x;
        }
        if let Some(y) = self.y {
            element.y = y;
        }
        if let Some(w) = self.width {
            element.width = w;
        }
        if let Some(h) = self.height {
            element.height = h;
        }
        if let Some(z) = self.z_index {
            element.z_index = z;
        }
        if let Some(o) = self.opacity {
            element.opacity = o;
        }
        if let Some(r) = self.rotation {
            element.rotation = r;
        }
        if let Some(b) = self.border_radius {
            element.border_radius = b;
        }
    }
}

/// A single slide with its ordered media elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: SlideId,
    pub title: String,
    /// Body text.
    pub content: String,
    #[serde(default)]
    pub title_hidden: bool,
    #[serde(default)]
    pub content_hidden: bool,
    pub background_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    pub background_opacity: f64,
    pub text_color: String,
    #[serde(rename = "type")]
    pub variant: SlideVariant,
    #[serde(default, rename = "mediaElements")]
    pub elements: Vec<MediaElement>,
    pub created_at: i64,
    pub updated_at: i64,
    /// Position of the slide within its deck.
    pub order: u32,
}

impl Slide {
    /// An empty text slide with the default palette.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        let now = now_ms();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: String::new(),
            title_hidden: false,
            content_hidden: false,
            background_color: "#ffffff".into(),
            background_image: None,
            background_opacity: 1.0,
            text_color: "#1f2937".into(),
            variant: SlideVariant::Text,
            elements: Vec::new(),
            created_at: now,
            updated_at: now,
            order: 0,
        }
    }

    /// Look up an element by id.
    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&MediaElement> {
        self.elements.iter().find(|e| e.id == *id)
    }

    pub(crate) fn element_mut(&mut self, id: &ElementId) -> Option<&mut MediaElement> {
        self.elements.iter_mut().find(|e| e.id == *id)
    }

    /// Elements sorted by `(z_index, insertion order)`, bottom first.
    #[must_use]
    pub fn elements_in_draw_order(&self) -> Vec<&MediaElement> {
        let mut sorted: Vec<&MediaElement> = self.elements.iter().collect();
        // Stable sort keeps insertion order among equal z values.
        sorted.sort_by_key(|e| e.z_index);
        sorted
    }

    /// Normalize every element, e.g. a slide persisted by an older editor.
    /// Returns how many elements changed.
    pub fn normalize_elements(&mut self) -> usize {
        let mut changed = 0;
        for el in &mut self.elements {
            let before = el.clone();
            el.normalize();
            if *el != before {
                changed += 1;
            }
        }
        changed
    }

    /// Re-derive `variant` from the element list and bump `updated_at`.
    pub(crate) fn touch(&mut self) {
        if self.elements.is_empty() {
            self.variant = SlideVariant::Text;
        } else if self.variant == SlideVariant::Text {
            self.variant = SlideVariant::Mixed;
        }
        self.updated_at = now_ms().max(self.updated_at);
    }
}
