//! Hit-testing against media elements and their handles.
//!
//! Everything here works in logical canvas units. Elements may be rotated
//! about their centre; the probe point is rotated back into the element's
//! local frame before it is compared with the axis-aligned box and handles.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use serde::{Deserialize, Serialize};

use crate::consts::ROTATE_HANDLE_OFFSET;
use crate::doc::{ElementId, MediaElement, Slide};
use crate::mapper::Point;

/// Which part of an element was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    ResizeHandle(ResizeAnchor),
    RotateHandle,
}

/// Resize handle identity. Corners move two edges, sides move one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeAnchor {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl ResizeAnchor {
    pub const ALL: [ResizeAnchor; 8] = [
        ResizeAnchor::N,
        ResizeAnchor::Ne,
        ResizeAnchor::E,
        ResizeAnchor::Se,
        ResizeAnchor::S,
        ResizeAnchor::Sw,
        ResizeAnchor::W,
        ResizeAnchor::Nw,
    ];

    /// The handle drags the left edge.
    #[must_use]
    pub fn moves_west(self) -> bool {
        matches!(self, Self::W | Self::Nw | Self::Sw)
    }

    /// The handle drags the right edge.
    #[must_use]
    pub fn moves_east(self) -> bool {
        matches!(self, Self::E | Self::Ne | Self::Se)
    }

    /// The handle drags the top edge.
    #[must_use]
    pub fn moves_north(self) -> bool {
        matches!(self, Self::N | Self::Ne | Self::Nw)
    }

    /// The handle drags the bottom edge.
    #[must_use]
    pub fn moves_south(self) -> bool {
        matches!(self, Self::S | Self::Se | Self::Sw)
    }

    /// CSS cursor name for hovering or dragging this handle.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::N | Self::S => "ns-resize",
            Self::E | Self::W => "ew-resize",
            Self::Ne | Self::Sw => "nesw-resize",
            Self::Nw | Self::Se => "nwse-resize",
        }
    }

    /// Handle position on an unrotated element, in logical units.
    #[must_use]
    pub fn position(self, el: &MediaElement) -> Point {
        let x = if self.moves_west() {
            el.x
        } else if self.moves_east() {
            el.x + el.width
        } else {
            el.x + el.width * 0.5
        };
        let y = if self.moves_north() {
            el.y
        } else if self.moves_south() {
            el.y + el.height
        } else {
            el.y + el.height * 0.5
        };
        Point::new(x, y)
    }
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub element_id: ElementId,
    pub part: HitPart,
}

/// Rotate `p` about `center` by `-rotation_deg`, giving the point in the
/// element's unrotated frame.
#[must_use]
pub fn to_local(p: Point, center: Point, rotation_deg: f64) -> Point {
    if rotation_deg == 0.0 {
        return p;
    }
    let (sin, cos) = (-rotation_deg).to_radians().sin_cos();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point::new(center.x + dx * cos - dy * sin, center.y + dx * sin + dy * cos)
}

fn within(a: Point, b: Point, radius: f64) -> bool {
    (a.x - b.x).hypot(a.y - b.y) <= radius
}

/// Handle of `el` under `p`, if any.
#[must_use]
pub fn hit_handles(el: &MediaElement, p: Point, radius: f64) -> Option<HitPart> {
    let local = to_local(p, el.rect().center(), el.rotation);
    let rotate_handle = Point::new(el.x + el.width * 0.5, el.y - ROTATE_HANDLE_OFFSET);
    if within(local, rotate_handle, radius) {
        return Some(HitPart::RotateHandle);
    }
    ResizeAnchor::ALL
        .into_iter()
        .find(|a| within(local, a.position(el), radius))
        .map(HitPart::ResizeHandle)
}

/// Find what is under `p`.
///
/// Handles of the selected element win over everything; otherwise the
/// topmost element whose body contains the point is returned.
#[must_use]
pub fn hit_test(slide: &Slide, p: Point, selected: Option<ElementId>, radius: f64) -> Option<Hit> {
    if let Some(el) = selected.and_then(|id| slide.element(&id)) {
        if let Some(part) = hit_handles(el, p, radius) {
            return Some(Hit { element_id: el.id, part });
        }
    }
    slide
        .elements_in_draw_order()
        .into_iter()
        .rev()
        .find(|el| el.rect().contains(to_local(p, el.rect().center(), el.rotation)))
        .map(|el| Hit { element_id: el.id, part: HitPart::Body })
}
