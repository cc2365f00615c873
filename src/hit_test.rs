#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::HANDLE_RADIUS;
use crate::doc::MediaKind;
use crate::mapper::Rect;

fn make_element(x: f64, y: f64, w: f64, h: f64, z: i64) -> MediaElement {
    let mut el = MediaElement::new(MediaKind::Image, "src", "alt", Rect::new(x, y, w, h));
    el.z_index = z;
    el
}

fn slide_of(elements: Vec<MediaElement>) -> Slide {
    let mut slide = Slide::new("Hit");
    slide.elements = elements;
    slide
}

// =============================================================
// ResizeAnchor
// =============================================================

#[test]
fn anchors_are_distinct() {
    for (i, a) in ResizeAnchor::ALL.iter().enumerate() {
        for (j, b) in ResizeAnchor::ALL.iter().enumerate() {
            assert_eq!(i == j, a == b);
        }
    }
}

#[test]
fn corner_anchors_move_two_edges() {
    assert!(ResizeAnchor::Nw.moves_north() && ResizeAnchor::Nw.moves_west());
    assert!(ResizeAnchor::Se.moves_south() && ResizeAnchor::Se.moves_east());
    assert!(!ResizeAnchor::Se.moves_west());
}

#[test]
fn side_anchors_move_one_edge() {
    assert!(ResizeAnchor::N.moves_north());
    assert!(!ResizeAnchor::N.moves_east() && !ResizeAnchor::N.moves_west());
    assert!(ResizeAnchor::E.moves_east());
    assert!(!ResizeAnchor::E.moves_north() && !ResizeAnchor::E.moves_south());
}

#[test]
fn anchor_cursors() {
    assert_eq!(ResizeAnchor::N.cursor(), "ns-resize");
    assert_eq!(ResizeAnchor::W.cursor(), "ew-resize");
    assert_eq!(ResizeAnchor::Sw.cursor(), "nesw-resize");
    assert_eq!(ResizeAnchor::Se.cursor(), "nwse-resize");
}

#[test]
fn anchor_serde_lowercase() {
    assert_eq!(serde_json::to_string(&ResizeAnchor::Nw).unwrap(), "\"nw\"");
    let back: ResizeAnchor = serde_json::from_str("\"se\"").unwrap();
    assert_eq!(back, ResizeAnchor::Se);
}

#[test]
fn anchor_positions() {
    let el = make_element(100.0, 100.0, 300.0, 200.0, 1);
    assert_eq!(ResizeAnchor::Nw.position(&el), Point::new(100.0, 100.0));
    assert_eq!(ResizeAnchor::Se.position(&el), Point::new(400.0, 300.0));
    assert_eq!(ResizeAnchor::N.position(&el), Point::new(250.0, 100.0));
    assert_eq!(ResizeAnchor::W.position(&el), Point::new(100.0, 200.0));
}

// =============================================================
// to_local
// =============================================================

#[test]
fn to_local_zero_rotation_is_identity() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(to_local(p, Point::new(0.0, 0.0), 0.0), p);
}

#[test]
fn to_local_undoes_quarter_turn() {
    // A point straight below the centre, after a 90° clockwise turn, was to its right.
    let p = to_local(Point::new(0.0, 10.0), Point::new(0.0, 0.0), 90.0);
    assert!((p.x - 10.0).abs() < 1e-9);
    assert!(p.y.abs() < 1e-9);
}

// =============================================================
// hit_test
// =============================================================

#[test]
fn empty_space_is_none() {
    let slide = slide_of(vec![make_element(100.0, 100.0, 100.0, 100.0, 1)]);
    assert!(hit_test(&slide, Point::new(500.0, 500.0), None, HANDLE_RADIUS).is_none());
}

#[test]
fn body_hit() {
    let el = make_element(100.0, 100.0, 100.0, 100.0, 1);
    let id = el.id;
    let slide = slide_of(vec![el]);
    let hit = hit_test(&slide, Point::new(150.0, 150.0), None, HANDLE_RADIUS).unwrap();
    assert_eq!(hit, Hit { element_id: id, part: HitPart::Body });
}

#[test]
fn topmost_element_wins() {
    let low = make_element(100.0, 100.0, 100.0, 100.0, 1);
    let high = make_element(150.0, 150.0, 100.0, 100.0, 5);
    let high_id = high.id;
    // Insertion order puts the high-z element first; z still decides.
    let slide = slide_of(vec![high, low]);
    let hit = hit_test(&slide, Point::new(175.0, 175.0), None, HANDLE_RADIUS).unwrap();
    assert_eq!(hit.element_id, high_id);
}

#[test]
fn selected_handle_beats_body_above() {
    let below = make_element(100.0, 100.0, 100.0, 100.0, 1);
    let below_id = below.id;
    let above = make_element(150.0, 150.0, 100.0, 100.0, 5);
    let slide = slide_of(vec![below, above]);
    // (200, 200) is below's SE corner and inside above's body.
    let hit = hit_test(&slide, Point::new(200.0, 200.0), Some(below_id), HANDLE_RADIUS).unwrap();
    assert_eq!(hit, Hit { element_id: below_id, part: HitPart::ResizeHandle(ResizeAnchor::Se) });
}

#[test]
fn handles_ignored_when_not_selected() {
    let el = make_element(100.0, 100.0, 100.0, 100.0, 1);
    let slide = slide_of(vec![el]);
    let hit = hit_test(&slide, Point::new(100.0, 100.0), None, HANDLE_RADIUS).unwrap();
    assert_eq!(hit.part, HitPart::Body);
}

#[test]
fn rotate_handle_above_top_edge() {
    let el = make_element(100.0, 100.0, 100.0, 100.0, 1);
    let id = el.id;
    let slide = slide_of(vec![el]);
    let p = Point::new(150.0, 100.0 - ROTATE_HANDLE_OFFSET);
    let hit = hit_test(&slide, p, Some(id), HANDLE_RADIUS).unwrap();
    assert_eq!(hit.part, HitPart::RotateHandle);
}

#[test]
fn rotated_body_uses_local_frame() {
    // 200x50 bar rotated 90° around (200, 125) covers x 175..225, y 25..225.
    let mut el = make_element(100.0, 100.0, 200.0, 50.0, 1);
    el.rotation = 90.0;
    let slide = slide_of(vec![el]);
    assert!(hit_test(&slide, Point::new(200.0, 40.0), None, HANDLE_RADIUS).is_some());
    assert!(hit_test(&slide, Point::new(110.0, 125.0), None, HANDLE_RADIUS).is_none());
}
