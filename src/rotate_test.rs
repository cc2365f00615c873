use uuid::Uuid;

use super::*;
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::doc::{MediaElement, MediaKind};
use crate::mapper::Rect;

fn native_preview() -> PreviewRect {
    Rect::new(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT)
}

/// 200x100 element centred on (300, 200).
fn setup(rotation: f64) -> (Slide, ElementId) {
    let mut slide = Slide::new("Rotate");
    let mut el = MediaElement::new(MediaKind::Image, "src", "alt", Rect::new(200.0, 150.0, 200.0, 100.0));
    el.rotation = rotation;
    let id = el.id;
    slide.elements.push(el);
    (slide, id)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn rotation(slide: &Slide, id: &ElementId) -> f64 {
    slide.element(id).unwrap().rotation
}

#[test]
fn angle_is_clockwise_in_screen_space() {
    let c = Point::new(0.0, 0.0);
    assert!(approx(angle_deg(c, Point::new(10.0, 0.0)), 0.0));
    assert!(approx(angle_deg(c, Point::new(0.0, 10.0)), 90.0));
    assert!(approx(angle_deg(c, Point::new(0.0, -10.0)), -90.0));
}

#[test]
fn begin_captures_pivot_and_angle() {
    let (slide, id) = setup(15.0);
    let state = begin(&slide, &id, &LockRegistry::new(), Point::new(300.0, 100.0), native_preview()).unwrap();
    assert_eq!(state.center, Point::new(300.0, 200.0));
    assert!(approx(state.start_angle, -90.0));
    assert!(approx(state.start_rotation, 15.0));
}

#[test]
fn quarter_sweep_adds_ninety() {
    let (slide, id) = setup(0.0);
    let locks = LockRegistry::new();
    // From straight above the centre to straight right of it.
    let state = begin(&slide, &id, &locks, Point::new(300.0, 100.0), native_preview()).unwrap();
    let next = apply(&state, &slide, &locks, Point::new(400.0, 200.0)).unwrap();
    assert!(approx(rotation(&next, &id), 90.0));
}

#[test]
fn rotation_wraps_into_range() {
    let (slide, id) = setup(170.0);
    let locks = LockRegistry::new();
    let state = begin(&slide, &id, &locks, Point::new(300.0, 100.0), native_preview()).unwrap();
    let next = apply(&state, &slide, &locks, Point::new(400.0, 200.0)).unwrap();
    assert!(approx(rotation(&next, &id), -100.0));
}

#[test]
fn scaled_preview_maps_pointer_first() {
    let (slide, id) = setup(0.0);
    let locks = LockRegistry::new();
    let preview = Rect::new(10.0, 10.0, 600.0, 337.5);
    // Logical (300, 100) and (400, 200) at half scale, offset by 10.
    let state = begin(&slide, &id, &locks, Point::new(160.0, 60.0), preview).unwrap();
    let next = apply(&state, &slide, &locks, Point::new(210.0, 110.0)).unwrap();
    assert!(approx(rotation(&next, &id), 90.0));
}

#[test]
fn geometry_is_untouched() {
    let (slide, id) = setup(0.0);
    let locks = LockRegistry::new();
    let state = begin(&slide, &id, &locks, Point::new(300.0, 100.0), native_preview()).unwrap();
    let next = apply(&state, &slide, &locks, Point::new(100.0, 300.0)).unwrap();
    assert_eq!(next.element(&id).unwrap().rect(), slide.element(&id).unwrap().rect());
}

#[test]
fn begin_rejects_locked_and_missing() {
    let (slide, id) = setup(0.0);
    let locks: LockRegistry = [id].into_iter().collect();
    assert_eq!(
        begin(&slide, &id, &locks, Point::new(0.0, 0.0), native_preview()),
        Err(EditError::Locked(id))
    );
    let ghost = Uuid::new_v4();
    assert_eq!(
        begin(&slide, &ghost, &LockRegistry::new(), Point::new(0.0, 0.0), native_preview()),
        Err(EditError::NotFound(ghost))
    );
}

#[test]
fn begin_with_degenerate_preview_fails() {
    let (slide, id) = setup(0.0);
    assert_eq!(
        begin(&slide, &id, &LockRegistry::new(), Point::new(0.0, 0.0), Rect::default()),
        Err(EditError::DegenerateLayout)
    );
}
