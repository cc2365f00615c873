use uuid::Uuid;

use super::*;
use crate::doc::{MediaElement, MediaKind};
use crate::mapper::Rect;

fn slide_with_z(zs: &[i64]) -> (Slide, Vec<ElementId>) {
    let mut slide = Slide::new("Layers");
    let mut ids = Vec::new();
    for &z in zs {
        let mut el = MediaElement::new(MediaKind::Image, "src", "alt", Rect::new(0.0, 0.0, 100.0, 100.0));
        el.z_index = z;
        ids.push(el.id);
        slide.elements.push(el);
    }
    (slide, ids)
}

fn z_of(slide: &Slide, id: &ElementId) -> i64 {
    slide.element(id).unwrap().z_index
}

#[test]
fn bring_to_front_is_max_plus_one() {
    let (slide, ids) = slide_with_z(&[1, 5, 3]);
    let next = bring_to_front(&slide, &ids[0], &LockRegistry::new()).unwrap();
    assert_eq!(z_of(&next, &ids[0]), 6);
    // Others untouched, original untouched.
    assert_eq!(z_of(&next, &ids[1]), 5);
    assert_eq!(z_of(&next, &ids[2]), 3);
    assert_eq!(z_of(&slide, &ids[0]), 1);
}

#[test]
fn send_to_back_is_min_minus_one() {
    let (slide, ids) = slide_with_z(&[4, 5, 3]);
    let next = send_to_back(&slide, &ids[1], &LockRegistry::new()).unwrap();
    assert_eq!(z_of(&next, &ids[1]), 2);
}

#[test]
fn send_to_back_floors_at_one() {
    let (slide, ids) = slide_with_z(&[1, 2]);
    let next = send_to_back(&slide, &ids[1], &LockRegistry::new()).unwrap();
    assert_eq!(z_of(&next, &ids[1]), 1);
}

#[test]
fn front_then_back_on_single_element_is_one() {
    let (slide, ids) = slide_with_z(&[1]);
    let locks = LockRegistry::new();
    let front = bring_to_front(&slide, &ids[0], &locks).unwrap();
    assert_eq!(z_of(&front, &ids[0]), 2);
    let back = send_to_back(&front, &ids[0], &locks).unwrap();
    assert_eq!(z_of(&back, &ids[0]), 1);
}

#[test]
fn locked_element_is_rejected() {
    let (slide, ids) = slide_with_z(&[1, 2]);
    let locks: LockRegistry = [ids[0]].into_iter().collect();
    assert_eq!(bring_to_front(&slide, &ids[0], &locks), Err(EditError::Locked(ids[0])));
    assert_eq!(send_to_back(&slide, &ids[0], &locks), Err(EditError::Locked(ids[0])));
}

#[test]
fn missing_element_is_rejected() {
    let (slide, _) = slide_with_z(&[1, 2]);
    let ghost = Uuid::new_v4();
    assert_eq!(bring_to_front(&slide, &ghost, &LockRegistry::new()), Err(EditError::NotFound(ghost)));
}

#[test]
fn empty_slide_is_not_found() {
    let slide = Slide::new("Empty");
    let ghost = Uuid::new_v4();
    assert_eq!(send_to_back(&slide, &ghost, &LockRegistry::new()), Err(EditError::NotFound(ghost)));
}
