// Host-side tests for pointer drag and key tracking.

use glam::Vec2;
use komloy_core::*;

#[test]
fn motion_without_press_is_ignored() {
    let mut drag = PointerDrag::default();
    assert_eq!(drag.motion(10.0, 10.0), None);
    let mut input = InputState::default();
    input.pointer_moved(50.0, 50.0);
    assert_eq!(input.take_drag(), None);
}

#[test]
fn drag_reports_deltas_from_last_position() {
    let mut drag = PointerDrag::default();
    drag.press(100.0, 100.0);
    assert_eq!(drag.motion(110.0, 95.0), Some(Vec2::new(10.0, -5.0)));
    assert_eq!(drag.motion(110.0, 90.0), Some(Vec2::new(0.0, -5.0)));
    drag.release();
    assert!(!drag.is_active());
    assert_eq!(drag.motion(0.0, 0.0), None);
}

#[test]
fn drag_accumulates_until_taken() {
    let mut input = InputState::default();
    input.pointer_pressed(0.0, 0.0);
    input.pointer_moved(3.0, 1.0);
    input.pointer_moved(5.0, -2.0);
    assert_eq!(input.take_drag(), Some(Vec2::new(5.0, -2.0)));
    assert_eq!(input.take_drag(), None);
}

#[test]
fn keys_toggle_independently() {
    let mut input = InputState::default();
    input.set_key(Direction::Forward, true);
    input.set_key(Direction::Right, true);
    assert!(input.keys.forward && input.keys.right);
    assert!(!input.keys.back && !input.keys.left);
    input.set_key(Direction::Forward, false);
    assert!(!input.keys.forward && input.keys.right);
}

#[test]
fn clear_releases_everything() {
    let mut input = InputState::default();
    input.set_key(Direction::Back, true);
    input.pointer_pressed(1.0, 1.0);
    input.pointer_moved(4.0, 4.0);
    input.clear();
    assert!(!input.keys.any());
    assert!(!input.pointer.is_active());
    assert_eq!(input.take_drag(), None);
}
