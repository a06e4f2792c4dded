//! Platform-neutral input model.
//!
//! The windowing layer feeds pointer and key transitions in; the scene drains
//! one tick's worth of drag and the held keys out.

use glam::Vec2;

use crate::camera::MoveKeys;

/// Left-button drag tracking. Motion only produces deltas while pressed.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerDrag {
    active: bool,
    last: Vec2,
}

impl PointerDrag {
    pub fn press(&mut self, x: f32, y: f32) {
        self.active = true;
        self.last = Vec2::new(x, y);
    }

    pub fn release(&mut self) {
        self.active = false;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Delta since the previous press/motion, or `None` when not dragging.
    pub fn motion(&mut self, x: f32, y: f32) -> Option<Vec2> {
        if !self.active {
            return None;
        }
        let now = Vec2::new(x, y);
        let delta = now - self.last;
        self.last = now;
        Some(delta)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Back,
    Left,
    Right,
}

#[derive(Clone, Debug, Default)]
pub struct InputState {
    pub keys: MoveKeys,
    pub pointer: PointerDrag,
    drag: Vec2,
}

impl InputState {
    pub fn set_key(&mut self, dir: Direction, down: bool) {
        match dir {
            Direction::Forward => self.keys.forward = down,
            Direction::Back => self.keys.back = down,
            Direction::Left => self.keys.left = down,
            Direction::Right => self.keys.right = down,
        }
    }

    pub fn pointer_pressed(&mut self, x: f32, y: f32) {
        self.pointer.press(x, y);
    }

    pub fn pointer_released(&mut self) {
        self.pointer.release();
    }

    /// Accumulate pointer motion; ignored unless a drag is active.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if let Some(delta) = self.pointer.motion(x, y) {
            self.drag += delta;
        }
    }

    /// Drain the drag accumulated since the last call.
    pub fn take_drag(&mut self) -> Option<Vec2> {
        let drag = std::mem::take(&mut self.drag);
        (drag != Vec2::ZERO).then_some(drag)
    }

    /// Release everything, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.keys = MoveKeys::default();
        self.pointer.release();
        self.drag = Vec2::ZERO;
    }
}
