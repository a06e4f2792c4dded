//! Viewer orientation and position driven by pointer drags and directional keys.
//!
//! Angles are kept in degrees at this boundary and converted to radians only
//! inside the directional math. The convention is right-handed, Y-up, with the
//! camera looking down -Z at yaw 0.

use glam::{Mat4, Vec3};

use crate::constants::{FREE_CAMERA_START, FREE_PITCH_RANGE, MOUSE_SENSITIVITY};

/// Directional keys held during a tick. Several may be active at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveKeys {
    #[inline]
    pub fn any(&self) -> bool {
        self.forward || self.back || self.left || self.right
    }
}

/// Unit facing vector on the ground plane for a yaw in degrees.
#[inline]
pub fn facing(yaw_deg: f32) -> Vec3 {
    let yaw = yaw_deg.to_radians();
    Vec3::new(yaw.sin(), 0.0, -yaw.cos())
}

/// Unit strafe-right vector on the ground plane for a yaw in degrees.
#[inline]
pub fn strafe_right(yaw_deg: f32) -> Vec3 {
    let yaw = yaw_deg.to_radians();
    Vec3::new(yaw.cos(), 0.0, yaw.sin())
}

/// Sum of the active direction vectors scaled by `speed`.
///
/// Diagonals are not normalized, so holding forward and right moves
/// `sqrt(2) * speed` per tick.
pub fn planar_displacement(yaw_deg: f32, keys: MoveKeys, speed: f32) -> Vec3 {
    let fwd = facing(yaw_deg);
    let right = strafe_right(yaw_deg);
    let mut delta = Vec3::ZERO;
    if keys.forward {
        delta += fwd * speed;
    }
    if keys.back {
        delta -= fwd * speed;
    }
    if keys.left {
        delta -= right * speed;
    }
    if keys.right {
        delta += right * speed;
    }
    delta
}

#[derive(Clone, Debug)]
pub struct CameraState {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub sensitivity: f32,
    pub pitch_min: f32,
    pub pitch_max: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: Vec3::from(FREE_CAMERA_START),
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: MOUSE_SENSITIVITY,
            pitch_min: FREE_PITCH_RANGE.0,
            pitch_max: FREE_PITCH_RANGE.1,
        }
    }
}

impl CameraState {
    pub fn new(position: Vec3, sensitivity: f32, pitch_range: (f32, f32)) -> Self {
        Self {
            position,
            sensitivity,
            pitch_min: pitch_range.0,
            pitch_max: pitch_range.1,
            ..Self::default()
        }
    }

    /// Apply a pointer delta in pixels. Only call while a drag is active.
    ///
    /// Dragging up (negative `delta_y`) tilts the view up.
    pub fn apply_drag(&mut self, delta_x: f32, delta_y: f32) {
        self.yaw += delta_x * self.sensitivity;
        self.pitch -= delta_y * self.sensitivity;
        self.pitch = self.pitch.clamp(self.pitch_min, self.pitch_max);
    }

    pub fn apply_movement(&mut self, keys: MoveKeys, speed: f32) {
        self.position += planar_displacement(self.yaw, keys, speed);
    }

    /// Unit look direction from yaw and pitch.
    pub fn look_direction(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        Vec3::new(
            pitch.cos() * yaw.sin(),
            pitch.sin(),
            -pitch.cos() * yaw.cos(),
        )
    }

    /// Returns `(eye, target)` for a look-at view matrix.
    pub fn look_target(&self) -> (Vec3, Vec3) {
        (self.position, self.position + self.look_direction())
    }

    pub fn view_matrix(&self) -> Mat4 {
        let (eye, target) = self.look_target();
        Mat4::look_at_rh(eye, target, Vec3::Y)
    }
}
