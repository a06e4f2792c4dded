//! Walking figure and the third-person rig that follows it.

use glam::Vec3;

use crate::camera::{facing, planar_displacement, strafe_right, MoveKeys};
use crate::constants::{
    LIMB_SWING_DEG, MOUSE_SENSITIVITY, ORBIT_DISTANCE, ORBIT_HEIGHT, ORBIT_LOOK_HEIGHT,
    ORBIT_PITCH_RANGE, ORBIT_START_ELEVATION, WALK_CYCLE_STEP,
};

#[derive(Clone, Debug, Default)]
pub struct Avatar {
    pub position: Vec3,
    /// Facing, degrees. Movement follows it.
    pub yaw: f32,
    pub walk_cycle: f32,
}

/// A posed box of the figure in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyPart {
    pub center: Vec3,
    pub half_extents: Vec3,
    pub color: [f32; 3],
}

const TORSO_RGB: [f32; 3] = [0.0, 0.0, 1.0];
const SKIN_RGB: [f32; 3] = [1.0, 0.8, 0.6];
const PANTS_RGB: [f32; 3] = [0.2, 0.2, 0.2];

impl Avatar {
    /// Move one tick. Returns true when any key was held.
    ///
    /// The walk cycle runs while moving and snaps back to the standing pose
    /// as soon as no key is held.
    pub fn step(&mut self, keys: MoveKeys, speed: f32) -> bool {
        self.position += planar_displacement(self.yaw, keys, speed);
        let moving = keys.any();
        if moving {
            self.walk_cycle += WALK_CYCLE_STEP;
        } else {
            self.walk_cycle = 0.0;
        }
        moving
    }

    /// Arm/leg swing angle in degrees.
    #[inline]
    pub fn limb_swing(&self) -> f32 {
        self.walk_cycle.sin() * LIMB_SWING_DEG
    }

    /// Torso, head, right/left arm, right/left leg.
    pub fn parts(&self) -> [BodyPart; 6] {
        let swing = self.limb_swing().to_radians();
        let fwd = facing(self.yaw);
        let right = strafe_right(self.yaw);
        let at = |lateral: f32, height: f32| self.position + right * lateral + Vec3::Y * height;
        // Limbs hang from a pivot; swinging shifts the limb centre along facing.
        let limb = |pivot: Vec3, length: f32, angle: f32| {
            pivot - Vec3::Y * (length * 0.5 * angle.cos()) + fwd * (length * 0.5 * angle.sin())
        };
        let part = |center: Vec3, size: [f32; 3], color: [f32; 3]| BodyPart {
            center,
            half_extents: Vec3::from(size) * 0.5,
            color,
        };
        [
            part(at(0.0, 0.5), [0.6, 1.0, 0.3], TORSO_RGB),
            part(at(0.0, 1.25), [0.6, 0.6, 0.6], SKIN_RGB),
            part(limb(at(0.4, 0.9), 0.8, swing), [0.2, 0.8, 0.2], SKIN_RGB),
            part(limb(at(-0.4, 0.9), 0.8, -swing), [0.2, 0.8, 0.2], SKIN_RGB),
            part(limb(at(0.2, 0.0), 1.0, -swing), [0.25, 1.0, 0.25], PANTS_RGB),
            part(limb(at(-0.2, 0.0), 1.0, swing), [0.25, 1.0, 0.25], PANTS_RGB),
        ]
    }
}

/// Chase camera behind the avatar.
#[derive(Clone, Debug)]
pub struct OrbitRig {
    pub distance: f32,
    pub height: f32,
    /// Degrees above the avatar, clamped to the orbit range.
    pub elevation: f32,
    pub sensitivity: f32,
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self {
            distance: ORBIT_DISTANCE,
            height: ORBIT_HEIGHT,
            elevation: ORBIT_START_ELEVATION,
            sensitivity: MOUSE_SENSITIVITY,
        }
    }
}

impl OrbitRig {
    /// Horizontal drag turns the avatar, vertical drag raises the rig.
    pub fn apply_drag(&mut self, avatar: &mut Avatar, delta_x: f32, delta_y: f32) {
        avatar.yaw += delta_x * self.sensitivity;
        self.elevation += delta_y * self.sensitivity;
        self.elevation = self
            .elevation
            .clamp(ORBIT_PITCH_RANGE.0, ORBIT_PITCH_RANGE.1);
    }

    /// Returns `(eye, target)` looking at the avatar's centre.
    pub fn eye_and_target(&self, avatar: &Avatar) -> (Vec3, Vec3) {
        let back = -facing(avatar.yaw) * self.distance;
        let lift = self.height + self.distance * self.elevation.to_radians().sin();
        let eye = avatar.position + back + Vec3::Y * lift;
        let target = avatar.position + Vec3::Y * ORBIT_LOOK_HEIGHT;
        (eye, target)
    }
}
