//! Shared flame silhouette and the pulse-driven colour/scale mapping.
//!
//! One small table of shapes is generated at startup and shared by every
//! lantern; only the flame clock fed into it differs per lantern.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use smallvec::SmallVec;

use crate::constants::{
    FLAME_LAYERS, FLAME_LAYER_YAW_STEP_DEG, FLAME_OFFSET_RANGE, FLAME_SHAPE_COUNT,
    FLAME_WOBBLE_DEG,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlameShapeDescriptor {
    pub scale_x: f32,
    pub scale_y: f32,
    /// Roll around the view axis, degrees.
    pub rotation: f32,
    pub alpha: f32,
    pub animation_offset: f32,
}

/// One of the stacked triangles that make up a flame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlameLayer {
    pub yaw_deg: f32,
    pub tip_alpha: f32,
    pub base_alpha: f32,
}

impl FlameShapeDescriptor {
    pub fn layers(&self) -> impl Iterator<Item = FlameLayer> + '_ {
        let wobble = (self.animation_offset * 3.0).sin() * FLAME_WOBBLE_DEG;
        let last = (FLAME_LAYERS - 1) as f32;
        (0..FLAME_LAYERS).map(move |i| {
            let t = i as f32 / last;
            FlameLayer {
                yaw_deg: i as f32 * FLAME_LAYER_YAW_STEP_DEG + wobble,
                tip_alpha: self.alpha * (0.8 - 0.5 * t),
                base_alpha: self.alpha * (0.2 + 0.3 * t),
            }
        })
    }
}

pub type FlameShapes = SmallVec<[FlameShapeDescriptor; FLAME_SHAPE_COUNT]>;

pub fn generate_flame_shapes<R: Rng + ?Sized>(rng: &mut R) -> FlameShapes {
    let offsets = Uniform::new(FLAME_OFFSET_RANGE.0, FLAME_OFFSET_RANGE.1);
    (0..FLAME_SHAPE_COUNT)
        .map(|_| FlameShapeDescriptor {
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
            alpha: 1.0,
            animation_offset: offsets.sample(rng),
        })
        .collect()
}

// Pulse mappings consumed by the renderer; `pulse` is a lantern's core pulse.

#[inline]
pub fn core_scale(pulse: f32) -> f32 {
    0.1 + pulse * 0.05
}

#[inline]
pub fn core_color(pulse: f32) -> [f32; 3] {
    [1.0, 0.4 + pulse * 0.6, 0.1]
}

#[inline]
pub fn flame_base_color(pulse: f32) -> [f32; 3] {
    [1.0, 0.4 + pulse * 0.3, 0.1]
}
