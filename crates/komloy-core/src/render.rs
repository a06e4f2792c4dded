//! GPU-ready records built from read-only scene snapshots.
//!
//! Layouts match `shaders/scene.wgsl`. Everything is drawn as camera-facing
//! billboards from a single instance stream.

use glam::{Mat4, Vec3};

use crate::avatar::BodyPart;
use crate::constants::{FLAME_LAYERS, FLAME_SHAPE_COUNT, PAPER_RGBA};
use crate::flame::{core_color, core_scale, flame_base_color, FlameShapeDescriptor};
use crate::lantern::Lantern;
use crate::scene::Scene;

/// Lantern billboard width and height in world units.
pub const LANTERN_BILLBOARD: [f32; 2] = [0.8, 1.6];

pub const KIND_LANTERN: f32 = 0.0;
pub const KIND_SOLID: f32 = 1.0;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Instance {
    pub pos: [f32; 3],
    pub kind: f32,
    pub size: [f32; 2],
    pub pulse: f32,
    pub phase: f32,
    pub color: [f32; 4],
    /// Core colour and scale.
    pub glow: [f32; 4],
    /// Flame base colour; w unused.
    pub flame_base: [f32; 4],
}

impl Instance {
    pub fn lantern(l: &Lantern) -> Self {
        let pulse = l.core_pulse();
        Self {
            pos: l.position.to_array(),
            kind: KIND_LANTERN,
            size: LANTERN_BILLBOARD,
            pulse,
            phase: l.flame_phase,
            color: PAPER_RGBA,
            glow: with_w(core_color(pulse), core_scale(pulse)),
            flame_base: with_w(flame_base_color(pulse), 0.0),
        }
    }

    pub fn part(p: &BodyPart) -> Self {
        let he = p.half_extents;
        Self {
            pos: p.center.to_array(),
            kind: KIND_SOLID,
            size: [2.0 * he.x.max(he.z), 2.0 * he.y],
            pulse: 0.0,
            phase: 0.0,
            color: with_w(p.color, 1.0),
            glow: [0.0; 4],
            flame_base: [0.0; 4],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub cam_right: [f32; 4],
    pub cam_up: [f32; 4],
    /// Per shape: scale_x, scale_y, roll (radians), alpha.
    pub flames: [[f32; 4]; FLAME_SHAPE_COUNT],
    /// Per shape and layer: projected width factor, tip alpha, base alpha.
    pub layers: [[[f32; 4]; FLAME_LAYERS]; FLAME_SHAPE_COUNT],
}

impl SceneUniforms {
    pub fn new(view_proj: Mat4, eye: Vec3, target: Vec3, shapes: &[FlameShapeDescriptor]) -> Self {
        let (right, up) = billboard_axes(eye, target);
        let mut flames = [[0.0; 4]; FLAME_SHAPE_COUNT];
        let mut layers = [[[0.0; 4]; FLAME_LAYERS]; FLAME_SHAPE_COUNT];
        for ((slot, shape_layers), shape) in flames.iter_mut().zip(layers.iter_mut()).zip(shapes) {
            *slot = [
                shape.scale_x,
                shape.scale_y,
                shape.rotation.to_radians(),
                shape.alpha,
            ];
            for (dst, layer) in shape_layers.iter_mut().zip(shape.layers()) {
                // A layer turned by `yaw` around the vertical axis shows
                // |cos(yaw)| of its width on a billboard.
                let width = layer.yaw_deg.to_radians().cos().abs();
                *dst = [width, layer.tip_alpha, layer.base_alpha, 0.0];
            }
        }
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            cam_right: right.extend(0.0).to_array(),
            cam_up: up.extend(0.0).to_array(),
            flames,
            layers,
        }
    }
}

/// Camera right and up vectors for billboard expansion.
pub fn billboard_axes(eye: Vec3, target: Vec3) -> (Vec3, Vec3) {
    let forward = (target - eye).normalize_or_zero();
    let right = forward.cross(Vec3::Y).try_normalize().unwrap_or(Vec3::X);
    let up = right.cross(forward).normalize_or_zero();
    (right, up)
}

/// Fill `out` with every visible billboard, sorted far to near from `eye` so
/// alpha blending composites correctly.
pub fn build_instances<R: rand::Rng>(scene: &Scene<R>, eye: Vec3, out: &mut Vec<Instance>) {
    out.clear();
    out.extend(scene.field.lanterns().iter().map(Instance::lantern));
    if scene.avatar_visible() {
        out.extend(scene.avatar.parts().iter().map(Instance::part));
    }
    let dist = |i: &Instance| Vec3::from(i.pos).distance_squared(eye);
    out.sort_by(|a, b| dist(b).total_cmp(&dist(a)));
}

#[inline]
fn with_w(rgb: [f32; 3], w: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], w]
}
