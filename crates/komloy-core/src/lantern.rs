//! Floating lantern field: a fixed pool of drifting lights recycled in place.
//!
//! Every tick each lantern drifts by its velocity and advances its flame clock.
//! Lanterns that leave the culling box around the anchor are respawned inside
//! the viewing window with fresh position and velocity. The flame clock is
//! never touched by a respawn, so recycled lanterns keep flickering smoothly.

use glam::Vec3;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::constants::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Lantern {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Monotonic flame clock in radians; never wrapped.
    pub flame_phase: f32,
}

impl Lantern {
    pub fn new(position: Vec3, velocity: Vec3, flame_phase: f32) -> Self {
        Self {
            position,
            velocity,
            flame_phase,
        }
    }

    /// Core brightness in \[0, 1\], derived from the flame clock.
    #[inline]
    pub fn core_pulse(&self) -> f32 {
        (self.flame_phase.sin() + 1.0) * 0.5
    }

    /// Drift one tick and advance the flame clock.
    #[inline]
    pub fn advance(&mut self) {
        self.position += self.velocity;
        self.flame_phase += FLAME_PHASE_STEP;
    }

    /// Reset position and velocity around `anchor`. Flame phase is kept.
    pub fn respawn<R: Rng + ?Sized>(&mut self, anchor: Vec3, ranges: &SpawnRanges, rng: &mut R) {
        self.position.y = anchor.y + ranges.respawn_height.sample(rng);
        self.position.x = anchor.x + ranges.horizontal.sample(rng);
        self.position.z = anchor.z + ranges.horizontal.sample(rng);
        self.velocity = ranges.drift(rng);
    }
}

/// Axis-aligned culling volume around an anchor. Bounds are inclusive: only a
/// strict violation on some axis culls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CullBox {
    pub min_y: f32,
    pub max_y: f32,
    pub center_x: f32,
    pub center_z: f32,
    pub horizontal_radius: f32,
}

impl CullBox {
    pub fn around(anchor: Vec3) -> Self {
        Self {
            min_y: anchor.y - CULL_FLOOR_OFFSET,
            max_y: anchor.y + CULL_CEILING_OFFSET,
            center_x: anchor.x,
            center_z: anchor.z,
            horizontal_radius: CULL_HORIZONTAL_RADIUS,
        }
    }

    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        !(p.y < self.min_y
            || p.y > self.max_y
            || (p.x - self.center_x).abs() > self.horizontal_radius
            || (p.z - self.center_z).abs() > self.horizontal_radius)
    }
}

/// The uniform ranges lanterns are drawn from.
#[derive(Clone, Debug)]
pub struct SpawnRanges {
    pub respawn_height: Uniform<f32>,
    pub horizontal: Uniform<f32>,
    pub initial_height: Uniform<f32>,
    pub drift_horizontal: Uniform<f32>,
    pub drift_vertical: Uniform<f32>,
    pub flame_offset: Uniform<f32>,
}

impl Default for SpawnRanges {
    fn default() -> Self {
        let u = |(lo, hi): (f32, f32)| Uniform::new(lo, hi);
        Self {
            respawn_height: u(RESPAWN_HEIGHT_RANGE),
            horizontal: u(RESPAWN_HORIZONTAL_RANGE),
            initial_height: u(INITIAL_HEIGHT_RANGE),
            drift_horizontal: u(DRIFT_HORIZONTAL_RANGE),
            drift_vertical: u(DRIFT_VERTICAL_RANGE),
            flame_offset: u(FLAME_OFFSET_RANGE),
        }
    }
}

impl SpawnRanges {
    /// Fresh drift velocity; the vertical component is always positive.
    pub fn drift<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let x = self.drift_horizontal.sample(rng);
        let y = self.drift_vertical.sample(rng);
        let z = self.drift_horizontal.sample(rng);
        Vec3::new(x, y, z)
    }
}

pub struct LanternField {
    lanterns: Vec<Lantern>,
    ranges: SpawnRanges,
}

impl LanternField {
    /// Populate `count` lanterns in a box around `anchor`.
    pub fn new<R: Rng + ?Sized>(count: usize, anchor: Vec3, rng: &mut R) -> Self {
        let ranges = SpawnRanges::default();
        let lanterns = (0..count)
            .map(|_| {
                let position = Vec3::new(
                    anchor.x + ranges.horizontal.sample(rng),
                    anchor.y + ranges.initial_height.sample(rng),
                    anchor.z + ranges.horizontal.sample(rng),
                );
                let velocity = ranges.drift(rng);
                Lantern::new(position, velocity, ranges.flame_offset.sample(rng))
            })
            .collect::<Vec<_>>();
        log::info!(
            "[lanterns] spawned {} around ({:.1},{:.1},{:.1})",
            lanterns.len(),
            anchor.x,
            anchor.y,
            anchor.z
        );
        Self { lanterns, ranges }
    }

    pub fn from_lanterns(lanterns: Vec<Lantern>) -> Self {
        Self {
            lanterns,
            ranges: SpawnRanges::default(),
        }
    }

    pub fn lanterns(&self) -> &[Lantern] {
        &self.lanterns
    }

    pub fn len(&self) -> usize {
        self.lanterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanterns.is_empty()
    }

    pub fn ranges(&self) -> &SpawnRanges {
        &self.ranges
    }

    /// Advance every lantern one fixed tick and recycle the ones that left the
    /// culling box around `anchor`. Returns how many were respawned.
    pub fn update<R: Rng + ?Sized>(&mut self, anchor: Vec3, rng: &mut R) -> usize {
        let bounds = CullBox::around(anchor);
        let mut respawned = 0usize;
        for lantern in &mut self.lanterns {
            lantern.advance();
            if !bounds.contains(lantern.position) {
                lantern.respawn(anchor, &self.ranges, rng);
                respawned += 1;
            }
        }
        if respawned > 0 {
            log::trace!("[lanterns] respawned {respawned}");
        }
        respawned
    }
}
