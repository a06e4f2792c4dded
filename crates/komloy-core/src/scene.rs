//! One owned scene: controllers, lantern field, flame table and random source.
//!
//! Per tick: drained input drives the active controller, the anchor is
//! resolved from it, then the lantern field advances around that anchor.

use glam::{Mat4, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::avatar::{Avatar, OrbitRig};
use crate::camera::{CameraState, MoveKeys};
use crate::config::SceneConfig;
use crate::constants::{FIRST_PERSON_EYE_HEIGHT, FOVY_DEG, FREE_CAMERA_START, ZFAR, ZNEAR};
use crate::error::ConfigError;
use crate::flame::{generate_flame_shapes, FlameShapes};
use crate::input::InputState;
use crate::lantern::LanternField;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Fly camera; lanterns follow the camera.
    Free,
    /// Chase camera behind the walking figure; lanterns follow the figure.
    #[default]
    ThirdPerson,
    /// Eyes of the walking figure.
    FirstPerson,
}

impl ViewMode {
    pub fn next(self) -> Self {
        match self {
            ViewMode::Free => ViewMode::ThirdPerson,
            ViewMode::ThirdPerson => ViewMode::FirstPerson,
            ViewMode::FirstPerson => ViewMode::Free,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ViewMode::Free => "free",
            ViewMode::ThirdPerson => "third-person",
            ViewMode::FirstPerson => "first-person",
        }
    }
}

/// What happened during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickReport {
    pub anchor: Vec3,
    pub respawned: usize,
    pub moving: bool,
}

pub struct Scene<R: Rng = StdRng> {
    pub camera: CameraState,
    pub avatar: Avatar,
    pub rig: OrbitRig,
    pub field: LanternField,
    pub flames: FlameShapes,
    mode: ViewMode,
    avatar_speed: f32,
    camera_speed: f32,
    rng: R,
}

impl Scene<StdRng> {
    pub fn new(config: &SceneConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Scene<R> {
    pub fn with_rng(config: &SceneConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut camera = CameraState::new(
            Vec3::from(FREE_CAMERA_START),
            config.sensitivity,
            (config.pitch_min, config.pitch_max),
        );
        let avatar = Avatar::default();
        let rig = OrbitRig {
            sensitivity: config.sensitivity,
            ..OrbitRig::default()
        };
        if config.view_mode == ViewMode::FirstPerson {
            camera.position = avatar.position + Vec3::Y * FIRST_PERSON_EYE_HEIGHT;
        }
        let flames = generate_flame_shapes(&mut rng);
        let anchor = match config.view_mode {
            ViewMode::Free => camera.position,
            _ => avatar.position,
        };
        let field = LanternField::new(config.lantern_count, anchor, &mut rng);
        Ok(Self {
            camera,
            avatar,
            rig,
            field,
            flames,
            mode: config.view_mode,
            avatar_speed: config.avatar_speed,
            camera_speed: config.camera_speed,
            rng,
        })
    }

    pub fn view_mode(&self) -> ViewMode {
        self.mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if mode == self.mode {
            return;
        }
        if mode == ViewMode::FirstPerson {
            self.camera.yaw = self.avatar.yaw;
            self.camera.pitch = 0.0;
            self.camera.position = self.avatar.position + Vec3::Y * FIRST_PERSON_EYE_HEIGHT;
        }
        log::info!("[scene] view {} -> {}", self.mode.name(), mode.name());
        self.mode = mode;
    }

    /// World point the lantern culling box is centred on.
    pub fn anchor(&self) -> Vec3 {
        match self.mode {
            ViewMode::Free => self.camera.position,
            ViewMode::ThirdPerson | ViewMode::FirstPerson => self.avatar.position,
        }
    }

    pub fn avatar_visible(&self) -> bool {
        self.mode != ViewMode::FirstPerson
    }

    /// Run one fixed simulation step from the input accumulated so far.
    pub fn tick(&mut self, input: &mut InputState) -> TickReport {
        let drag = input.take_drag();
        let keys = input.keys;
        let moving = match self.mode {
            ViewMode::Free => {
                if let Some(d) = drag {
                    self.camera.apply_drag(d.x, d.y);
                }
                self.camera.apply_movement(keys, self.camera_speed);
                keys.any()
            }
            ViewMode::ThirdPerson => {
                if let Some(d) = drag {
                    self.rig.apply_drag(&mut self.avatar, d.x, d.y);
                }
                self.avatar.step(keys, self.avatar_speed)
            }
            ViewMode::FirstPerson => {
                if let Some(d) = drag {
                    self.camera.apply_drag(d.x, d.y);
                }
                self.avatar.yaw = self.camera.yaw;
                let moving = self.avatar.step(keys, self.avatar_speed);
                self.camera.position = self.avatar.position + Vec3::Y * FIRST_PERSON_EYE_HEIGHT;
                moving
            }
        };
        if self.mode == ViewMode::Free {
            // Figure stands still while the camera flies.
            self.avatar.step(MoveKeys::default(), 0.0);
        }
        let anchor = self.anchor();
        let respawned = self.field.update(anchor, &mut self.rng);
        TickReport {
            anchor,
            respawned,
            moving,
        }
    }

    /// Returns `(eye, target)` for the active view.
    pub fn eye_and_target(&self) -> (Vec3, Vec3) {
        match self.mode {
            ViewMode::ThirdPerson => self.rig.eye_and_target(&self.avatar),
            ViewMode::Free | ViewMode::FirstPerson => self.camera.look_target(),
        }
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let (eye, target) = self.eye_and_target();
        let view = Mat4::look_at_rh(eye, target, Vec3::Y);
        let proj = Mat4::perspective_rh(FOVY_DEG.to_radians(), aspect, ZNEAR, ZFAR);
        proj * view
    }
}
