//! Startup configuration for a scene.

use crate::constants::{
    AVATAR_MOVE_SPEED, FREE_CAMERA_SPEED, FREE_PITCH_RANGE, LANTERN_COUNT, MOUSE_SENSITIVITY,
};
use crate::error::ConfigError;
use crate::scene::ViewMode;

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub lantern_count: usize,
    /// Fixed seed for a repeatable run; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub view_mode: ViewMode,
    pub avatar_speed: f32,
    pub camera_speed: f32,
    pub sensitivity: f32,
    pub pitch_min: f32,
    pub pitch_max: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            lantern_count: LANTERN_COUNT,
            seed: None,
            view_mode: ViewMode::ThirdPerson,
            avatar_speed: AVATAR_MOVE_SPEED,
            camera_speed: FREE_CAMERA_SPEED,
            sensitivity: MOUSE_SENSITIVITY,
            pitch_min: FREE_PITCH_RANGE.0,
            pitch_max: FREE_PITCH_RANGE.1,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lantern_count == 0 {
            return Err(ConfigError::NoLanterns);
        }
        for limit in [self.pitch_min, self.pitch_max] {
            if !(-90.0..=90.0).contains(&limit) {
                return Err(ConfigError::PitchOutOfRange(limit));
            }
        }
        if self.pitch_min > self.pitch_max {
            return Err(ConfigError::InvertedPitchRange {
                min: self.pitch_min,
                max: self.pitch_max,
            });
        }
        positive("avatar_speed", self.avatar_speed)?;
        positive("camera_speed", self.camera_speed)?;
        positive("sensitivity", self.sensitivity)?;
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}
