use thiserror::Error;

/// Rejected scene configuration. The simulation itself has no error paths.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("lantern count must be at least 1")]
    NoLanterns,
    #[error("pitch range [{min}, {max}] is empty")]
    InvertedPitchRange { min: f32, max: f32 },
    #[error("pitch limit {0} is outside [-90, 90]")]
    PitchOutOfRange(f32),
    #[error("{name} must be finite and positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
}
