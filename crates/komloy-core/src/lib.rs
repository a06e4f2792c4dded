pub mod avatar;
pub mod camera;
pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod flame;
pub mod input;
pub mod lantern;
pub mod render;
pub mod scene;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use avatar::*;
pub use camera::*;
pub use clock::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use flame::*;
pub use input::*;
pub use lantern::*;
pub use render::*;
pub use scene::*;
