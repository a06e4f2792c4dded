// Shared simulation and tuning constants used by the core and the native front-end.
//
// Distances are world units, angles are degrees unless the name says otherwise,
// and per-tick quantities assume the fixed tick interval below.

// Lantern population
pub const LANTERN_COUNT: usize = 1500;
pub const FLAME_PHASE_STEP: f32 = 0.05; // flame clock advance per tick

// Culling volume around the anchor
pub const CULL_FLOOR_OFFSET: f32 = 1.0; // below anchor
pub const CULL_CEILING_OFFSET: f32 = 37.5; // above anchor
pub const CULL_HORIZONTAL_RADIUS: f32 = 50.0; // per axis, not radial

// Random ranges (half-open, low..high)
pub const RESPAWN_HEIGHT_RANGE: (f32, f32) = (0.0, 35.0);
pub const RESPAWN_HORIZONTAL_RANGE: (f32, f32) = (-50.0, 50.0);
pub const INITIAL_HEIGHT_RANGE: (f32, f32) = (-10.0, 50.0);
pub const DRIFT_HORIZONTAL_RANGE: (f32, f32) = (-0.005, 0.005);
pub const DRIFT_VERTICAL_RANGE: (f32, f32) = (0.01, 0.03);
pub const FLAME_OFFSET_RANGE: (f32, f32) = (0.0, 100.0);

// Flame silhouette
pub const FLAME_SHAPE_COUNT: usize = 5;
pub const FLAME_LAYERS: usize = 10;
pub const FLAME_LAYER_YAW_STEP_DEG: f32 = 18.0;
pub const FLAME_WOBBLE_DEG: f32 = 5.0;

// Camera
pub const MOUSE_SENSITIVITY: f32 = 0.5; // degrees per pixel
pub const FREE_PITCH_RANGE: (f32, f32) = (-89.0, 60.0);
pub const ORBIT_PITCH_RANGE: (f32, f32) = (-89.0, 89.0);
pub const FREE_CAMERA_START: [f32; 3] = [0.0, 1.5, 10.0];
pub const FREE_CAMERA_SPEED: f32 = 0.5;
pub const FOVY_DEG: f32 = 45.0;
pub const ZNEAR: f32 = 0.1;
pub const ZFAR: f32 = 500.0;

// Avatar
pub const AVATAR_MOVE_SPEED: f32 = 2.0; // units per tick
pub const WALK_CYCLE_STEP: f32 = 0.1;
pub const LIMB_SWING_DEG: f32 = 45.0;
pub const FIRST_PERSON_EYE_HEIGHT: f32 = 1.25;

// Third-person rig
pub const ORBIT_DISTANCE: f32 = 8.0;
pub const ORBIT_HEIGHT: f32 = 1.5;
pub const ORBIT_START_ELEVATION: f32 = 20.0;
pub const ORBIT_LOOK_HEIGHT: f32 = 0.5;

// Scheduling
pub const TICK_INTERVAL_MS: u64 = 16;
pub const MAX_CATCH_UP_TICKS: u32 = 5;

// Palette
pub const NIGHT_SKY_RGB: [f32; 3] = [0.0, 0.0, 0.1];
pub const PAPER_RGBA: [f32; 4] = [1.0, 0.9, 0.7, 0.95];
