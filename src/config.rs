/// Repulsion timing: the pairwise pass runs on the fixed clock, independent
/// of the render frame rate.
pub const REPULSION_HZ: f64 = 60.0;

/// Entropy / random walk
pub const DEFAULT_ENTROPY: f32 = 1.0;
pub const ENTROPY_STEP: f32 = 0.1;
pub const ACCELERATION_PER_ENTROPY: f32 = 20.0;
pub const MAX_VELOCITY_PER_ENTROPY: f32 = 1.5;

/// Repulsion spring constant applied to the overlap depth.
pub const REPULSION_STIFFNESS: f32 = 0.3;

/// Mouse blob smoothing: `current += (target - current) / MOUSE_LERP_SPEED`
pub const MOUSE_LERP_SPEED: f32 = 20.0;
pub const MOUSE_BLOB_RADIUS: f32 = 150.0;
pub const MOUSE_BLOB_COLOR: [u8; 3] = [255, 255, 255];

/// Spawned blob ranges
pub const SPAWN_SOLID_RADIUS_MIN: f32 = 50.0;
pub const SPAWN_SOLID_RADIUS_SPAN: f32 = 300.0;
pub const SPAWN_GLOW_EXTRA_MIN: f32 = 200.0;
pub const SPAWN_GLOW_EXTRA_SPAN: f32 = 500.0;
pub const SPAWN_MAX_SPEED: f32 = 5.0;

/// Rendering
pub const GLOW_ALPHA: f32 = 0.35;
pub const MOUSE_BLOB_ALPHA: f32 = 0.15;

/// Two left presses closer together than this count as a double click.
pub const DOUBLE_CLICK_SECS: f64 = 0.3;
