// Scene and overlay tuning constants shared by the core and the web frontend.

// Heart solid
pub const HEART_CURVE_DIVISIONS: usize = 12; // samples per bezier segment
pub const EXTRUDE_DEPTH: f32 = 0.5;
pub const BEVEL_THICKNESS: f32 = 0.2;
pub const BEVEL_SIZE: f32 = 0.2;
pub const BEVEL_SEGMENTS: u32 = 2;
pub const MAX_MITER_LENGTH: f32 = 2.0; // caps bevel offsets at sharp corners
pub const HEART_SCALE: f32 = 0.5;

// "hotpink" in linear RGB
pub const HEART_COLOR: [f32; 3] = [1.0, 0.141, 0.456];
pub const HEART_ROUGHNESS: f32 = 0.4;
pub const HEART_METALNESS: f32 = 0.6;

// Rotation rates (radians per second)
pub const ROTATION_RATE_X: f32 = 0.3;
pub const ROTATION_RATE_Y: f32 = 0.5;

// Particle field
pub const PARTICLE_COUNT: usize = 1000;
pub const PARTICLE_BASE_RADIUS: f32 = 10.0;
pub const PARTICLE_RADIUS_MIN_FACTOR: f32 = 0.8;
pub const PARTICLE_RADIUS_SPAN_FACTOR: f32 = 0.4;
pub const PARTICLE_SIZE: f32 = 0.2;
pub const PARTICLE_OPACITY: f32 = 0.9;
pub const PARTICLE_ALPHA_TEST: f32 = 0.5;

// Camera
pub const CAMERA_DISTANCE: f32 = 10.0;
pub const CAMERA_FOVY_DEGREES: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const AUTO_ROTATE_SPEED: f32 = 2.0; // 2.0 = one orbit every 30 s
pub const POLAR_EPSILON: f32 = 0.01;

// Overlay timing
pub const HINT_DELAY_MS: i32 = 10_000;
pub const LINE_STAGGER_SEC: f32 = 0.5;
