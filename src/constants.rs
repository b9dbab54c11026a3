// Browser-side tuning constants: DOM ids, gesture windows, lighting and the
// fixed post-processing stack.

// DOM element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const CONFIG_ID: &str = "letter-config";
pub const FULLSCREEN_PROMPT_ID: &str = "fullscreen-prompt";
pub const FULLSCREEN_ACCEPT_ID: &str = "fullscreen-accept";
pub const HINT_ID: &str = "hint-overlay";
pub const LETTER_ID: &str = "letter-overlay";
pub const LETTER_LINES_ID: &str = "letter-lines";
pub const LETTER_CLOSE_ID: &str = "letter-close";
pub const LETTER_LINE_ID_PREFIX: &str = "letter-line-";

// Fullscreen entry points, standard first, then the Safari prefix
pub const FULLSCREEN_METHODS: [&str; 2] = ["requestFullscreen", "webkitRequestFullscreen"];

// Gestures (CSS pixels / milliseconds)
pub const DOUBLE_TAP_WINDOW_MS: f64 = 300.0;
pub const DOUBLE_TAP_MAX_DISTANCE_PX: f32 = 30.0;
pub const DRAG_THRESHOLD_PX: f32 = 6.0;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.3;
pub const LIGHT_POSITION: [f32; 3] = [5.0, 5.0, 5.0];
pub const LIGHT_INTENSITY: f32 = 1.0;
pub const ENVIRONMENT_STRENGTH: f32 = 0.6; // warm "sunset" fill

// Frame clamp so a backgrounded tab does not spin the heart on return
pub const MAX_FRAME_DT_SEC: f32 = 0.25;

// Post-processing: bloom -> noise -> vignette
pub const BLOOM_THRESHOLD: f32 = 0.0;
pub const BLOOM_SMOOTHING: f32 = 0.9;
pub const BLOOM_INTENSITY: f32 = 1.0;
pub const NOISE_OPACITY: f32 = 0.02;
pub const VIGNETTE_OFFSET: f32 = 0.1;
pub const VIGNETTE_DARKNESS: f32 = 1.1;
