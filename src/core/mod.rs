pub mod config;
pub mod constants;
pub mod geometry;
pub mod orbit;
pub mod particles;
pub mod reveal;
pub mod rotation;
pub mod session;

pub use config::*;
pub use constants::*;
pub use geometry::*;
pub use orbit::*;
pub use particles::*;
pub use reveal::*;
pub use rotation::*;
pub use session::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
