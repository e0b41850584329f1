pub mod booking;
pub mod constants;
pub mod content;
pub mod glider;
#[cfg(feature = "gpu")]
pub mod gpu;
pub mod random;
pub mod scene;
pub mod timer;
pub static SCENE_WGSL: &str = include_str!("../shaders/glider.wgsl");

pub use booking::*;
pub use constants::*;
pub use content::{Language, Translations, UnknownLanguage};
pub use glider::*;
pub use random::*;
pub use scene::*;
pub use timer::*;
