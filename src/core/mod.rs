pub mod cube;
pub mod lifecycle;
pub mod modal;
pub mod parallax;

pub use cube::*;
pub use lifecycle::*;
pub use modal::*;
pub use parallax::*;

// Shader bundled as a string constant
pub static LINES_WGSL: &str = include_str!("../../shaders/lines.wgsl");
