//! The SDL2 and OpenGL half of OGF: windows, events, shaders, textures and
//! GPU meshes. CPU-side data (meshes, images, config) lives in `ogf-core`.

pub mod abs;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
pub use ogf_core;
