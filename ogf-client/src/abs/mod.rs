//! Thin wrappers over SDL2 and OpenGL: window management, event
//! translation, shaders, textures and GPU meshes.

pub mod drawable;
pub mod event;
pub mod mesh;
pub mod shader;
pub mod texture;
pub mod window;

pub use drawable::*;
pub use event::*;
pub use mesh::*;
pub use shader::*;
pub use texture::*;
pub use window::*;
