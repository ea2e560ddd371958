//! Vector and color types.
//!
//! Vectors come straight from [`glam`]; this module only re-exports the ones
//! the framework works with and adds the [`Color`] type.

pub mod color;

pub use color::Color;
pub use glam::{DVec2, DVec3, IVec2, IVec3, Mat4, UVec2, UVec3, Vec2, Vec3, Vec4};
