//! The GPU-free half of OGF. This crate holds everything the framework
//! needs that does not touch SDL or OpenGL: vertex and mesh data, OBJ
//! import, CPU-side images, colors, configuration and file helpers.

pub mod config;
pub mod error;
pub mod image;
pub mod io;
pub mod math;
pub mod mesh;

pub use error::{Error, Result};
