//! Errors raised by the SDL/OpenGL side of the framework.

use thiserror::Error;

use crate::abs::ShaderType;

#[derive(Debug, Error)]
pub enum Error {
    #[error("SDL error: {0}")]
    Sdl(String),
    #[error("Failed to create the window: {0}")]
    WindowBuild(#[from] sdl2::video::WindowBuildError),
    #[error("The window is closed")]
    WindowClosed,
    #[error("OpenGL error: {0}")]
    Gl(String),
    #[error("Failed to compile {stage} shader: {log}")]
    ShaderCompile { stage: ShaderType, log: String },
    #[error("Failed to link shader program: {0}")]
    ShaderLink(String),
    #[error("Failed to set up logging: {0}")]
    Logger(#[from] fern::InitError),
    #[error(transparent)]
    Core(#[from] ogf_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
