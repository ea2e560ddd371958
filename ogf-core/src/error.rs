//! Error type shared by every fallible operation in `ogf-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown model format: \"{0}\".")]
    UnknownModelFormat(String),
    #[error("Failed to load OBJ \"{path}\": {source}")]
    Obj {
        path: String,
        #[source]
        source: tobj::LoadError,
    },
    #[error("Mesh has more than {} unique vertices", u32::MAX)]
    TooManyVertices,
    #[error("Index {index} is out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },
    #[error("Failed to read \"{path}\": {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to process image \"{path}\": {source}")]
    Image {
        path: String,
        #[source]
        source: ::image::ImageError,
    },
    #[error("Expected {expected} bytes of RGBA8 pixel data, got {actual}")]
    ImageSize { expected: usize, actual: usize },
    #[error("Pixel ({x}, {y}) is outside of a {width}x{height} image")]
    PixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
