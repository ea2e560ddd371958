//! CPU-side meshes.
//!
//! A [`Mesh`] is an indexed triangle list of [`Vertex3D`] values. Meshes are
//! created by importing a model file (see [`Mesh::load_from_file`]) or from
//! raw buffers, and are immutable afterwards.

mod obj;
mod vertex;

use std::path::Path;

pub use vertex::Vertex3D;

use crate::{Error, Result, io::file_extension};

/// An indexed triangle mesh.
///
/// Every index is smaller than the number of vertices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex3D>,
    indices: Vec<u32>,
}

impl Mesh {
    /// Creates a mesh from raw buffers, checking every index against the
    /// vertex count.
    pub fn new(vertices: Vec<Vertex3D>, indices: Vec<u32>) -> Result<Self> {
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
            return Err(Error::IndexOutOfRange {
                index,
                vertex_count: vertices.len(),
            });
        }
        Ok(Self { vertices, indices })
    }

    /// Loads a mesh from a model file, picking the importer by extension.
    ///
    /// Only ASCII Wavefront OBJ is supported. Vertices are deduplicated, so
    /// corners sharing position, texture coordinates and normal share an index.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match file_extension(path) {
            Some(ext) if ext.eq_ignore_ascii_case("obj") => Self::load_obj(path),
            _ => Err(Error::UnknownModelFormat(path.display().to_string())),
        }
    }

    pub fn vertices(&self) -> &[Vertex3D] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the mesh has nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use super::*;

    #[test]
    fn test_new_checks_indices() {
        let vertices = vec![
            Vertex3D::new(Vec3::ZERO, Vec2::ZERO, Vec3::Z),
            Vertex3D::new(Vec3::X, Vec2::X, Vec3::Z),
            Vertex3D::new(Vec3::Y, Vec2::Y, Vec3::Z),
        ];
        let mesh = Mesh::new(vertices.clone(), vec![0, 1, 2]).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.index_count(), 3);
        assert!(!mesh.is_empty());

        match Mesh::new(vertices, vec![0, 1, 3]) {
            Err(Error::IndexOutOfRange {
                index: 3,
                vertex_count: 3,
            }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_format_names_the_file() {
        let err = Mesh::load_from_file("assets/model.xyz").unwrap_err();
        assert!(matches!(err, Error::UnknownModelFormat(_)));
        assert!(err.to_string().contains("model.xyz"));
    }

    #[test]
    fn test_no_extension_is_unknown_format() {
        let err = Mesh::load_from_file("assets/model").unwrap_err();
        assert!(matches!(err, Error::UnknownModelFormat(_)));
    }
}
