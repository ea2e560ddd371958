//! Wavefront OBJ import on top of [`tobj`].
//!
//! `tobj` does the parsing and hands back flat attribute arrays per shape.
//! This module turns those into one deduplicated vertex buffer plus indices.

use std::{io::BufRead, path::Path};

use fxhash::FxHashMap;
use glam::{Vec2, Vec3};

use super::{Mesh, Vertex3D};
use crate::{Error, Result};

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: false,
        triangulate: true,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    }
}

impl Mesh {
    /// Imports an ASCII OBJ file. Materials are not loaded.
    pub fn load_obj(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Importing OBJ mesh from {:?}", path);

        let (models, _) = tobj::load_obj(path, &load_options()).map_err(|source| Error::Obj {
            path: path.display().to_string(),
            source,
        })?;

        build_mesh(&models)
    }

    /// Imports OBJ text from a reader. `mtllib` statements are ignored.
    pub fn load_obj_from_reader<R: BufRead>(mut reader: R) -> Result<Self> {
        let (models, _) = tobj::load_obj_buf(&mut reader, &load_options(), |_| {
            Err(tobj::LoadError::OpenFileFailed)
        })
        .map_err(|source| Error::Obj {
            path: "<memory>".to_string(),
            source,
        })?;

        build_mesh(&models)
    }

    /// Imports OBJ text held in a string.
    pub fn load_obj_from_str(contents: &str) -> Result<Self> {
        Self::load_obj_from_reader(contents.as_bytes())
    }
}

/// Maps vertex values to their slot in the vertex buffer while a mesh is
/// being built.
#[derive(Default)]
struct VertexCache {
    slots: FxHashMap<Vertex3D, u32>,
    vertices: Vec<Vertex3D>,
    indices: Vec<u32>,
}

impl VertexCache {
    fn push(&mut self, vertex: Vertex3D) -> Result<()> {
        let index = match self.slots.get(&vertex) {
            Some(&index) => index,
            None => {
                let index =
                    u32::try_from(self.vertices.len()).map_err(|_| Error::TooManyVertices)?;
                self.vertices.push(vertex);
                self.slots.insert(vertex, index);
                index
            }
        };
        self.indices.push(index);
        Ok(())
    }

    fn finish(self) -> Mesh {
        Mesh {
            vertices: self.vertices,
            indices: self.indices,
        }
    }
}

/// Reads the `N` floats of attribute `index` from a flat array, or zeros
/// when the shape carries no such attribute.
fn attribute<const N: usize>(data: &[f32], index: Option<&u32>) -> [f32; N] {
    index
        .and_then(|&index| {
            let start = index as usize * N;
            data.get(start..start + N)?.try_into().ok()
        })
        .unwrap_or([0.0; N])
}

// tobj rejects out-of-range face references while parsing. A corner written
// without `vt` or `vn` is given a substitute index (the previous corner's, or
// the first entry), so every index array is as long as `indices` whenever the
// matching attribute array is non-empty.
fn build_mesh(models: &[tobj::Model]) -> Result<Mesh> {
    let mut cache = VertexCache::default();

    for model in models {
        let mesh = &model.mesh;

        for (corner, position_index) in mesh.indices.iter().enumerate() {
            let position = Vec3::from(attribute::<3>(&mesh.positions, Some(position_index)));

            // OBJ puts v = 0 at the bottom of the image, GL samples from the top.
            let tex_coords = if mesh.texcoords.is_empty() {
                Vec2::ZERO
            } else {
                let [u, v] = attribute::<2>(&mesh.texcoords, mesh.texcoord_indices.get(corner));
                Vec2::new(u, 1.0 - v)
            };

            let normal = Vec3::from(attribute::<3>(
                &mesh.normals,
                mesh.normal_indices.get(corner),
            ));

            cache.push(Vertex3D::new(position, tex_coords, normal))?;
        }

        log::debug!(
            "Shape {:?}: {} corners, {} unique vertices so far",
            model.name,
            mesh.indices.len(),
            cache.vertices.len()
        );
    }

    let mesh = cache.finish();
    if mesh.is_empty() {
        log::warn!("OBJ import produced an empty mesh");
    }
    log::info!(
        "Imported mesh with {} vertices and {} indices",
        mesh.vertex_count(),
        mesh.index_count()
    );
    Ok(mesh)
}
