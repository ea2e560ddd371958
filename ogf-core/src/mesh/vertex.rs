//! The vertex format produced by the mesh importer.

use std::hash::{Hash, Hasher};

use glam::{Vec2, Vec3};

/// A single mesh vertex.
///
/// Equality and hashing are structural over every component. Both compare
/// the bit patterns of the floats with `-0.0` folded into `0.0`, which keeps
/// `Eq` and `Hash` consistent so the type can key a hash map.
#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct Vertex3D {
    pub position: Vec3,
    pub tex_coords: Vec2,
    pub normal: Vec3,
}

impl Vertex3D {
    pub fn new(position: Vec3, tex_coords: Vec2, normal: Vec3) -> Self {
        Self {
            position,
            tex_coords,
            normal,
        }
    }

    fn key(&self) -> [u32; 8] {
        let bits = |v: f32| (v + 0.0).to_bits();
        [
            bits(self.position.x),
            bits(self.position.y),
            bits(self.position.z),
            bits(self.tex_coords.x),
            bits(self.tex_coords.y),
            bits(self.normal.x),
            bits(self.normal.y),
            bits(self.normal.z),
        ]
    }
}

impl PartialEq for Vertex3D {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Vertex3D {}

impl Hash for Vertex3D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_structural_equality() {
        let a = Vertex3D::new(Vec3::new(1.0, 2.0, 3.0), Vec2::new(0.5, 0.5), Vec3::Z);
        let b = Vertex3D::new(Vec3::new(1.0, 2.0, 3.0), Vec2::new(0.5, 0.5), Vec3::Z);
        let c = Vertex3D::new(Vec3::new(1.0, 2.0, 3.0), Vec2::new(0.5, 0.5), Vec3::Y);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_signed_zero_is_one_key() {
        let a = Vertex3D::new(Vec3::new(0.0, 1.0, 0.0), Vec2::ZERO, Vec3::ZERO);
        let b = Vertex3D::new(Vec3::new(-0.0, 1.0, 0.0), Vec2::ZERO, Vec3::ZERO);
        assert_eq!(a, b);

        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_nan_equals_itself() {
        let a = Vertex3D::new(Vec3::new(f32::NAN, 0.0, 0.0), Vec2::ZERO, Vec3::ZERO);
        assert_eq!(a, a);
    }
}
