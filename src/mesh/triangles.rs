//! Indexed triangle faces over a shared [`Vertices`] array (§3).

use crate::mesh::vertices::Vertices;

/// One triangle as an index triple into a [`Vertices`] array.
pub type Triangle = [u32; 3];

/// Owns a [`Vertices`] array and its own triangle list. Clearing or
/// extracting triangles bumps the vertex version too, so any derived
/// [`crate::mesh::edges::Edges`] cache is invalidated alongside it.
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    vertices: Vertices,
    triangles: Vec<Triangle>,
}

impl TriangleMesh {
    pub fn new(vertices: Vertices, triangles: Vec<Triangle>) -> Self {
        Self { vertices, triangles }
    }

    pub fn vertices(&self) -> &Vertices {
        &self.vertices
    }

    pub fn vertices_mut(&mut self) -> &mut Vertices {
        &mut self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn push_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn vertex_and_triangle_counts_match_construction() {
        let mesh = TriangleMesh::new(
            Vertices::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y]),
            vec![[0, 1, 2]],
        );
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
    }
}
