//! Icosahedron construction and recursive subdivision onto a sphere
//! (§4.6).

use crate::mesh::triangles::{Triangle, TriangleMesh};
use crate::mesh::vertices::Vertices;
use glam::Vec3;
use std::collections::HashMap;

/// 12 vertices, 20 faces, golden-ratio coordinates normalized onto the
/// sphere of the given radius.
pub fn icosahedron(radius: f32) -> TriangleMesh {
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;

    let raw = [
        Vec3::new(-1.0, phi, 0.0),
        Vec3::new(1.0, phi, 0.0),
        Vec3::new(-1.0, -phi, 0.0),
        Vec3::new(1.0, -phi, 0.0),
        Vec3::new(0.0, -1.0, phi),
        Vec3::new(0.0, 1.0, phi),
        Vec3::new(0.0, -1.0, -phi),
        Vec3::new(0.0, 1.0, -phi),
        Vec3::new(phi, 0.0, -1.0),
        Vec3::new(phi, 0.0, 1.0),
        Vec3::new(-phi, 0.0, -1.0),
        Vec3::new(-phi, 0.0, 1.0),
    ];

    let positions: Vec<Vec3> = raw.iter().map(|v| v.normalize() * radius).collect();

    let triangles: Vec<Triangle> = vec![
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    TriangleMesh::new(Vertices::new(positions), triangles)
}

/// For each triangle (a, b, c), creates three midpoints, deduplicated
/// across shared edges via an index map keyed on the unordered pair,
/// each projected onto the sphere of `mesh`'s average vertex distance
/// from the origin. The triangle is replaced by four (§4.6).
pub fn subdivide(mesh: &TriangleMesh) -> TriangleMesh {
    let average_radius: f32 = {
        let positions = mesh.vertices().positions();
        positions.iter().map(|p| p.length()).sum::<f32>() / positions.len() as f32
    };

    let mut positions = mesh.vertices().positions().to_vec();
    let mut midpoint_cache: HashMap<(u32, u32), u32> = HashMap::new();

    let mut midpoint = |a: u32, b: u32, positions: &mut Vec<Vec3>| -> u32 {
        let key = if a < b { (a, b) } else { (b, a) };
        if let Some(&index) = midpoint_cache.get(&key) {
            return index;
        }
        let midpoint = ((positions[a as usize] + positions[b as usize]) * 0.5).normalize() * average_radius;
        let index = positions.len() as u32;
        positions.push(midpoint);
        midpoint_cache.insert(key, index);
        index
    };

    let mut triangles = Vec::with_capacity(mesh.triangle_count() * 4);
    for &[a, b, c] in mesh.triangles() {
        let m_ab = midpoint(a, b, &mut positions);
        let m_bc = midpoint(b, c, &mut positions);
        let m_ca = midpoint(c, a, &mut positions);

        triangles.push([a, m_ab, m_ca]);
        triangles.push([b, m_bc, m_ab]);
        triangles.push([c, m_ca, m_bc]);
        triangles.push([m_ab, m_bc, m_ca]);
    }

    TriangleMesh::new(Vertices::new(positions), triangles)
}

/// `icosahedron(radius)` subdivided `k` times. Asserts the Euler-formula
/// and `F = 20·4^k` identities afterward (§4.6).
pub fn sphere(radius: f32, k: u32) -> TriangleMesh {
    let mut mesh = icosahedron(radius);
    for _ in 0..k {
        mesh = subdivide(&mesh);
    }

    let expected_faces = 20 * 4_u64.pow(k);
    assert_eq!(mesh.triangle_count() as u64, expected_faces, "subdivision must preserve F = 20*4^k");

    let v = mesh.vertex_count() as i64;
    let f = mesh.triangle_count() as i64;
    let e = crate::mesh::edges::compute_edges(&mesh).len() as i64;
    assert_eq!(v - e + f, 2, "closed triangulated sphere must satisfy Euler's formula V - E + F = 2");

    mesh
}
