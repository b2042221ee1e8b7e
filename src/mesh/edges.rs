//! Edges derived from a [`TriangleMesh`], deduplicated by unordered
//! vertex-index pair (§3).

use crate::mesh::triangles::TriangleMesh;
use std::cell::RefCell;
use std::collections::HashMap;

/// An undirected edge, canonicalized so `[i, j]` with `i < j`.
pub type Edge = [u32; 2];

fn canonical(a: u32, b: u32) -> Edge {
    if a < b {
        [a, b]
    } else {
        [b, a]
    }
}

/// The deduplicated undirected edges of a [`TriangleMesh`]. Edges carry
/// no rest length of their own (§3) — that belongs to force generators
/// built over them.
#[derive(Debug, Clone)]
pub struct Edges(Vec<Edge>);

impl Edges {
    pub fn as_slice(&self) -> &[Edge] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Computes the deduplicated edge set of `mesh` directly: for each
/// directed edge of each triangle, register the unordered pair once.
pub fn compute_edges(mesh: &TriangleMesh) -> Edges {
    let mut seen = HashMap::new();
    let mut edges = Vec::new();
    for triangle in mesh.triangles() {
        for &(a, b) in &[(triangle[0], triangle[1]), (triangle[1], triangle[2]), (triangle[2], triangle[0])] {
            let key = canonical(a, b);
            if seen.insert(key, ()).is_none() {
                edges.push(key);
            }
        }
    }
    Edges(edges)
}

/// A lazily-computed, cached view over a [`TriangleMesh`]'s edges.
/// Invalidated whenever the mesh's vertex version or triangle count
/// changes — either one is evidence the triangle/vertex sets moved.
#[derive(Debug, Default)]
pub struct EdgeCache {
    cached: RefCell<Option<(u64, usize, Edges)>>,
}

impl EdgeCache {
    pub fn new() -> Self {
        Self { cached: RefCell::new(None) }
    }

    pub fn get(&self, mesh: &TriangleMesh) -> std::cell::Ref<'_, Edges> {
        let version = mesh.vertices().version();
        let triangle_count = mesh.triangle_count();

        {
            let cached = self.cached.borrow();
            if let Some((cached_version, cached_triangle_count, _)) = cached.as_ref() {
                if *cached_version == version && *cached_triangle_count == triangle_count {
                    drop(cached);
                    return std::cell::Ref::map(self.cached.borrow(), |c| &c.as_ref().unwrap().2);
                }
            }
        }

        let edges = compute_edges(mesh);
        *self.cached.borrow_mut() = Some((version, triangle_count, edges));
        std::cell::Ref::map(self.cached.borrow(), |c| &c.as_ref().unwrap().2)
    }
}
