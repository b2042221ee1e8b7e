//! Cortex geometry: indexed vertices, triangles, and lazily derived
//! edges (§3/§4.6).

pub mod barycentric;
pub mod edges;
pub mod icosphere;
pub mod triangles;
pub mod vertices;

pub use barycentric::compute_barycentric;
pub use edges::{compute_edges, Edge, EdgeCache, Edges};
pub use icosphere::{icosahedron, sphere, subdivide};
pub use triangles::{Triangle, TriangleMesh};
pub use vertices::Vertices;
