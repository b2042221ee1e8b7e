//! Edge-spring and edge-damping force generators (§4.7 step 2).

use crate::mesh::Edge;
use crate::physics::physics_mesh::PhysicsMesh;

/// Minimum edge length before its direction is considered degenerate and
/// the edge contributes no force this tick (§4.7).
const MIN_EDGE_LENGTH: f64 = 1e-10;

/// A single edge's rest length, captured once at construction from the
/// mesh's current geometry (§4.7: "`L0_ij` is the edge's rest length,
/// captured at construction of the EdgeSpring force from the current
/// geometry").
#[derive(Debug, Clone, Copy)]
struct EdgeRestLength {
    edge: Edge,
    rest_length: f64,
}

/// Accumulates `f = -k_s * (L - L0) * n` into each edge's endpoints.
#[derive(Debug, Clone)]
pub struct EdgeSpringForce {
    stiffness: f64,
    edges: Vec<EdgeRestLength>,
}

impl EdgeSpringForce {
    pub fn new(mesh: &PhysicsMesh, edges: &[Edge], stiffness: f64) -> Self {
        let edges = edges
            .iter()
            .map(|&edge| {
                let d = mesh.position(edge[1] as usize) - mesh.position(edge[0] as usize);
                EdgeRestLength { edge, rest_length: d.length() }
            })
            .collect();
        Self { stiffness, edges }
    }

    pub fn apply(&self, mesh: &mut PhysicsMesh) {
        for entry in &self.edges {
            let [i, j] = entry.edge;
            let (i, j) = (i as usize, j as usize);

            let d = mesh.position(j) - mesh.position(i);
            let length = d.length();
            if length <= MIN_EDGE_LENGTH {
                continue;
            }
            let n = d / length;
            let f = -self.stiffness * (length - entry.rest_length) * n;

            mesh.node_mut(i).force -= f;
            mesh.node_mut(j).force += f;
        }
    }
}

/// Accumulates velocity-aligned damping `f = -c * v_along * n` into each
/// edge's endpoints, using the same direction `n` the spring force would
/// compute this tick.
#[derive(Debug, Clone)]
pub struct EdgeDampingForce {
    damping: f64,
    edges: Vec<Edge>,
}

impl EdgeDampingForce {
    pub fn new(edges: &[Edge], damping: f64) -> Self {
        Self { damping, edges: edges.to_vec() }
    }

    pub fn apply(&self, mesh: &mut PhysicsMesh) {
        for &[i, j] in &self.edges {
            let (i, j) = (i as usize, j as usize);

            let d = mesh.position(j) - mesh.position(i);
            let length = d.length();
            if length <= MIN_EDGE_LENGTH {
                continue;
            }
            let n = d / length;

            let v_rel = mesh.node(j).velocity - mesh.node(i).velocity;
            let v_along = v_rel.dot(n);
            let f = -self.damping * v_along * n;

            mesh.node_mut(i).force -= f;
            mesh.node_mut(j).force += f;
        }
    }
}
